//! Static file server for the staking page
//!
//! Serves the Trunk build in `dist/`. Unknown paths fall back to `index.html` so the
//! client-side router can handle them. Listens on `STAKE_WEB_ADDR` (default
//! `127.0.0.1:8080`).

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let addr = env::var("STAKE_WEB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Staking page served at http://{}", addr);
    println!("Serving from {}/ directory", DIST_DIR);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, Path::new(DIST_DIR)),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, root: &Path) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve_path(root, target);

    let (status, content_type, body) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", content_type(&file_path), body),
        Err(e) => {
            eprintln!("Cannot read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                "text/html; charset=utf-8",
                b"<!DOCTYPE html><html><body><h1>Not found. Run `trunk build` first.</h1></body></html>".to_vec(),
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    if let Err(e) = stream.write_all(headers.as_bytes()).and_then(|_| stream.write_all(&body)) {
        eprintln!("Failed to write response: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request target to a file under `root`, falling back to `index.html`.
fn resolve_path(root: &Path, target: &str) -> PathBuf {
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    let relative = path.trim_start_matches('/');
    let index = root.join("index.html");

    // no escaping the dist directory
    if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
        return index;
    }
    let candidate = root.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_routes_fall_back_to_index() {
        let root = Path::new("does-not-exist");
        assert_eq!(resolve_path(root, "/"), root.join("index.html"));
        assert_eq!(resolve_path(root, "/stake?x=1"), root.join("index.html"));
    }

    #[test]
    fn test_parent_segments_are_rejected() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(resolve_path(root, "/../Cargo.toml"), root.join("index.html"));
    }

    #[test]
    fn test_existing_file_is_served() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(resolve_path(root, "/Cargo.toml"), root.join("Cargo.toml"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a/app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
