//! # Display Helpers
//!
//! Formatting for account addresses shown next to the connect button and in the
//! destination address field.
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
//! assert_eq!(truncate_address(address), "0x5aAe...eAed");
//! ```

/// Keep the first `prefix_len` and last `suffix_len` characters of an address,
/// joined by an ellipsis.
///
/// Addresses that would not get shorter are returned unchanged. Lengths count
/// characters, so non-ASCII input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// assert_eq!(format_address(addr, 6, 4), "0x5aAe...eAed");
/// assert_eq!(format_address(addr, 4, 4), "0x5a...eAed");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    // "..." is three characters; anything not longer than the result stays as is
    if char_count <= prefix_len + suffix_len + 3 {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an account address with the `0x` prefix plus four hex digits on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
