use serde::{Deserialize, Serialize};

/// Result of a successful wallet connection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectResponse {
    /// First account exposed by the wallet
    pub address: String,
}

/// Result of signing the session message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignResponse {
    pub signature: String,
}
