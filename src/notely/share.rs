//! # Share links
//!
//! A share token carries a deliberately reduced view of a note: the title
//! and content only. Ids, tags, archive state and timestamps never leave
//! the device. The token is built in three reversible steps so it can ride
//! in a single query-string value:
//!
//! ```text
//! {"t": title, "c": content}  --JSON-->  text
//! text                        --percent-encode-->  ASCII
//! ASCII                       --base64url (no padding)-->  token
//! ```
//!
//! Decoding runs the exact inverse order and fails with a typed
//! [`ShareError`] rather than panicking; callers log the failure and fall
//! back to normal operation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Note;

/// Query parameter key carrying the token.
pub const SHARE_PARAM: &str = "share";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(rename = "t")]
    pub title: String,
    #[serde(rename = "c")]
    pub content: String,
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("invalid base64 in share token: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid percent-encoding in share token: {0}")]
    PercentDecode(std::string::FromUtf8Error),

    #[error("share payload is not the expected structure: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Encode a note's title and content into a URL-safe token.
pub fn encode(note: &Note) -> String {
    let payload = SharePayload {
        title: note.title.clone(),
        content: note.content.clone(),
    };
    // Serialization of two string fields cannot fail
    let json = serde_json::to_string(&payload).expect("share payload serializes");
    let percent = urlencoding::encode(&json);
    URL_SAFE_NO_PAD.encode(percent.as_bytes())
}

/// Decode a token back into its title and content, inverting [`encode`]
/// step by step.
pub fn decode(token: &str) -> Result<SharePayload, ShareError> {
    let percent_bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let percent = String::from_utf8(percent_bytes)?;
    let json = urlencoding::decode(&percent).map_err(ShareError::PercentDecode)?;
    let payload: SharePayload = serde_json::from_str(&json)?;
    Ok(payload)
}

/// The full query-string fragment (`share=<token>`) for embedding in a URL.
pub fn share_query(note: &Note) -> String {
    format!("{}={}", SHARE_PARAM, encode(note))
}
