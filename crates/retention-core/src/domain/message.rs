//! Customer message text, sanitized before any collaborator sees it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{Result, RetentionError};

/// Upper bound on message size handed to the sentiment collaborator.
pub const MAX_MESSAGE_BYTES: usize = 5000;

/// Free text from a customer interaction.
///
/// The only constructor is [`CustomerMessage::new`], so every value of this
/// type has already been through sanitization:
/// - control characters are dropped (whitespace controls become spaces)
/// - runs of whitespace collapse to one space, ends are trimmed
/// - empty results are rejected
/// - text is cut to [`MAX_MESSAGE_BYTES`] on a char boundary
///
/// Collaborators receive it as a bound value, never spliced into query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerMessage(String);

impl CustomerMessage {
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let mut cleaned = String::with_capacity(raw.as_ref().len());
        let mut pending_space = false;
        for c in raw.as_ref().chars() {
            if c.is_whitespace() {
                pending_space = true;
                continue;
            }
            if c.is_control() {
                continue;
            }
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(c);
        }

        if cleaned.is_empty() {
            return Err(RetentionError::InvalidInput(
                "message is empty after sanitization".to_string(),
            ));
        }

        if cleaned.len() > MAX_MESSAGE_BYTES {
            let mut cut = MAX_MESSAGE_BYTES;
            while !cleaned.is_char_boundary(cut) {
                cut -= 1;
            }
            cleaned.truncate(cut);
            cleaned.truncate(cleaned.trim_end().len());
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerMessage {
    type Error = RetentionError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<CustomerMessage> for String {
    fn from(message: CustomerMessage) -> Self {
        message.0
    }
}

impl fmt::Display for CustomerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
