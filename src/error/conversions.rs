//! Type conversions into `BotError`.
//!
//! `serde_json::Error` intentionally has no `From` impl here: the same
//! source error means `EnvelopeDecode` when the envelope fails to parse and
//! `ResultDecode` when the result payload does, so both call sites map it
//! explicitly.

use super::BotError;

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
