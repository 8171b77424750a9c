//! tgkit
//!
//! Transport core for the Telegram Bot API: typed parameter extraction into
//! `multipart/form-data`, request execution, and decoding of the
//! `{ok, result, description}` response envelope.
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use tgkit::{Client, ClientConfig, FormParams, IntoFormParams};
//!
//! #[derive(Deserialize)]
//! struct User { id: i64, first_name: String }
//!
//! let client = Client::new(ClientConfig::new("123:abc"))?;
//! let me: User = client.call("getMe", &()).await?;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod params;
pub mod types;

pub use client::{Client, ClientConfig};
pub use error::BotError;
pub use params::{FormParams, FormValue, IntoFormParams};
pub use types::{ApiResponse, InlineQueryResult, InputFile, ReplyMarkup};
