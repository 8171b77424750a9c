//! Parameter extraction.
//!
//! Every Bot API call carries its parameters as `multipart/form-data`
//! fields. This module defines the flat field map ([`FormParams`]) and the
//! trait a parameters type implements to produce it ([`IntoFormParams`]).
//!
//! The wire convention is "zero means absent": a `false` flag, a `0`
//! number, an empty string, an unset file or an empty result list simply
//! does not appear in the form. The typed `push_*` methods are the single
//! place that rule lives: a parameters type lists its fields once and the
//! map comes out right:
//!
//! ```rust,ignore
//! impl IntoFormParams for SendMessageParams {
//!     fn to_form_params(&self) -> FormParams {
//!         let mut form = FormParams::new();
//!         form.push_int("chat_id", self.chat_id);
//!         form.push_str("text", &self.text);
//!         form.push_bool("disable_notification", self.disable_notification);
//!         form.push_markup("reply_markup", self.reply_markup.as_ref());
//!         form
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use crate::types::{serialize_results, InlineQueryResult, InputFile, ReplyMarkup};

/// A single extracted form field: either a plain text value or a file part
/// with its filename. Serialized JSON (reply markup, inline results) rides
/// as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    Part { file_name: String, bytes: Vec<u8> },
}

/// Flat mapping from wire field name to serialized value, built fresh per
/// call and consumed once by the engine.
///
/// Backed by a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    entries: BTreeMap<String, FormValue>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.entries.get(name)
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flags serialize as the literal `"true"`; `false` is absent.
    pub fn push_bool(&mut self, name: &str, value: bool) {
        if value {
            self.insert_text(name, "true".to_string());
        }
    }

    /// Integers serialize as decimal strings; `0` is absent.
    pub fn push_int(&mut self, name: &str, value: i64) {
        if value != 0 {
            self.insert_text(name, value.to_string());
        }
    }

    /// Floats serialize with six fractional digits; `0.0` is absent.
    pub fn push_float(&mut self, name: &str, value: f64) {
        if value != 0.0 {
            self.insert_text(name, format!("{value:.6}"));
        }
    }

    /// Strings serialize as-is; the empty string is absent.
    pub fn push_str(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.insert_text(name, value.to_string());
        }
    }

    /// A file reference becomes a text field (remote id or URL) or a file
    /// part (in-memory upload); `None` is absent.
    pub fn push_file(&mut self, name: &str, value: Option<&InputFile>) {
        match value {
            None => {}
            Some(InputFile::Upload { file_name, bytes }) => {
                self.insert_part(name, file_name.clone(), bytes.clone());
            }
            Some(file) => {
                // FileId and Url both have a textual wire form.
                if let Some(text) = file.form_text() {
                    self.insert_text(name, text.to_string());
                }
            }
        }
    }

    /// Bare byte payloads always attach, even when empty, under the generic
    /// filename `"file"`.
    pub fn push_raw_bytes(&mut self, name: &str, bytes: &[u8]) {
        self.insert_part(name, "file".to_string(), bytes.to_vec());
    }

    /// Keyboard markup serializes to its compact JSON form; `None` is
    /// absent.
    pub fn push_markup(&mut self, name: &str, value: Option<&ReplyMarkup>) {
        if let Some(markup) = value {
            self.insert_text(name, markup.to_form_string());
        }
    }

    /// Inline-query results serialize element-by-element into one
    /// JSON-array-shaped string field; an empty list is absent.
    pub fn push_inline_results(&mut self, name: &str, results: &[InlineQueryResult]) {
        if !results.is_empty() {
            self.insert_text(name, serialize_results(results));
        }
    }

    fn insert_text(&mut self, name: &str, value: String) {
        self.entries.insert(name.to_string(), FormValue::Text(value));
    }

    fn insert_part(&mut self, name: &str, file_name: String, bytes: Vec<u8>) {
        self.entries
            .insert(name.to_string(), FormValue::Part { file_name, bytes });
    }
}

/// Conversion from a typed parameters value to its flat field map.
///
/// Implemented once per API-call parameters type; the engine only ever sees
/// the resulting [`FormParams`].
pub trait IntoFormParams {
    fn to_form_params(&self) -> FormParams;
}

/// Parameterless calls (`getMe`, `getWebhookInfo`, ...) take `()`.
impl IntoFormParams for () {
    fn to_form_params(&self) -> FormParams {
        FormParams::new()
    }
}

impl IntoFormParams for FormParams {
    fn to_form_params(&self) -> FormParams {
        self.clone()
    }
}
