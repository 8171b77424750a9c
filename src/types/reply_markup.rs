//! Keyboard markup objects.
//!
//! These ride in a single `reply_markup` form field as a compact JSON
//! string rather than as individual multipart fields.

use serde::Serialize;

/// The `reply_markup` family. Serialized via [`ReplyMarkup::to_form_string`]
/// into the string field the Bot API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl ReplyMarkup {
    /// Compact JSON form for the wire.
    ///
    /// Serialization of these closed structs cannot fail.
    pub fn to_form_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn remove_keyboard() -> Self {
        Self::Remove(ReplyKeyboardRemove {
            remove_keyboard: true,
        })
    }

    pub fn force_reply() -> Self {
        Self::ForceReply(ForceReply { force_reply: true })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForceReply {
    pub force_reply: bool,
}
