//! File references for media-carrying parameters.

/// A file handed to the Bot API in a form field.
///
/// Remote references (`FileId`, `Url`) travel as plain text fields; an
/// `Upload` becomes a multipart file part carrying its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    /// Identifier of a file already stored on Telegram's servers.
    FileId(String),
    /// HTTP(S) URL for Telegram to fetch the file from.
    Url(String),
    /// In-memory payload uploaded with this request.
    Upload { file_name: String, bytes: Vec<u8> },
}

impl InputFile {
    pub fn upload(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Upload {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// The textual wire form, when this reference has one.
    pub fn form_text(&self) -> Option<&str> {
        match self {
            Self::FileId(id) => Some(id),
            Self::Url(url) => Some(url),
            Self::Upload { .. } => None,
        }
    }
}
