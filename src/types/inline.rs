//! Inline query results.
//!
//! The Bot API models inline results as a polymorphic family sharing a
//! `type` discriminator. Here that family is a tagged union: the enum owns
//! the discriminator and each payload struct carries only its own
//! attributes, so the wire `type` can never disagree with the variant.
//!
//! Attributes follow the same elision rule as form parameters: only values
//! that differ from their type's zero value appear in the serialized
//! object.

use serde::Serialize;
use serde_json::Value;

/// One inline result, tagged with its wire `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Document(InlineQueryResultDocument),
}

impl InlineQueryResult {
    /// The wire value of the `type` discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Article(_) => "article",
            Self::Photo(_) => "photo",
            Self::Gif(_) => "gif",
            Self::Document(_) => "document",
        }
    }

    /// Serialize into the complete wire object: the payload's non-zero
    /// attributes seeded with `"type"`.
    ///
    /// The payload structs are closed serde types, so serialization cannot
    /// fail for a well-formed variant.
    pub fn to_json(&self) -> Value {
        let payload = match self {
            Self::Article(article) => serde_json::to_value(article),
            Self::Photo(photo) => serde_json::to_value(photo),
            Self::Gif(gif) => serde_json::to_value(gif),
            Self::Document(document) => serde_json::to_value(document),
        };
        let mut object = match payload {
            Ok(Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        object.insert("type".to_string(), Value::String(self.kind().to_string()));
        Value::Object(object)
    }
}

/// Render a result list as one JSON-array-shaped string: each element is
/// serialized independently and the list preserves element order.
pub fn serialize_results(results: &[InlineQueryResult]) -> String {
    let items: Vec<String> = results
        .iter()
        .map(|result| result.to_json().to_string())
        .collect();
    format!("[{}]", items.join(","))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineQueryResultArticle {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineQueryResultPhoto {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineQueryResultGif {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gif_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineQueryResultDocument {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub document_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_owns_the_discriminator() {
        let result = InlineQueryResult::Article(InlineQueryResultArticle {
            id: "a1".to_string(),
            title: "Hello".to_string(),
            ..Default::default()
        });
        let json = result.to_json();
        assert_eq!(json["type"], "article");
        assert_eq!(json["id"], "a1");
        assert_eq!(json["title"], "Hello");
    }

    #[test]
    fn zero_valued_attributes_are_excluded() {
        let result = InlineQueryResult::Photo(InlineQueryResultPhoto {
            id: "p1".to_string(),
            photo_url: "https://example.com/p.jpg".to_string(),
            ..Default::default()
        });
        let json = result.to_json();
        let object = json.as_object().unwrap();
        // type + the two non-zero attributes, nothing else
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("caption"));
        assert!(!object.contains_key("photo_width"));
    }

    #[test]
    fn list_serialization_preserves_order_and_per_element_attributes() {
        let results = vec![
            InlineQueryResult::Article(InlineQueryResultArticle {
                id: "1".to_string(),
                title: "First".to_string(),
                url: Some("https://example.com/1".to_string()),
                ..Default::default()
            }),
            InlineQueryResult::Gif(InlineQueryResultGif {
                id: "2".to_string(),
                gif_url: "https://example.com/2.gif".to_string(),
                caption: Some("loop".to_string()),
                ..Default::default()
            }),
        ];

        let raw = serialize_results(&results);
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0]["type"], "article");
        assert_eq!(items[0]["url"], "https://example.com/1");
        assert!(items[0].get("caption").is_none());

        assert_eq!(items[1]["type"], "gif");
        assert_eq!(items[1]["caption"], "loop");
        assert!(items[1].get("title").is_none());
    }
}
