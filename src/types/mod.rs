//! Wire-facing data types.
//!
//! - `input_file`: file references (remote id/URL vs in-memory upload)
//! - `reply_markup`: keyboard objects that serialize to a JSON string field
//! - `inline`: the `InlineQueryResult` tagged union and its serializer
//! - `response`: the `{ok, result, description}` envelope

pub mod inline;
pub mod input_file;
pub mod reply_markup;
pub mod response;

pub use inline::*;
pub use input_file::*;
pub use reply_markup::*;
pub use response::*;
