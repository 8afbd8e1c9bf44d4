//! Media module for extraction results, post identifiers and normalization.

pub mod item;
pub mod normalize;
pub mod parser;
pub mod post_id;

pub use item::{ExtractionResult, FetchOutcome, MediaEntry, ResultShape};
pub use normalize::normalize;
pub use parser::parse_extraction;
pub use post_id::{extract_post_id, UNKNOWN_POST_ID};
