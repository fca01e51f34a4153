//! Custom extractors.

mod query;
mod validated_json;

pub use query::{IdPath, ValidatedQuery};
pub use validated_json::{JsonBody, ValidatedJson};
