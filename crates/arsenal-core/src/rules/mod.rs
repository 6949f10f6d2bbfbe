pub mod tags;
pub mod validation;

pub use tags::{normalize_tags, split_tags};
pub use validation::validate_draft;
