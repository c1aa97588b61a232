pub mod flatten;
pub mod merge;
pub mod types;

// Re-export commonly used items
pub use flatten::{flatten_tokens, join_classes};
pub use merge::{merge_classes, resolve_conflicts, ConflictLookup};
pub use types::ClassToken;
