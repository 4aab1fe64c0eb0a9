pub mod insight;
pub mod summary;
