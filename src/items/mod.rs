pub mod backup;
pub mod models;
pub mod store;

pub use models::{ColorTag, Item, SortOrder};
pub use store::{ItemStore, StoreError};
