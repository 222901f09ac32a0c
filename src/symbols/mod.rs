// src/symbols/mod.rs
pub mod loader;
pub mod store;

pub use loader::{load_records, load_records_from_path, LoadedTable};
pub use store::{Record, RecordStore};
