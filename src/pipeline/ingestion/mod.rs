// Pipeline ingestion: reading the member sheet into raw rows

pub mod loader;

pub use loader::{load_table, InputFormat, LoadOptions};
