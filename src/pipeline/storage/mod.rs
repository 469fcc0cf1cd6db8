// Pipeline storage: the two JSON artifacts

pub mod json_writer;

pub use json_writer::{write_json_atomic, write_outputs, WrittenFiles};
