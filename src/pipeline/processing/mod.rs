// Pipeline processing: structure detection, normalization, classification, and aggregation

pub mod aggregate;
pub mod assemble;
pub mod classify;
pub mod normalize;
pub mod structure;

pub use aggregate::Statistics;
pub use assemble::RecordAssembler;
pub use structure::{detect_structure, TableLayout};
