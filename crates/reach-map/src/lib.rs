pub mod engine;
pub mod error;
pub mod rows;

pub use engine::auto_detect_mapping;
pub use error::{MappingError, assign_column};
pub use rows::map_rows;
