pub mod batch;
pub mod domain;
pub mod error;

pub use batch::{parse_record_line, sort_records, MalformedLinePolicy, SortReport};
pub use domain::*;
pub use error::CoreError;
