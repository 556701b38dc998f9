//! Trip data: reading city files, the in-memory table, and filtering.

pub mod filter;
pub mod schema;
pub mod source;
pub mod table;

pub use filter::{apply, FilterCriteria};
pub use source::RecordSource;
pub use table::{Table, TripRow};
