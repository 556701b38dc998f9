//! Statistics over a filtered trip table.
//!
//! Each aggregator reads the table independently and returns `None` when
//! there are no trips to describe.

pub mod duration;
pub mod mode;
pub mod stations;
pub mod time;
pub mod users;

pub use duration::DurationStats;
pub use stations::StationStats;
pub use time::TimeStats;
pub use users::{Demographics, UserStats};
