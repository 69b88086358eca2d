//! Sample domain model for creek eDNA monitoring
//!
//! This crate holds the measurement table loaded from the qPCR export and
//! the pure operations the plotting binaries share:
//!
//! - MMYY time-code parsing and month/year formatting
//! - category enumeration (creeks, bioreps, stations) in plotting order
//! - per-station series extraction and upstream/downstream date alignment

pub mod align;
pub mod date;
pub mod table;

pub use align::{align_pair, station_series, AlignedPair, StationSeries};
pub use date::{format_month_year, parse_time_code, DateCodeError};
pub use table::{Observation, SampleTable, Station};
