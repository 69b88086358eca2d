//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Two report-generating binaries share this crate:
//!
//! - `edna_diff`: normalized downstream-vs-upstream concentration change
//!   as a function of upstream concentration, with log-binned means and a
//!   log-linear fit overlay.
//! - `edna_updown`: a grid of per-creek, per-biorep time series comparing
//!   the two stations.

// Re-export the domain crate
pub use ednaplot_sample as sample;

// Re-export the domain types so binaries use one namespace
pub use ednaplot_sample::{
    align_pair, format_month_year, parse_time_code, station_series, AlignedPair, Observation,
    SampleTable, Station, StationSeries,
};

/// Common CLI argument definitions shared across binaries
pub mod cli;
/// Plotting and visualization functions
pub mod plot;
/// Data reading and parsing functions
pub mod read;
/// Differential statistics over aligned station pairs
pub mod stats;
/// Shared workflow steps used by binaries
pub mod workflow;

// Re-export commonly used items
pub use cli::*;
pub use plot::*;
pub use read::*;
pub use stats::*;
pub use workflow::*;
