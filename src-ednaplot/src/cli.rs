//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//! Common command-line interface definitions shared across binaries
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

use clap::Parser;
use std::path::PathBuf;

/// Default creek left out of the differential analysis: it has a single
/// station, so there is nothing to pair.
pub const DEFAULT_EXCLUDED_CREEK: &str = "2Brn";

/// Shared CLI arguments for ednaplot binaries.
#[derive(Parser, Debug, Clone)]
#[command(author, about, long_about = None)]
pub struct Args {
    /// Path to the qPCR export CSV (columns: time,creek,station,biorep,DNA_concentation).
    /// Defaults to $EDNAPLOT_DIR/data/cutthroat_trout_qPCR[UW2].csv when
    /// EDNAPLOT_DIR is set, else data/cutthroat_trout_qPCR[UW2].csv in the
    /// working directory.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Write a self-contained HTML report to this path instead of opening
    /// the interactive figure.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Creek excluded from the upstream/downstream differential analysis.
    /// Only read by edna_diff; the time-series grid keeps every creek.
    #[arg(long, default_value = DEFAULT_EXCLUDED_CREEK)]
    pub exclude_creek: String,
}
