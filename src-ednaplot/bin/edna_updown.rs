//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//! Grid of upstream/downstream concentration time series, one cell per
//! creek and biorep
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
use std::error::Error;

use ednaplot::cli::Args;
use ednaplot::plot::plot_series;
use ednaplot::workflow;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let table = workflow::load_table(&args)?;
    let plot = plot_series(&table);
    workflow::render_output(
        &plot,
        "Upstream and downstream DNA concentration by creek and biorep",
        &args,
    )
}
