//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//! Normalized downstream-vs-upstream change as a function of upstream
//! concentration, with log-binned means and a log-linear fit
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
use ednaplot::plot::plot_diff;
use ednaplot::stats::{collect_paired_diffs, fit_log_linear, log_binned_means};
use ednaplot::workflow;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let table = workflow::load_table(&args)?;
    let bioreps = table.bioreps();

    let paired = collect_paired_diffs(&table, &args.exclude_creek);
    if paired.upstream.is_empty() {
        eprintln!(
            "⚠️ no dates sampled at both stations outside creek {}; the figure will be empty",
            args.exclude_creek
        );
    }

    let bins = log_binned_means(&paired.upstream, &paired.diff);
    let (fit, fit_x, fit_y) = fit_log_linear(&paired.upstream, &paired.diff);
    println!(
        "📈 log-linear fit over {} paired samples: slope {:.4}, intercept {:.4}",
        paired.upstream.len(),
        fit.slope,
        fit.intercept
    );

    let plot = plot_diff(&paired, &bins, &fit, &fit_x, &fit_y, &bioreps);
    workflow::render_output(
        &plot,
        "Up/Dn concentration change vs upstream concentration",
        &args,
    )
}
