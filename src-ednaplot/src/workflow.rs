//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//! Shared workflow steps used by the binaries
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

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use build_html::*;
use plotly::Plot;

use crate::cli::Args;
use crate::read;
use ednaplot_env::default_qpcr_path;
use ednaplot_sample::SampleTable;

/// Resolve the input file: the CLI override wins, then the
/// EDNAPLOT_DIR-based default, then the plain relative default.
pub fn resolve_data_path(args: &Args) -> PathBuf {
    args.data.clone().unwrap_or_else(default_qpcr_path)
}

/// Load the measurement table for the resolved path, with a short status
/// line per step.
pub fn load_table(args: &Args) -> Result<SampleTable, Box<dyn Error>> {
    let path = resolve_data_path(args);
    println!("📄 loading {}", path.display());
    let table = read::load_sample_table(&path)?;
    println!(
        "✅ {} measurements across {} creeks, {} bioreps",
        table.len(),
        table.creeks().len(),
        table.bioreps().len()
    );
    Ok(table)
}

/// Hand the finished figure to the user.
///
/// With `--output` the figure is embedded in a self-contained HTML page
/// and written to disk; otherwise the interactive figure opens in the
/// default browser and the call returns without blocking.
pub fn render_output(plot: &Plot, title: &str, args: &Args) -> Result<(), Box<dyn Error>> {
    match &args.output {
        Some(path) => {
            let html: String = HtmlPage::new()
                .with_title(title)
                .with_script_link("https://cdn.plot.ly/plotly-latest.min.js")
                .with_raw(plot.to_inline_html(Some("figure")))
                .to_html_string();

            let html_path = path.with_extension("html");
            if let Some(parent) = html_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let mut file = File::create(&html_path)?;
            file.write_all(html.as_bytes())?;
            file.flush()?;
            println!("📊 report saved to: {}", html_path.display());
        }
        None => {
            plot.show();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_data_override_wins() {
        let args = Args::parse_from(["edna_diff", "--data", "/tmp/other.csv"]);
        assert_eq!(resolve_data_path(&args), PathBuf::from("/tmp/other.csv"));
    }

    #[test]
    fn default_excluded_creek_is_2brn() {
        let args = Args::parse_from(["edna_diff"]);
        assert_eq!(args.exclude_creek, "2Brn");
    }

    #[test]
    fn html_report_is_written_next_to_requested_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report");
        let args = Args::parse_from([
            "edna_diff",
            "--output",
            out.to_str().unwrap(),
        ]);
        let plot = Plot::new();
        render_output(&plot, "empty figure", &args).unwrap();
        let html = std::fs::read_to_string(out.with_extension("html")).unwrap();
        assert!(html.contains("empty figure"));
        assert!(html.contains("plotly"));
    }
}
