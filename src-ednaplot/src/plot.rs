//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//! Shared plotting helpers: palette, manual legends, axis utilities
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

pub mod plot_diff;
pub mod plot_series;

use plotly::common::{Anchor, Font};
use plotly::layout::{Annotation, Axis, Layout};

pub use plot_diff::{
    binned_means_trace, build_legend, diff_scatter_traces, fit_line_trace, plot_diff,
};
pub use plot_series::{month_ticks, plot_series, SERIES_Y_RANGE};

/// Get a color from the 10-color categorical palette
///
/// # Arguments
/// * `index` - Index of the color to retrieve (cycles through 10 colors)
///
/// # Returns
/// * Hex color code as a static string
///
/// # Details
/// The biorep at position `index` of the sorted biorep list keeps this
/// color across both figures, so legend order and line colors agree.
pub fn biorep_color(index: usize) -> &'static str {
    const COLORS: [&str; 10] = [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
        "#bcbd22", "#17becf",
    ];
    COLORS[index % COLORS.len()]
}

/// One manual legend line.
///
/// Legends are drawn as annotations stacked below a fixed anchor; the
/// order of the entry list is the order on screen, and the vertical
/// offset comes from the entry's index alone.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    pub color: &'static str,
    pub bold: bool,
}

/// Paper x position of the manual legend (right-anchored).
pub const LEGEND_X: f64 = 0.9;
/// Paper y position of the first legend entry.
pub const LEGEND_Y_TOP: f64 = 0.50;
/// Vertical step between legend entries.
pub const LEGEND_Y_STEP: f64 = 0.05;

/// Stack legend entries as annotations on white boxes.
pub fn legend_annotations(entries: &[LegendEntry]) -> Vec<Annotation> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let text = if entry.bold {
                format!("<b>{}</b>", entry.text)
            } else {
                entry.text.clone()
            };
            Annotation::new()
                .x_ref("paper")
                .y_ref("paper")
                .x(LEGEND_X)
                .y(LEGEND_Y_TOP - LEGEND_Y_STEP * index as f64)
                .x_anchor(Anchor::Right)
                .y_anchor(Anchor::Top)
                .text(text)
                .show_arrow(false)
                .background_color("#ffffff")
                .font(Font::new().size(10).color(entry.color))
        })
        .collect()
}

/// Range of the finite values with 5% margins on each side.
///
/// Returns None when nothing is finite. Capturing this before an overlay
/// trace is added keeps the frame around the raw data.
pub fn padded_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return None;
    }
    let span = max - min;
    let pad = if span == 0.0 { 0.5 } else { 0.05 * span };
    Some((min - pad, max + pad))
}

/// Plotly axis id for one slot: `x`, `x2`, ... / `y`, `y2`, ...
pub fn axis_id(kind: &str, index: usize) -> String {
    if index == 0 {
        kind.to_string()
    } else {
        format!("{}{}", kind, index + 1)
    }
}

/// Highest axis slot addressable through the typed layout API.
pub const MAX_AXES: usize = 8;

/// Install `axis` as the layout's x-axis number `index + 1`.
///
/// Slots past [`MAX_AXES`] are not addressable; callers cap their grids
/// and warn before getting here.
pub fn with_x_axis(layout: Layout, index: usize, axis: Axis) -> Layout {
    match index {
        0 => layout.x_axis(axis),
        1 => layout.x_axis2(axis),
        2 => layout.x_axis3(axis),
        3 => layout.x_axis4(axis),
        4 => layout.x_axis5(axis),
        5 => layout.x_axis6(axis),
        6 => layout.x_axis7(axis),
        7 => layout.x_axis8(axis),
        _ => layout,
    }
}

/// Install `axis` as the layout's y-axis number `index + 1`.
pub fn with_y_axis(layout: Layout, index: usize, axis: Axis) -> Layout {
    match index {
        0 => layout.y_axis(axis),
        1 => layout.y_axis2(axis),
        2 => layout.y_axis3(axis),
        3 => layout.y_axis4(axis),
        4 => layout.y_axis5(axis),
        5 => layout.y_axis6(axis),
        6 => layout.y_axis7(axis),
        7 => layout.y_axis8(axis),
        _ => layout,
    }
}
