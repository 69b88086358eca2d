//! Differential figure: normalized up/down change vs upstream concentration

use ndarray::Array1;
use plotly::common::{DashType, Line, Marker, MarkerSymbol, Mode, Title};
use plotly::layout::{Axis, AxisType, Layout};
use plotly::{Plot, Scatter};

use crate::plot::{biorep_color, legend_annotations, padded_range, LegendEntry};
use crate::stats::{LinearFit, LogBins, PairedDiffs};

/// Figure size in pixels.
const WIDTH: usize = 400;
const HEIGHT: usize = 550;

/// One open-circle scatter trace per non-empty (creek, biorep) group,
/// colored by the biorep's palette index so every creek reuses the same
/// color key.
pub fn diff_scatter_traces(paired: &PairedDiffs) -> Vec<Box<Scatter<f64, f64>>> {
    let mut traces = Vec::new();
    for group in &paired.groups {
        if group.upstream.is_empty() {
            continue;
        }
        let trace = Scatter::new(group.upstream.to_vec(), group.diff.to_vec())
            .mode(Mode::Markers)
            .name(format!("{} biorep {}", group.creek, group.biorep))
            .marker(
                Marker::new()
                    .symbol(MarkerSymbol::CircleOpen)
                    .size(6)
                    .color(biorep_color(group.biorep_index)),
            );
        traces.push(trace);
    }
    traces
}

/// Binned means as filled black squares at the geometric-mean bin centers.
/// NaN means serialize to null and leave a gap.
pub fn binned_means_trace(bins: &LogBins) -> Box<Scatter<f64, f64>> {
    Scatter::new(bins.centers.to_vec(), bins.means.to_vec())
        .mode(Mode::Markers)
        .name("Binned means")
        .marker(
            Marker::new()
                .symbol(MarkerSymbol::Square)
                .size(10)
                .color("#000000"),
        )
}

/// The fitted line, drawn dashed across the sorted upstream range.
pub fn fit_line_trace(fit_x: &Array1<f64>, fit_y: &Array1<f64>) -> Box<Scatter<f64, f64>> {
    Scatter::new(fit_x.to_vec(), fit_y.to_vec())
        .mode(Mode::Lines)
        .name("linear fit")
        .line(Line::new().color("#000000").dash(DashType::Dash).width(1.5))
}

/// Manual legend: one color-matched entry per biorep, then the binned
/// means, then the fit equation. Built once from the biorep list, so the
/// biorep entries appear exactly once however many creeks are plotted.
pub fn build_legend(bioreps: &[u32], fit: &LinearFit) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = bioreps
        .iter()
        .enumerate()
        .map(|(index, &biorep)| LegendEntry {
            text: format!("biorep = {}", biorep),
            color: biorep_color(index),
            bold: false,
        })
        .collect();
    entries.push(LegendEntry {
        text: "Binned means".to_string(),
        color: "#000000",
        bold: true,
    });
    entries.push(LegendEntry {
        text: format!("linear fit<br>{}", fit.equation_text()),
        color: "#000000",
        bold: false,
    });
    entries
}

/// Assemble the differential figure.
///
/// # Arguments
/// * `paired` - paired samples per (creek, biorep) plus master sequences
/// * `bins` - log-binned means over the master sequences
/// * `fit` - log-linear fit coefficients
/// * `fit_x`, `fit_y` - fitted line over the sorted upstream range
/// * `bioreps` - sorted biorep list driving colors and the legend
///
/// # Returns
/// * Plot with log-scaled x axis and the y range clamped to the raw data
///
/// # Details
/// The y range is captured from the scatter and binned means before the
/// fit line is added; the line is an annotation over the data and must
/// not widen the frame.
pub fn plot_diff(
    paired: &PairedDiffs,
    bins: &LogBins,
    fit: &LinearFit,
    fit_x: &Array1<f64>,
    fit_y: &Array1<f64>,
    bioreps: &[u32],
) -> Plot {
    let mut plot = Plot::new();
    for trace in diff_scatter_traces(paired) {
        plot.add_trace(trace);
    }

    // frame the raw data and the binned means; the fit line comes later
    // and must not widen the frame
    let y_range = padded_range(
        paired
            .diff
            .iter()
            .copied()
            .chain(bins.means.iter().copied()),
    );

    plot.add_trace(fit_line_trace(fit_x, fit_y));
    // squares last so they stay on top of the line
    plot.add_trace(binned_means_trace(bins));

    let mut y_axis = Axis::new()
        .title(Title::with_text(
            "(DNA<sub>Up</sub> − DNA<sub>Dn</sub>)/DNA<sub>Up</sub>",
        ))
        .show_grid(true)
        .zero_line(false);
    if let Some((lo, hi)) = y_range {
        y_axis = y_axis.range(vec![lo, hi]);
    }

    let layout = Layout::new()
        .width(WIDTH)
        .height(HEIGHT)
        .show_legend(false)
        .x_axis(
            Axis::new()
                .title(Title::with_text("DNA<sub>Up</sub>"))
                .type_(AxisType::Log)
                .show_grid(true),
        )
        .y_axis(y_axis)
        .annotations(legend_annotations(&build_legend(bioreps, fit)));
    plot.set_layout(layout);

    plot
}
