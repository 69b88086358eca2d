//! Time-series grid: upstream vs downstream trajectories per creek and biorep
//!
//! One column per creek, one row per biorep. Each column shares a single
//! x axis (so every row of a creek spans the same date range and only the
//! bottom row carries tick labels), each row shares a single y axis with a
//! fixed range. Cell (row, col) is the trace pair bound to that column's
//! x axis and that row's y axis.

use chrono::{Datelike, Months, NaiveDate};
use plotly::common::{Anchor, DashType, Font, Line, Marker, MarkerSymbol, Mode, Title};
use plotly::layout::{Annotation, Axis, Layout};
use plotly::{Plot, Scatter};

use crate::plot::{axis_id, biorep_color, with_x_axis, with_y_axis, MAX_AXES};
use ednaplot_sample::{format_month_year, station_series, SampleTable, Station, StationSeries};

/// Figure size in pixels.
const WIDTH: usize = 1200;
const HEIGHT: usize = 600;

/// Fixed vertical range of every cell.
pub const SERIES_Y_RANGE: [f64; 2] = [-2.0, 100.0];

/// Horizontal gap between creek columns, as a paper fraction.
const COL_GAP: f64 = 0.04;
/// Vertical gap between biorep rows.
const ROW_GAP: f64 = 0.07;

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Tick dates every second month from the first sampled month through
/// `end`, inclusive.
pub fn month_ticks(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut ticks = Vec::new();
    let mut tick = NaiveDate::from_ymd_opt(start.year(), start.month(), 1).unwrap_or(start);
    while tick <= end {
        ticks.push(tick);
        tick = tick + Months::new(2);
    }
    ticks
}

/// Paper-coordinate x extent of one creek column.
fn column_domain(col: usize, ncols: usize) -> [f64; 2] {
    let width = (1.0 - COL_GAP * (ncols - 1) as f64) / ncols as f64;
    let x0 = col as f64 * (width + COL_GAP);
    [x0, x0 + width]
}

/// Paper-coordinate y extent of one biorep row; row 0 is the top row,
/// plotly domains run bottom-up.
fn row_domain(row: usize, nrows: usize) -> [f64; 2] {
    let height = (1.0 - ROW_GAP * (nrows - 1) as f64) / nrows as f64;
    let y1 = 1.0 - row as f64 * (height + ROW_GAP);
    [y1 - height, y1]
}

/// Annotation pinned at an axis-fraction position inside one cell.
fn cell_annotation(
    col: usize,
    ncols: usize,
    row: usize,
    nrows: usize,
    fx: f64,
    fy: f64,
) -> Annotation {
    let [x0, x1] = column_domain(col, ncols);
    let [y0, y1] = row_domain(row, nrows);
    Annotation::new()
        .x_ref("paper")
        .y_ref("paper")
        .x(x0 + fx * (x1 - x0))
        .y(y0 + fy * (y1 - y0))
        .show_arrow(false)
}

/// One station's trajectory: solid line with filled markers for Up,
/// dashed line with open markers for Dn, both in the row's color.
fn series_trace(
    series: &StationSeries,
    station: Station,
    color: &'static str,
) -> Box<Scatter<f64, f64>> {
    let days: Vec<f64> = series.date.iter().map(|d| day_number(*d)).collect();
    let trace = Scatter::new(days, series.dna.to_vec()).mode(Mode::LinesMarkers);
    match station {
        Station::Up => trace
            .line(Line::new().color(color))
            .marker(Marker::new().symbol(MarkerSymbol::Circle).size(6).color(color)),
        Station::Dn => trace
            .line(Line::new().color(color).dash(DashType::Dash))
            .marker(
                Marker::new()
                    .symbol(MarkerSymbol::CircleOpen)
                    .size(6)
                    .color(color),
            ),
    }
}

/// Assemble the time-series grid.
///
/// Every (biorep, creek) cell is present even when it holds no samples;
/// the station-less creek is not excluded here.
pub fn plot_series(table: &SampleTable) -> Plot {
    let creeks = table.creeks();
    let bioreps = table.bioreps();
    if creeks.len() > MAX_AXES || bioreps.len() > MAX_AXES {
        eprintln!(
            "⚠️ grid truncated to {}x{}: {} creeks, {} bioreps in the data",
            MAX_AXES,
            MAX_AXES,
            creeks.len(),
            bioreps.len()
        );
    }
    let ncols = creeks.len().min(MAX_AXES);
    let nrows = bioreps.len().min(MAX_AXES);

    let mut plot = Plot::new();

    for (col, creek) in creeks.iter().take(ncols).enumerate() {
        for (row, &biorep) in bioreps.iter().take(nrows).enumerate() {
            let color = biorep_color(row);
            let x_id = axis_id("x", col);
            let y_id = axis_id("y", row);

            let up = station_series(table, creek, biorep, Station::Up);
            if !up.is_empty() {
                plot.add_trace(
                    series_trace(&up, Station::Up, color)
                        .name(format!("{} biorep {} Up", creek, biorep))
                        .x_axis(x_id.as_str())
                        .y_axis(y_id.as_str()),
                );
            }
            let dn = station_series(table, creek, biorep, Station::Dn);
            if !dn.is_empty() {
                plot.add_trace(
                    series_trace(&dn, Station::Dn, color)
                        .name(format!("{} biorep {} Dn", creek, biorep))
                        .x_axis(x_id.as_str())
                        .y_axis(y_id.as_str()),
                );
            }
        }
    }

    let mut layout = Layout::new().width(WIDTH).height(HEIGHT).show_legend(false);

    // one x axis per creek column, ticks under the bottom row
    for (col, creek) in creeks.iter().take(ncols).enumerate() {
        let mut axis = Axis::new()
            .domain(&column_domain(col, ncols))
            .anchor(axis_id("y", nrows - 1))
            .title(Title::with_text("Date"))
            .show_grid(true)
            .tick_angle(-30.0);
        if let Some((first, last)) = table.date_range(creek) {
            let span = day_number(last) - day_number(first);
            let pad = (0.05 * span).max(15.0);
            axis = axis.range(vec![day_number(first) - pad, day_number(last) + pad]);

            let ticks = month_ticks(first, last);
            let tick_values: Vec<f64> = ticks.iter().map(|d| day_number(*d)).collect();
            let tick_text: Vec<String> = ticks.iter().map(|d| format_month_year(*d)).collect();
            axis = axis.tick_values(tick_values).tick_text(tick_text);
        }
        layout = with_x_axis(layout, col, axis);
    }

    // one y axis per biorep row, labels on the leftmost column
    for row in 0..nrows {
        let axis = Axis::new()
            .domain(&row_domain(row, nrows))
            .anchor(axis_id("x", 0))
            .range(vec![SERIES_Y_RANGE[0], SERIES_Y_RANGE[1]])
            .title(Title::with_text("DNA concentration"))
            .show_grid(true)
            .zero_line(false);
        layout = with_y_axis(layout, row, axis);
    }

    let mut annotations = Vec::new();

    // creek headers on the top row only
    for (col, creek) in creeks.iter().take(ncols).enumerate() {
        annotations.push(
            cell_annotation(col, ncols, 0, nrows, 0.05, 0.95)
                .x_anchor(Anchor::Left)
                .y_anchor(Anchor::Top)
                .text(format!("<b>{}</b>", creek))
                .font(Font::new().size(12)),
        );
    }

    // biorep labels in the leftmost column only
    for (row, &biorep) in bioreps.iter().take(nrows).enumerate() {
        annotations.push(
            cell_annotation(0, ncols, row, nrows, 0.01, 0.85)
                .x_anchor(Anchor::Left)
                .y_anchor(Anchor::Top)
                .text(format!("biorep {}", biorep))
                .font(Font::new().size(10).color(biorep_color(row))),
        );
    }

    // station key in the very first cell, next to the two lines
    annotations.push(
        cell_annotation(0, ncols, 0, nrows, 0.65, 0.65)
            .text("<b>Up</b>")
            .text_angle(-65.0)
            .font(Font::new().size(10).color(biorep_color(0))),
    );
    annotations.push(
        cell_annotation(0, ncols, 0, nrows, 0.8, 0.18)
            .text("<b>Dn</b>")
            .font(Font::new().size(10).color(biorep_color(0))),
    );

    layout = layout.annotations(annotations);
    plot.set_layout(layout);

    plot
}
