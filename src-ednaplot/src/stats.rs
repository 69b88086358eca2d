//! ednaplot - Exploratory plots for creek eDNA qPCR monitoring data
//! Differential statistics over aligned upstream/downstream pairs
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

use std::cmp::Ordering;

use ndarray::Array1;

use ednaplot_sample::{align_pair, station_series, SampleTable, Station};

/// Number of logarithmically spaced bin edges over the upstream
/// concentration range (one less bin than edges).
pub const LOG_BIN_EDGES: usize = 10;

/// Normalized concentration change from upstream to downstream,
/// `(dn - up) / up`, elementwise.
///
/// A zero upstream concentration yields an infinite or NaN entry. That is
/// accepted: non-finite values flow through the binned means and the fit,
/// and render as gaps.
pub fn relative_diff(upstream: &Array1<f64>, downstream: &Array1<f64>) -> Array1<f64> {
    (downstream - upstream) / upstream
}

/// Paired samples for one (creek, biorep) group.
#[derive(Debug, Clone)]
pub struct GroupDiffs {
    pub creek: String,
    pub biorep: u32,
    /// Position of the biorep in the sorted biorep list; selects the
    /// palette color.
    pub biorep_index: usize,
    pub upstream: Array1<f64>,
    pub diff: Array1<f64>,
}

/// Paired samples accumulated across every creek and biorep, in iteration
/// order: sorted creeks (minus the excluded one) outer, sorted bioreps
/// inner. The master sequences concatenate the groups in that order.
#[derive(Debug, Clone)]
pub struct PairedDiffs {
    pub groups: Vec<GroupDiffs>,
    pub upstream: Array1<f64>,
    pub diff: Array1<f64>,
}

/// One pure aggregation pass over the table.
///
/// Only dates sampled at both stations of a (creek, biorep) contribute;
/// unmatched samples are dropped. `exclude_creek` is skipped entirely.
pub fn collect_paired_diffs(table: &SampleTable, exclude_creek: &str) -> PairedDiffs {
    let bioreps = table.bioreps();

    let mut groups = Vec::new();
    let mut master_up: Vec<f64> = Vec::new();
    let mut master_diff: Vec<f64> = Vec::new();

    for creek in table.creeks() {
        if creek == exclude_creek {
            continue;
        }
        for (biorep_index, &biorep) in bioreps.iter().enumerate() {
            let up = station_series(table, &creek, biorep, Station::Up);
            let dn = station_series(table, &creek, biorep, Station::Dn);
            let pair = align_pair(&up, &dn);
            let diff = relative_diff(&pair.upstream, &pair.downstream);

            master_up.extend(pair.upstream.iter());
            master_diff.extend(diff.iter());
            groups.push(GroupDiffs {
                creek: creek.clone(),
                biorep,
                biorep_index,
                upstream: pair.upstream,
                diff,
            });
        }
    }

    PairedDiffs {
        groups,
        upstream: Array1::from(master_up),
        diff: Array1::from(master_diff),
    }
}

/// Log-spaced bins over the upstream concentration range.
#[derive(Debug, Clone)]
pub struct LogBins {
    /// 10 edges, natural-log spaced between the data min and max.
    pub edges: Array1<f64>,
    /// 9 centers, each the geometric mean of its two edges.
    pub centers: Array1<f64>,
    /// 9 per-bin means of the diff values; NaN where a bin is empty.
    pub means: Array1<f64>,
}

/// Bin index in 1..=9 for `v`: bin `i` covers `edges[i-1] < v <= edges[i]`,
/// with the outer edges open so out-of-range values land in the first or
/// last bin.
fn digitize(v: f64, edges: &Array1<f64>) -> usize {
    let below = edges.iter().filter(|&&edge| edge < v).count();
    below.clamp(1, edges.len() - 1)
}

/// Mean diff per logarithmic upstream bin.
///
/// Edges span the min..max of `upstream` in natural-log space. A bin with
/// no members gets a NaN mean; a bin containing a non-finite diff gets a
/// non-finite mean. Both are kept and later render as gaps.
pub fn log_binned_means(upstream: &Array1<f64>, diff: &Array1<f64>) -> LogBins {
    let ln_min = upstream.fold(f64::INFINITY, |a, &b| a.min(b)).ln();
    let ln_max = upstream.fold(f64::NEG_INFINITY, |a, &b| a.max(b)).ln();
    let step = (ln_max - ln_min) / (LOG_BIN_EDGES - 1) as f64;

    let edges = Array1::from_shape_fn(LOG_BIN_EDGES, |i| (ln_min + step * i as f64).exp());
    let centers = Array1::from_shape_fn(LOG_BIN_EDGES - 1, |i| {
        (0.5 * (edges[i].ln() + edges[i + 1].ln())).exp()
    });

    let mut sums = vec![0.0_f64; LOG_BIN_EDGES - 1];
    let mut counts = vec![0_usize; LOG_BIN_EDGES - 1];
    for (&u, &d) in upstream.iter().zip(diff.iter()) {
        let bin = digitize(u, &edges) - 1;
        sums[bin] += d;
        counts[bin] += 1;
    }

    let means = Array1::from_shape_fn(LOG_BIN_EDGES - 1, |i| {
        if counts[i] == 0 {
            f64::NAN
        } else {
            sums[i] / counts[i] as f64
        }
    });

    LogBins {
        edges,
        centers,
        means,
    }
}

/// Degree-1 least-squares fit of diff against ln(upstream).
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fitted diff at one upstream concentration.
    pub fn evaluate(&self, upstream: f64) -> f64 {
        self.intercept + self.slope * upstream.ln()
    }

    /// Legend line for the fit. The sign is forced to a minus and the
    /// slope magnitude is shown; the label keeps the decreasing-trend
    /// convention even when the fitted slope is positive.
    pub fn equation_text(&self) -> String {
        format!("y = {:.2} - {:.2}x", self.intercept, self.slope.abs())
    }
}

/// Fit diff as a linear function of ln(upstream).
///
/// The pairs are sorted ascending by upstream value first; the returned
/// arrays are the sorted upstream values and the fitted line evaluated on
/// them, ready to draw across the full data range.
pub fn fit_log_linear(
    upstream: &Array1<f64>,
    diff: &Array1<f64>,
) -> (LinearFit, Array1<f64>, Array1<f64>) {
    let mut order: Vec<usize> = (0..upstream.len()).collect();
    order.sort_by(|&a, &b| {
        upstream[a]
            .partial_cmp(&upstream[b])
            .unwrap_or(Ordering::Equal)
    });

    let xs = Array1::from_iter(order.iter().map(|&i| upstream[i]));
    let ys = Array1::from_iter(order.iter().map(|&i| diff[i]));
    let ln_xs = xs.mapv(f64::ln);

    let n = ln_xs.len() as f64;
    let mean_x = ln_xs.sum() / n;
    let mean_y = ys.sum() / n;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in ln_xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let fit = LinearFit { slope, intercept };
    let line = ln_xs.mapv(|x| intercept + slope * x);

    (fit, xs, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ednaplot_sample::{parse_time_code, Observation};
    use ndarray::array;

    #[test]
    fn diff_is_exact_for_simple_pair() {
        let diff = relative_diff(&array![10.0], &array![15.0]);
        assert_eq!(diff[0], 0.5);
    }

    #[test]
    fn zero_upstream_yields_non_finite_diff() {
        let diff = relative_diff(&array![0.0, 0.0], &array![15.0, 0.0]);
        assert!(!diff[0].is_finite());
        assert!(diff[0] > 0.0); // 15/0 -> +inf
        assert!(diff[1].is_nan()); // 0/0
    }

    #[test]
    fn binned_means_are_uniform_for_uniform_diffs() {
        let upstream = array![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0];
        let diff = Array1::from_elem(upstream.len(), 0.1);
        let bins = log_binned_means(&upstream, &diff);

        assert_eq!(bins.edges.len(), LOG_BIN_EDGES);
        assert_eq!(bins.means.len(), LOG_BIN_EDGES - 1);
        // edges land on the powers of two up to rounding, so every
        // populated bin averages to exactly 0.1; a NaN is allowed only
        // for a bin left empty by an edge-rounding wobble
        for (i, &mean) in bins.means.iter().enumerate() {
            assert!(
                mean.is_nan() || (mean - 0.1).abs() < 1e-12,
                "bin {} mean was {}",
                i,
                mean
            );
        }
        // the outer bins always hold the range extremes
        assert!((bins.means[0] - 0.1).abs() < 1e-12);
        assert!((bins.means[8] - 0.1).abs() < 1e-12);
        let populated = bins.means.iter().filter(|m| !m.is_nan()).count();
        assert!(populated >= 5, "only {} bins populated", populated);
    }

    #[test]
    fn bin_centers_are_geometric_means_of_edges() {
        let upstream = array![1.0, 512.0];
        let diff = array![0.0, 0.0];
        let bins = log_binned_means(&upstream, &diff);
        for i in 0..bins.centers.len() {
            let geometric = (bins.edges[i] * bins.edges[i + 1]).sqrt();
            assert!((bins.centers[i] - geometric).abs() < 1e-9 * geometric);
        }
    }

    #[test]
    fn empty_bins_keep_nan_means() {
        // data only at the extremes: the middle bins stay empty
        let upstream = array![1.0, 512.0];
        let diff = array![0.2, 0.4];
        let bins = log_binned_means(&upstream, &diff);
        assert!((bins.means[0] - 0.2).abs() < 1e-12);
        assert!((bins.means[8] - 0.4).abs() < 1e-12);
        for i in 1..8 {
            assert!(bins.means[i].is_nan(), "bin {} should be empty", i);
        }
    }

    #[test]
    fn digitize_follows_half_open_bins_with_open_outer_edges() {
        let edges = Array1::from_shape_fn(10, |i| 2.0_f64.powi(i as i32));
        // interior: edges[i-1] < v <= edges[i]
        assert_eq!(digitize(1.5, &edges), 1);
        assert_eq!(digitize(2.0, &edges), 1);
        assert_eq!(digitize(2.5, &edges), 2);
        // boundary and out-of-range values clamp into the outer bins
        assert_eq!(digitize(1.0, &edges), 1);
        assert_eq!(digitize(0.5, &edges), 1);
        assert_eq!(digitize(512.0, &edges), 9);
        assert_eq!(digitize(1000.0, &edges), 9);
    }

    #[test]
    fn fit_recovers_exact_log_linear_relation() {
        // y = 2.0 - 0.5 * ln(x)
        let upstream = Array1::from_shape_fn(20, |i| (0.3 * i as f64).exp());
        let diff = upstream.mapv(|u| 2.0 - 0.5 * u.ln());
        let (fit, xs, line) = fit_log_linear(&upstream, &diff);

        assert!((fit.slope + 0.5).abs() < 1e-9);
        assert!((fit.intercept - 2.0).abs() < 1e-9);
        assert_eq!(xs.len(), line.len());
        // sorted ascending, line evaluated on the sorted values
        for w in xs.to_vec().windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert!((line[0] - fit.evaluate(xs[0])).abs() < 1e-12);
    }

    #[test]
    fn equation_text_forces_minus_sign() {
        let decreasing = LinearFit {
            slope: -0.31,
            intercept: 1.25,
        };
        assert_eq!(decreasing.equation_text(), "y = 1.25 - 0.31x");

        // an increasing fit still renders as subtraction
        let increasing = LinearFit {
            slope: 0.31,
            intercept: -1.25,
        };
        assert_eq!(increasing.equation_text(), "y = -1.25 - 0.31x");
    }

    fn obs(creek: &str, station: Station, biorep: u32, code: &str, dna: f64) -> Observation {
        Observation {
            creek: creek.to_string(),
            station,
            biorep,
            time_code: code.to_string(),
            date: parse_time_code(code).unwrap(),
            dna,
        }
    }

    #[test]
    fn collect_orders_groups_and_skips_excluded_creek() {
        let table = SampleTable::new(vec![
            obs("Siebert", Station::Up, 2, "321", 4.0),
            obs("Siebert", Station::Dn, 2, "321", 6.0),
            obs("Chuckanut", Station::Up, 1, "321", 10.0),
            obs("Chuckanut", Station::Dn, 1, "321", 15.0),
            obs("2Brn", Station::Up, 1, "321", 1.0),
        ]);

        let paired = collect_paired_diffs(&table, "2Brn");

        // outer loop sorted creeks (2Brn skipped), inner loop sorted bioreps
        let keys: Vec<(String, u32)> = paired
            .groups
            .iter()
            .map(|g| (g.creek.clone(), g.biorep))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Chuckanut".to_string(), 1),
                ("Chuckanut".to_string(), 2),
                ("Siebert".to_string(), 1),
                ("Siebert".to_string(), 2),
            ]
        );

        // master sequences follow the same order
        assert_eq!(paired.upstream.to_vec(), vec![10.0, 4.0]);
        assert_eq!(paired.diff.to_vec(), vec![0.5, 0.5]);

        // biorep index is the position in the sorted biorep list
        assert_eq!(paired.groups[0].biorep_index, 0);
        assert_eq!(paired.groups[1].biorep_index, 1);
    }
}
