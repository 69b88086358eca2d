//! Station series extraction and upstream/downstream alignment
//!
//! Both figures read per-station series; only the differential figure
//! aligns them. Alignment keeps the samples whose date appears at both
//! stations and drops the rest, it never imputes a missing partner.

use crate::table::{SampleTable, Station};
use chrono::NaiveDate;
use ndarray::Array1;
use std::collections::HashSet;

/// Date-sorted concentrations for one (creek, biorep, station).
#[derive(Debug, Clone)]
pub struct StationSeries {
    pub date: Vec<NaiveDate>,
    pub dna: Array1<f64>,
}

impl StationSeries {
    pub fn len(&self) -> usize {
        self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }
}

/// Select the rows for one (creek, biorep, station) and sort them by date.
///
/// The sort is stable, so rows sharing a date keep their file order; the
/// aligner relies on that for positional pairing.
pub fn station_series(
    table: &SampleTable,
    creek: &str,
    biorep: u32,
    station: Station,
) -> StationSeries {
    let mut rows: Vec<(NaiveDate, f64)> = table
        .observations()
        .iter()
        .filter(|o| o.creek == creek && o.biorep == biorep && o.station == station)
        .map(|o| (o.date, o.dna))
        .collect();
    rows.sort_by_key(|(date, _)| *date);

    StationSeries {
        date: rows.iter().map(|(date, _)| *date).collect(),
        dna: Array1::from_iter(rows.iter().map(|(_, dna)| *dna)),
    }
}

/// An upstream/downstream pair restricted to dates sampled at both
/// stations, positionally paired in post-filter row order.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    /// Dates kept on the upstream side, in order.
    pub dates: Vec<NaiveDate>,
    pub upstream: Array1<f64>,
    pub downstream: Array1<f64>,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Keep only the samples whose date appears in the other station's series.
///
/// Membership is tested against the date sets, not by index, so a
/// duplicated date within one series keeps every row carrying it.
pub fn align_pair(up: &StationSeries, dn: &StationSeries) -> AlignedPair {
    let up_dates: HashSet<NaiveDate> = up.date.iter().copied().collect();
    let dn_dates: HashSet<NaiveDate> = dn.date.iter().copied().collect();

    let mut dates = Vec::new();
    let mut upstream = Vec::new();
    for (date, dna) in up.date.iter().zip(up.dna.iter()) {
        if dn_dates.contains(date) {
            dates.push(*date);
            upstream.push(*dna);
        }
    }

    let mut downstream = Vec::new();
    for (date, dna) in dn.date.iter().zip(dn.dna.iter()) {
        if up_dates.contains(date) {
            downstream.push(*dna);
        }
    }

    AlignedPair {
        dates,
        upstream: Array1::from(upstream),
        downstream: Array1::from(downstream),
    }
}
