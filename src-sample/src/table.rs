//! Measurement table and category enumeration
//!
//! One [`Observation`] per row of the qPCR export. The table keeps rows in
//! file order; the category accessors return the ordered label lists that
//! drive grouping, colors and legend order in both figures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sampling station on a creek, relative to water flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    Up,
    Dn,
}

impl Station {
    /// The station label as it appears in the `station` column.
    pub fn label(&self) -> &'static str {
        match self {
            Station::Up => "Up",
            Station::Dn => "Dn",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One measurement row.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub creek: String,
    pub station: Station,
    pub biorep: u32,
    /// Raw MMYY time code as read from the file.
    pub time_code: String,
    /// Calendar date parsed from the time code, day pinned to 1.
    pub date: NaiveDate,
    /// DNA concentration. Never validated or clamped; a recorded zero
    /// flows into the differential statistics as-is.
    pub dna: f64,
}

/// Immutable in-memory table of observations, in file row order.
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    observations: Vec<Observation>,
}

impl SampleTable {
    pub fn new(observations: Vec<Observation>) -> Self {
        SampleTable { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Distinct creek labels, ascending lexicographic. Drives the column
    /// order of the time-series grid and the outer grouping loop.
    pub fn creeks(&self) -> Vec<String> {
        let mut creeks: Vec<String> = Vec::new();
        for obs in &self.observations {
            if !creeks.iter().any(|c| c == &obs.creek) {
                creeks.push(obs.creek.clone());
            }
        }
        creeks.sort();
        creeks
    }

    /// Distinct biorep identifiers, ascending numeric. A biorep's position
    /// in this list selects its palette color.
    pub fn bioreps(&self) -> Vec<u32> {
        let mut bioreps: Vec<u32> = Vec::new();
        for obs in &self.observations {
            if !bioreps.contains(&obs.biorep) {
                bioreps.push(obs.biorep);
            }
        }
        bioreps.sort_unstable();
        bioreps
    }

    /// Distinct stations, natural ascending label order reversed, so that
    /// Up precedes Dn whenever both are present.
    pub fn stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = Vec::new();
        for obs in &self.observations {
            if !stations.contains(&obs.station) {
                stations.push(obs.station);
            }
        }
        stations.sort_by_key(|s| s.label());
        stations.reverse();
        stations
    }

    /// First and last sampling date for one creek, across every biorep and
    /// station. The grid renderer uses this to share a horizontal range
    /// down each creek column.
    pub fn date_range(&self, creek: &str) -> Option<(NaiveDate, NaiveDate)> {
        let mut range: Option<(NaiveDate, NaiveDate)> = None;
        for obs in self.observations.iter().filter(|o| o.creek == creek) {
            range = Some(match range {
                None => (obs.date, obs.date),
                Some((lo, hi)) => (lo.min(obs.date), hi.max(obs.date)),
            });
        }
        range
    }
}
