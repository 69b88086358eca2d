use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use ednaplot_sample::{parse_time_code, Observation, SampleTable, Station};

/// One raw row of the qPCR export.
///
/// The DNA column reproduces the header of the lab export verbatim,
/// including the misspelling; correcting it here would make every load
/// fail against the real file.
#[derive(Debug, Deserialize)]
struct QpcrRecord {
    time: String,
    creek: String,
    station: Station,
    biorep: u32,
    #[serde(rename = "DNA_concentation")]
    dna_concentation: f64,
}

/// Load the measurement table from a qPCR export CSV.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// * Result containing a SampleTable or an error
///
/// # CSV Format
/// Header row `time,creek,station,biorep,DNA_concentation`, then one row
/// per measurement. `time` is an MMYY code (`321` = March 2021, `1220` =
/// December 2020); `station` is exactly `Up` or `Dn`. Any missing file,
/// malformed row or unparseable time code aborts the load.
pub fn load_sample_table(path: &Path) -> Result<SampleTable, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut observations = Vec::new();
    for result in reader.deserialize() {
        let record: QpcrRecord = result?;
        let date = parse_time_code(&record.time)?;
        observations.push(Observation {
            creek: record.creek,
            station: record.station,
            biorep: record.biorep,
            time_code: record.time,
            date,
            dna: record.dna_concentation,
        });
    }

    if observations.is_empty() {
        return Err(format!("no measurements found in {}", path.display()).into());
    }

    Ok(SampleTable::new(observations))
}
