//! End-to-end: load a synthetic qPCR export and run both pipelines on it.

use std::io::Write;

use ednaplot::plot::{diff_scatter_traces, plot_diff, plot_series};
use ednaplot::read::load_sample_table;
use ednaplot::stats::{collect_paired_diffs, fit_log_linear, log_binned_means};
use ednaplot::{station_series, Station};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// One creek, one biorep, two dates sampled at both stations.
const MATCHED_PAIRS: &str = "time,creek,station,biorep,DNA_concentation\n\
                             321,Siebert,Up,1,10\n\
                             321,Siebert,Dn,1,15\n\
                             421,Siebert,Up,1,20\n\
                             421,Siebert,Dn,1,10\n";

#[test]
fn differential_pipeline_produces_two_scatter_points() {
    let file = write_csv(MATCHED_PAIRS);
    let table = load_sample_table(file.path()).unwrap();

    let paired = collect_paired_diffs(&table, "2Brn");
    assert_eq!(paired.upstream.len(), 2);
    assert_eq!(paired.diff.len(), 2);
    assert_eq!(paired.upstream.to_vec(), vec![10.0, 20.0]);
    assert_eq!(paired.diff.to_vec(), vec![0.5, -0.5]);

    // one group, rendered as one scatter trace holding both points
    assert_eq!(paired.groups.len(), 1);
    assert_eq!(diff_scatter_traces(&paired).len(), 1);

    // downstream stages run on the same two points
    let bins = log_binned_means(&paired.upstream, &paired.diff);
    let (fit, fit_x, fit_y) = fit_log_linear(&paired.upstream, &paired.diff);
    let figure = plot_diff(&paired, &bins, &fit, &fit_x, &fit_y, &table.bioreps());
    assert!(!figure.to_json().is_empty());
}

#[test]
fn series_grid_has_one_populated_cell_and_keeps_empty_ones() {
    // a second creek and biorep pad the grid with cells that hold no data
    let csv = "time,creek,station,biorep,DNA_concentation\n\
               321,Siebert,Up,1,10\n\
               321,Siebert,Dn,1,15\n\
               421,Siebert,Up,1,20\n\
               421,Siebert,Dn,1,10\n\
               521,2Brn,Up,2,3\n";
    let file = write_csv(csv);
    let table = load_sample_table(file.path()).unwrap();

    let creeks = table.creeks();
    let bioreps = table.bioreps();
    assert_eq!(creeks, vec!["2Brn", "Siebert"]);
    assert_eq!(bioreps, vec![1, 2]);

    // cell population follows the per-station series, no creek excluded
    let mut populated = 0;
    for creek in &creeks {
        for &biorep in &bioreps {
            let up = station_series(&table, creek, biorep, Station::Up);
            let dn = station_series(&table, creek, biorep, Station::Dn);
            if !up.is_empty() || !dn.is_empty() {
                populated += 1;
            }
        }
    }
    assert_eq!(populated, 2); // (Siebert, 1) and the station-less (2Brn, 2)

    let figure = plot_series(&table);
    let json = figure.to_json();
    assert!(json.contains("Siebert"));
    assert!(json.contains("2Brn"));
}

#[test]
fn unmatched_dates_are_dropped_not_imputed() {
    let csv = "time,creek,station,biorep,DNA_concentation\n\
               321,Siebert,Up,1,10\n\
               321,Siebert,Dn,1,15\n\
               421,Siebert,Up,1,20\n";
    let file = write_csv(csv);
    let table = load_sample_table(file.path()).unwrap();

    let paired = collect_paired_diffs(&table, "2Brn");
    // the 4/21 upstream sample has no downstream partner and vanishes
    assert_eq!(paired.upstream.to_vec(), vec![10.0]);
    assert_eq!(paired.diff.to_vec(), vec![0.5]);
}
