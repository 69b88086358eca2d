//! Filesystem layout constants shared by the ednaplot binaries.

/// Subdirectory holding measurement data files.
pub const DATA_DIR: &str = "data";

/// File name of the qPCR export. The header inside spells the DNA column
/// `DNA_concentation`; loaders must match that string verbatim.
pub const QPCR_FILENAME: &str = "cutthroat_trout_qPCR[UW2].csv";
