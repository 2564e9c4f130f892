use crate::models::{
    CandidateRecord,
    PeptideRecord,
    ProteinDescription,
};
use csv::{
    ReaderBuilder,
    WriterBuilder,
};
use serde::Serialize;
use std::path::Path;
use tracing::{
    debug,
    info,
    warn,
};

#[derive(Debug)]
pub enum PeaksReadingError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    MissingColumn(String),
}

impl From<csv::Error> for PeaksReadingError {
    fn from(err: csv::Error) -> Self {
        PeaksReadingError::CsvError(err)
    }
}

impl From<std::io::Error> for PeaksReadingError {
    fn from(err: std::io::Error) -> Self {
        PeaksReadingError::IoError(err)
    }
}

/// Columns the candidate detector interprets; everything else is carried
/// through opaquely.
const REQUIRED_COLUMNS: [&str; 4] = ["Peptide", "z", "RT", "1/k0 Range"];

/// Check whether a file looks like a PEAKS-style peptide export without
/// reading past its header row.
pub fn sniff_peaks_export<T: AsRef<Path>>(file: T) -> bool {
    let file_handle = match std::fs::File::open(file.as_ref()) {
        Ok(f) => f,
        Err(err) => {
            debug!(
                "Failed to open file {} for sniffing: {:?}",
                file.as_ref().display(),
                err
            );
            return false;
        }
    };

    let mut rdr = ReaderBuilder::new().from_reader(file_handle);
    let headers = match rdr.headers() {
        Ok(h) => h,
        Err(_) => return false,
    };

    let columns: Vec<&str> = headers.iter().collect();
    REQUIRED_COLUMNS.iter().all(|col| columns.contains(col))
}

/// Read a comma-delimited peptide export into memory.
pub fn read_peptide_records<T: AsRef<Path>>(
    file: T,
) -> Result<Vec<PeptideRecord>, PeaksReadingError> {
    let file_handle = std::fs::File::open(file.as_ref())?;
    let mut rdr = ReaderBuilder::new().from_reader(file_handle);

    info!("Reading peptide records from {}", file.as_ref().display());

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let row: PeptideRecord = result?;
        records.push(row);
    }

    info!("Read {} peptide records", records.len());
    Ok(records)
}

/// Read a peptide export, degrading to an empty table on any failure so
/// callers keep running against whatever identifications are available.
pub fn load_peptide_records<T: AsRef<Path>>(file: T) -> Vec<PeptideRecord> {
    match read_peptide_records(file.as_ref()) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                "Failed to load peptide records from {}: {:?}",
                file.as_ref().display(),
                err
            );
            Vec::new()
        }
    }
}

/// Read the `Accession`/`Description` protein table.
pub fn read_protein_descriptions<T: AsRef<Path>>(
    file: T,
) -> Result<Vec<ProteinDescription>, PeaksReadingError> {
    let file_handle = std::fs::File::open(file.as_ref())?;
    let mut rdr = ReaderBuilder::new().from_reader(file_handle);

    let mut proteins = Vec::new();
    for result in rdr.deserialize() {
        let row: ProteinDescription = result?;
        proteins.push(row);
    }

    info!("Read {} protein descriptions", proteins.len());
    Ok(proteins)
}

fn write_rows<S: Serialize, P: AsRef<Path>>(
    rows: &[S],
    out_path: P,
) -> Result<(), PeaksReadingError> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(out_path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write candidate rows with the fixed output column set.
pub fn write_candidates_csv<P: AsRef<Path>>(
    candidates: &[CandidateRecord],
    out_path: P,
) -> Result<(), PeaksReadingError> {
    write_rows(candidates, out_path.as_ref())?;
    info!(
        "Wrote {} candidate rows to {}",
        candidates.len(),
        out_path.as_ref().display()
    );
    Ok(())
}

/// Write description-annotated candidate rows.
pub fn write_annotated_csv<P: AsRef<Path>>(
    candidates: &[crate::descriptors::AnnotatedCandidate],
    out_path: P,
) -> Result<(), PeaksReadingError> {
    write_rows(candidates, out_path.as_ref())?;
    info!(
        "Wrote {} annotated candidate rows to {}",
        candidates.len(),
        out_path.as_ref().display()
    );
    Ok(())
}
