use crate::errors::Result;
use crate::serde::peaks_io::PeaksReadingError;
use csv::ReaderBuilder;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Extract the sorted set of distinct peptides carrying a bracketed
/// residue modification, e.g. `D(+14.02)`.
///
/// `modifications` are literal mass-shift tokens as they appear in the
/// export (`+14.02`, `-18`, ...). With `residue` set, only modifications
/// on that residue letter count; otherwise any residue matches. A token
/// without decimals also matches its decimal-extended forms, so `+14`
/// matches both `D(+14)` and `D(+14.02)`.
///
/// A file that cannot be loaded logs a warning and yields an empty set;
/// asking for a column the file does not have is an error.
pub fn extract_modified_peptides<T: AsRef<Path>>(
    file: T,
    modifications: &[&str],
    peptide_column: &str,
    residue: Option<char>,
) -> Result<Vec<String>> {
    let pattern = build_modification_pattern(modifications, residue)?;

    let peptides = match read_column(file.as_ref(), peptide_column) {
        Ok(values) => values,
        Err(err @ PeaksReadingError::MissingColumn(_)) => return Err(err.into()),
        Err(err) => {
            warn!("Failed to load {}: {:?}", file.as_ref().display(), err);
            return Ok(Vec::new());
        }
    };

    let unique: BTreeSet<String> = peptides
        .into_iter()
        .filter(|peptide| pattern.is_match(peptide))
        .collect();
    Ok(unique.into_iter().collect())
}

fn build_modification_pattern(
    modifications: &[&str],
    residue: Option<char>,
) -> std::result::Result<Regex, regex::Error> {
    let mods = modifications
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    let residue_pattern = match residue {
        Some(r) => regex::escape(&r.to_string()),
        None => "[A-Z]".to_string(),
    };
    Regex::new(&format!(r"{residue_pattern}\(({mods})(?:\.\d*)?\)"))
}

fn read_column(
    file: &Path,
    column: &str,
) -> std::result::Result<Vec<String>, PeaksReadingError> {
    let file_handle = std::fs::File::open(file)?;
    let mut rdr = ReaderBuilder::new().from_reader(file_handle);

    let headers = rdr.headers()?;
    let Some(index) = headers.iter().position(|h| h == column) else {
        return Err(PeaksReadingError::MissingColumn(column.to_string()));
    };

    let mut values = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if let Some(value) = record.get(index) {
            if !value.is_empty() {
                values.push(value.to_string());
            }
        }
    }
    Ok(values)
}
