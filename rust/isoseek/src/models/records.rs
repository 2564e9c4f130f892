use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// A single peptide-spectrum match row from a PEAKS-style database export.
///
/// Real exports quote numbers and occasionally carry placeholder text in
/// numeric columns, so the RT column is coerced leniently at this boundary
/// (unparsable -> `None`) and the columns the detector does not interpret
/// are kept as the literal text of the export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeptideRecord {
    #[serde(rename = "Peptide")]
    pub peptide: String,
    #[serde(rename = "z")]
    pub z: i32,
    #[serde(rename = "RT")]
    #[serde(deserialize_with = "lenient_f64")]
    #[serde(default)]
    pub rt: Option<f64>,
    #[serde(rename = "1/k0 Range")]
    #[serde(default)]
    pub ook0_range: String,
    #[serde(rename = "Precursor Id")]
    #[serde(default)]
    pub precursor_id: String,
    #[serde(rename = "m/z")]
    #[serde(default)]
    pub mz: String,
    #[serde(rename = "Mass")]
    #[serde(default)]
    pub mass: String,
    #[serde(rename = "Scan")]
    #[serde(default)]
    pub scan: String,
    #[serde(rename = "Accession")]
    #[serde(default)]
    pub accession: String,
}

impl PeptideRecord {
    /// Midpoint of the `1/k0 Range` column.
    ///
    /// The exporter writes the range as `low-high`. Tokens that fail to
    /// parse are skipped, so a half-valid range still yields its valid
    /// endpoint and a fully invalid one yields `None`.
    pub fn mean_ook0(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for token in self.ook0_range.split('-') {
            if let Ok(value) = token.trim().parse::<f64>() {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

/// Parse a numeric field that may arrive quoted, padded, or as junk text.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

/// One isomer candidate, written under the column names downstream
/// notebooks expect from the original export.
///
/// The non-aggregated columns (`z`, `Precursor Id`, `1/k0`, `m/z`, `Mass`,
/// `Scan`, `Accession`) come from the first input row that survived the
/// thresholds for this peptide, not from any aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    #[serde(rename = "Peptide")]
    pub peptide: String,
    #[serde(rename = "z")]
    pub z: i32,
    #[serde(rename = "first_RT")]
    pub first_rt: f64,
    #[serde(rename = "last_RT")]
    pub last_rt: f64,
    #[serde(rename = "max_RT_diff")]
    pub max_rt_diff: f64,
    #[serde(rename = "Precursor Id")]
    pub precursor_id: String,
    #[serde(rename = "1/k0")]
    pub ook0: Option<f64>,
    #[serde(rename = "frac_variation")]
    pub frac_variation: f64,
    #[serde(rename = "m/z")]
    pub mz: String,
    #[serde(rename = "Mass")]
    pub mass: String,
    #[serde(rename = "Scan")]
    pub scan: String,
    #[serde(rename = "Accession")]
    pub accession: String,
}

/// One row of the protein description table (`Accession`, `Description`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProteinDescription {
    #[serde(rename = "Accession")]
    pub accession: String,
    #[serde(rename = "Description")]
    pub description: String,
}
