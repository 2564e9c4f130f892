use crate::models::{
    CandidateRecord,
    ProteinDescription,
};
use serde::Serialize;
use std::collections::HashMap;

/// A candidate row with its protein description attached.
///
/// The candidate columns are flattened manually bc serde(flatten)
/// is not supported by csv ...
/// <https://github.com/BurntSushi/rust-csv/pull/223>
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedCandidate {
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
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// Left-join protein descriptions onto candidate rows by accession.
///
/// Every candidate row is retained; accessions absent from the protein
/// table annotate as `None`.
pub fn annotate_descriptions(
    candidates: &[CandidateRecord],
    proteins: &[ProteinDescription],
) -> Vec<AnnotatedCandidate> {
    let descriptions: HashMap<&str, &str> = proteins
        .iter()
        .map(|p| (p.accession.as_str(), p.description.as_str()))
        .collect();

    candidates
        .iter()
        .map(|candidate| AnnotatedCandidate {
            peptide: candidate.peptide.clone(),
            z: candidate.z,
            first_rt: candidate.first_rt,
            last_rt: candidate.last_rt,
            max_rt_diff: candidate.max_rt_diff,
            precursor_id: candidate.precursor_id.clone(),
            ook0: candidate.ook0,
            frac_variation: candidate.frac_variation,
            mz: candidate.mz.clone(),
            mass: candidate.mass.clone(),
            scan: candidate.scan.clone(),
            accession: candidate.accession.clone(),
            description: descriptions
                .get(candidate.accession.as_str())
                .map(|d| d.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(peptide: &str, accession: &str) -> CandidateRecord {
        CandidateRecord {
            peptide: peptide.to_string(),
            z: 2,
            first_rt: 10.0,
            last_rt: 15.0,
            max_rt_diff: 5.0,
            precursor_id: "1".to_string(),
            ook0: Some(1.0),
            frac_variation: 0.1,
            mz: "203.61".to_string(),
            mass: "405.21".to_string(),
            scan: "1201".to_string(),
            accession: accession.to_string(),
        }
    }

    #[test]
    fn test_annotate_descriptions_left_join() {
        let candidates = vec![candidate("AAGK", "P12345"), candidate("BBCK", "P99999")];
        let proteins = vec![ProteinDescription {
            accession: "P12345".to_string(),
            description: "Alpha-enolase".to_string(),
        }];

        let annotated = annotate_descriptions(&candidates, &proteins);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].description.as_deref(), Some("Alpha-enolase"));
        // Unmatched accessions keep their row, without a description.
        assert_eq!(annotated[1].description, None);
        assert_eq!(annotated[1].peptide, "BBCK");
    }
}
