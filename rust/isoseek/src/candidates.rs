use crate::models::{
    CandidateRecord,
    CandidateTolerance,
    PeptideRecord,
};
use std::collections::{
    HashMap,
    HashSet,
};
use tracing::debug;

/// Min/max accumulator over retention times that skips missing values.
///
/// A group where every observation was missing reports no range at all,
/// which downstream threshold checks treat as a rejection.
#[derive(Debug, Clone, Copy, Default)]
struct RtRangeAccumulator {
    min: Option<f64>,
    max: Option<f64>,
}

impl RtRangeAccumulator {
    fn add(&mut self, rt: Option<f64>) {
        let Some(rt) = rt else { return };
        self.min = Some(match self.min {
            Some(min) => min.min(rt),
            None => rt,
        });
        self.max = Some(match self.max {
            Some(max) => max.max(rt),
            None => rt,
        });
    }

    /// `(first_RT, last_RT, max_RT_diff)` over the valid observations.
    fn range(&self) -> Option<(f64, f64, f64)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max, max - min)),
            _ => None,
        }
    }
}

/// Min/max/mean accumulator over 1/k0 midpoints, skipping missing values.
#[derive(Debug, Clone, Copy, Default)]
struct MobilityAccumulator {
    min: Option<f64>,
    max: Option<f64>,
    sum: f64,
    count: usize,
}

impl MobilityAccumulator {
    fn add(&mut self, ook0: Option<f64>) {
        let Some(ook0) = ook0 else { return };
        self.min = Some(match self.min {
            Some(min) => min.min(ook0),
            None => ook0,
        });
        self.max = Some(match self.max {
            Some(max) => max.max(ook0),
            None => ook0,
        });
        self.sum += ook0;
        self.count += 1;
    }

    /// `(max - min) / mean` over the valid observations.
    ///
    /// A zero mean divides to a non-finite value; callers must reject
    /// non-finite variations at the threshold comparison.
    fn frac_variation(&self) -> Option<f64> {
        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ => return None,
        };
        let mean = self.sum / self.count as f64;
        Some((max - min) / mean)
    }
}

/// Identify peptides whose repeated detections spread out in both
/// retention time and ion mobility, suggesting co-eluting structural
/// isomers of the same sequence.
///
/// The RT spread is computed per peptide across every charge state, while
/// the 1/k0 fractional variation is computed per `(peptide, z)` pair; a
/// row qualifies only when both spreads strictly exceed their thresholds.
/// The output carries one row per qualifying peptide, taken from its first
/// qualifying input row, in input order.
///
/// Peptides seen only once can never qualify for a positive `rt_diff`
/// threshold: isomer detection needs repeated observations.
pub fn find_candidates(
    records: &[PeptideRecord],
    tolerance: &CandidateTolerance,
) -> Vec<CandidateRecord> {
    let mut rt_ranges: HashMap<&str, RtRangeAccumulator> = HashMap::new();
    let mut mobilities: HashMap<(&str, i32), MobilityAccumulator> = HashMap::new();

    for record in records {
        rt_ranges
            .entry(record.peptide.as_str())
            .or_default()
            .add(record.rt);
        mobilities
            .entry((record.peptide.as_str(), record.z))
            .or_default()
            .add(record.mean_ook0());
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();
    for record in records {
        let Some((first_rt, last_rt, max_rt_diff)) = rt_ranges
            .get(record.peptide.as_str())
            .and_then(RtRangeAccumulator::range)
        else {
            continue;
        };
        let Some(frac_variation) = mobilities
            .get(&(record.peptide.as_str(), record.z))
            .and_then(MobilityAccumulator::frac_variation)
        else {
            continue;
        };

        if !frac_variation.is_finite() || frac_variation <= tolerance.mobility_frac {
            continue;
        }
        if max_rt_diff <= tolerance.rt_diff {
            continue;
        }
        if !seen.insert(record.peptide.as_str()) {
            continue;
        }

        candidates.push(CandidateRecord {
            peptide: record.peptide.clone(),
            z: record.z,
            first_rt,
            last_rt,
            max_rt_diff,
            precursor_id: record.precursor_id.clone(),
            ook0: record.mean_ook0(),
            frac_variation,
            mz: record.mz.clone(),
            mass: record.mass.clone(),
            scan: record.scan.clone(),
            accession: record.accession.clone(),
        });
    }

    debug!(
        "{} candidate peptides out of {} input rows",
        candidates.len(),
        records.len()
    );
    candidates
}
