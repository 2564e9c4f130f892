use serde::{
    Deserialize,
    Serialize,
};

/// Threshold pair for calling a peptide an isomer candidate.
///
/// Both bounds are exclusive: a peptide qualifies only when its observed
/// spread is strictly greater than the threshold, so a spread exactly at
/// the bound is rejected.
///
/// Example:
/// ```
/// use isoseek::CandidateTolerance;
///
/// let tolerance = CandidateTolerance::default();
/// assert_eq!(tolerance.rt_diff, 0.5);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CandidateTolerance {
    /// Minimum spread between the first and last observed RT, in minutes.
    pub rt_diff: f64,
    /// Minimum fractional spread of the 1/k0 midpoint within one charge
    /// state, `(max - min) / mean`.
    pub mobility_frac: f64,
}

impl Default for CandidateTolerance {
    fn default() -> Self {
        CandidateTolerance {
            rt_diff: 0.5,
            mobility_frac: 0.05,
        }
    }
}
