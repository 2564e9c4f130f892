pub mod records;
pub mod tolerance;

pub use records::{
    CandidateRecord,
    PeptideRecord,
    ProteinDescription,
};
pub use tolerance::CandidateTolerance;
