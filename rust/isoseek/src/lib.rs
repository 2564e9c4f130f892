pub mod candidates;
pub mod descriptors;
pub mod errors;
pub mod filters;
pub mod models;
pub mod modifications;
pub mod serde;

pub use candidates::find_candidates;
pub use descriptors::{
    AnnotatedCandidate,
    annotate_descriptions,
};
pub use errors::{
    IsoseekError,
    Result,
};
pub use filters::{
    PeptideOverlap,
    compare_peptide_sets,
    slice_rt_range,
};
pub use models::{
    CandidateRecord,
    CandidateTolerance,
    PeptideRecord,
    ProteinDescription,
};
pub use modifications::extract_modified_peptides;
