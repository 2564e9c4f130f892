use isoseek::CandidateTolerance;
use serde::{
    Deserialize,
    Serialize,
};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub proteins: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub tolerance: CandidateTolerance,
    pub rt_window: Option<RtWindow>,
}

/// Half-open RT window `[min, max)` applied before detection.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RtWindow {
    pub min: f64,
    pub max: f64,
}

impl Default for RtWindow {
    fn default() -> Self {
        RtWindow {
            min: isoseek::filters::DEFAULT_RT_MIN,
            max: isoseek::filters::DEFAULT_RT_MAX,
        }
    }
}
