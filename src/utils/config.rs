use std::path::PathBuf;

use crate::extract::FormatKind;

/// Header policy for input files. `Auto` defers to the per-file format
/// default: delimited inputs have a header row, line-mode inputs do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    #[default]
    Auto,
    Header,
    NoHeader,
}

/// Immutable per-run configuration, built once from the command line and
/// shared read-only by every stage of the pipeline.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub namespace: String,
    pub dataset_id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub output_dir: PathBuf,
    pub column: Option<String>,
    pub format: Option<FormatKind>,
    pub header: HeaderMode,
    pub verbose: bool,
}
