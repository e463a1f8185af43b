use std::path::Path;

use crate::utils::{HeaderMode, RunConfig};

/// Input format: comma- or tab-delimited, or one identity per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Csv,
    Tsv,
    Lines,
}

impl FormatKind {
    /// Field delimiter, or `None` in line mode.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            FormatKind::Csv => Some(b','),
            FormatKind::Tsv => Some(b'\t'),
            FormatKind::Lines => None,
        }
    }

    fn from_extension(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("txt") => FormatKind::Lines,
            Some("tsv") => FormatKind::Tsv,
            _ => FormatKind::Csv,
        }
    }
}

/// Resolved format for one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub kind: FormatKind,
    pub has_header: bool,
}

impl FormatSpec {
    /// Resolves the format for `path`: an explicit format flag wins,
    /// otherwise the file extension decides. The header policy follows the
    /// explicit flag when given, else the format default (delimited inputs
    /// have a header, line-mode inputs do not).
    pub fn detect(path: &Path, config: &RunConfig) -> Self {
        let kind = config
            .format
            .unwrap_or_else(|| FormatKind::from_extension(path));
        let has_header = match config.header {
            HeaderMode::Header => true,
            HeaderMode::NoHeader => false,
            HeaderMode::Auto => kind != FormatKind::Lines,
        };
        Self { kind, has_header }
    }
}
