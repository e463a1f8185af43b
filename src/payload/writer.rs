use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::payload::work_order::{IdentityRef, WorkOrder, DELETE_IDENTITY_ACTION};
use crate::utils::{Result, RunConfig};

/// Upper bound on identities per output file. Not exposed on the command
/// line; library callers pass it to `Batches` explicitly.
pub const MAX_IDENTITIES_PER_FILE: usize = 100_000;

/// Writes numbered work-order files for one input file. Output paths are
/// `<outputDir>/<input-stem>-<NNN>.json`, NNN starting at 001.
pub struct WorkOrderWriter<'a> {
    config: &'a RunConfig,
    input: &'a Path,
    stem: String,
    started_at: &'a str,
    files_written: usize,
}

impl<'a> WorkOrderWriter<'a> {
    pub fn new(config: &'a RunConfig, input: &'a Path, started_at: &'a str) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        Self {
            config,
            input,
            stem,
            started_at,
            files_written: 0,
        }
    }

    pub fn write_chunk(&mut self, chunk: &[String]) -> Result<PathBuf> {
        self.files_written += 1;
        let path = self
            .config
            .output_dir
            .join(format!("{}-{:03}.json", self.stem, self.files_written));

        let identities = chunk
            .iter()
            .map(|identity| IdentityRef {
                namespace: self.config.namespace.clone(),
                identity: identity.clone(),
            })
            .collect();

        let order = WorkOrder {
            action: DELETE_IDENTITY_ACTION.to_string(),
            dataset_id: self.config.dataset_id.clone(),
            display_name: self
                .config
                .display_name
                .clone()
                .unwrap_or_else(|| path.display().to_string()),
            description: self.config.description.clone().unwrap_or_else(|| {
                format!(
                    "JSON generated from {} at {} by di-payload",
                    self.input.display(),
                    self.started_at
                )
            }),
            identities,
        };

        let mut file = File::create(&path)?;
        serde_json::to_writer_pretty(&mut file, &order)?;
        file.write_all(b"\n")?;
        tracing::info!("wrote {}", path.display());
        Ok(path)
    }

    pub fn files_written(&self) -> usize {
        self.files_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::HeaderMode;

    fn config(output_dir: &Path) -> RunConfig {
        RunConfig {
            inputs: vec![],
            namespace: "email".to_string(),
            dataset_id: "DS1".to_string(),
            display_name: None,
            description: None,
            output_dir: output_dir.to_path_buf(),
            column: None,
            format: None,
            header: HeaderMode::Auto,
            verbose: false,
        }
    }

    #[test]
    fn counts_and_numbers_written_chunks() {
        let out = tempfile::tempdir().unwrap();
        let config = config(out.path());
        let input = Path::new("people.csv");
        let mut writer = WorkOrderWriter::new(&config, input, "2026-08-29T00:00:00");
        assert_eq!(writer.files_written(), 0);

        let first = writer.write_chunk(&["a@x.com".to_string()]).unwrap();
        let second = writer.write_chunk(&["b@x.com".to_string()]).unwrap();
        assert_eq!(writer.files_written(), 2);
        assert_eq!(first, out.path().join("people-001.json"));
        assert_eq!(second, out.path().join("people-002.json"));
        assert!(first.exists());
        assert!(second.exists());
    }
}
