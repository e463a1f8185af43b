pub mod cli;
pub mod extract;
pub mod payload;
pub mod utils;

pub use extract::{FormatKind, FormatSpec, IdentityReader};
pub use payload::{Batches, IdentityRef, WorkOrder, WorkOrderWriter, MAX_IDENTITIES_PER_FILE};
pub use utils::{HeaderMode, PayloadError, Result, RunConfig};

use std::path::Path;

use chrono::Local;

/// Processes every input file in order. The first unrecoverable error
/// (unreadable input, column resolution, row shape, write failure) aborts
/// the whole run; there is no skip-and-continue.
pub fn run(config: &RunConfig) -> Result<()> {
    // One timestamp for the whole run, shared by every file and chunk.
    let started_at = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    for input in &config.inputs {
        tracing::info!("processing file: {}", input.display());
        process_file(config, input, &started_at, MAX_IDENTITIES_PER_FILE)?;
    }
    Ok(())
}

/// Runs the extract → batch → write pipeline for one input file. An empty
/// input produces no output files.
pub fn process_file(
    config: &RunConfig,
    input: &Path,
    started_at: &str,
    chunk_size: usize,
) -> Result<()> {
    let spec = FormatSpec::detect(input, config);
    let identities = IdentityReader::open(input, &spec, config.column.as_deref())?;
    let mut writer = WorkOrderWriter::new(config, input, started_at);
    for chunk in Batches::new(identities, chunk_size) {
        writer.write_chunk(&chunk?)?;
    }
    Ok(())
}
