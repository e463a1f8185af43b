use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::extract::{parse_column_index, FormatKind};
use crate::utils::{HeaderMode, Result, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "di-payload",
    version,
    about = "Convert TSV/CSV columns of identities to JSON files for creating delete-identity work orders.",
    after_help = "Note: *.csv, *.tsv, and *.txt inputs default to the correct format, but \
                  --csv, --tsv, or --txt overrides. Default is --header except for *.txt \
                  inputs, but --header or --no-header overrides."
)]
#[command(group(ArgGroup::new("format").args(["csv", "tsv", "txt"])))]
pub struct Cli {
    /// Input TSV/CSV files
    #[arg(value_name = "INPUT_FILE", required = true)]
    pub input_file: Vec<PathBuf>,

    /// Column index (1-based) or name. Defaults to the first column
    #[arg(long)]
    pub column: Option<String>,

    /// Namespace value for each identity (e.g. 'email' or 'ECID')
    #[arg(long)]
    pub namespace: String,

    /// ID of the dataset to be targeted, or 'ALL'
    #[arg(long)]
    pub dataset_id: String,

    /// Display name for the work order
    #[arg(long)]
    pub display_name: Option<String>,

    /// Description for the work order
    #[arg(long)]
    pub description: Option<String>,

    /// Force input files to be read as CSV
    #[arg(long)]
    pub csv: bool,

    /// Force input files to be read as TSV
    #[arg(long)]
    pub tsv: bool,

    /// Force input files to be read as TXT
    #[arg(long)]
    pub txt: bool,

    /// Indicate that the input files have headers
    #[arg(long, overrides_with = "no_header")]
    pub header: bool,

    /// Indicate that line 1 of input files is data
    #[arg(long, overrides_with = "header")]
    pub no_header: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Directory to write the output JSON files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Validates the parsed arguments and builds the immutable run
    /// configuration. Fails before any input file is touched.
    pub fn into_config(self) -> Result<RunConfig> {
        if let Some(column) = self.column.as_deref() {
            parse_column_index(column)?;
        }

        let format = if self.txt {
            Some(FormatKind::Lines)
        } else if self.tsv {
            Some(FormatKind::Tsv)
        } else if self.csv {
            Some(FormatKind::Csv)
        } else {
            None
        };

        let header = match (self.header, self.no_header) {
            (true, _) => HeaderMode::Header,
            (_, true) => HeaderMode::NoHeader,
            _ => HeaderMode::Auto,
        };

        Ok(RunConfig {
            inputs: self.input_file,
            namespace: self.namespace,
            dataset_id: self.dataset_id,
            display_name: self.display_name,
            description: self.description,
            output_dir: self.output_dir,
            column: self.column,
            format,
            header,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(
            std::iter::once("di-payload").chain(args.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn minimal_invocation_parses() {
        let cli = parse(&["--namespace", "email", "--dataset-id", "DS1", "ids.csv"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.namespace, "email");
        assert_eq!(config.dataset_id, "DS1");
        assert_eq!(config.inputs, vec![PathBuf::from("ids.csv")]);
        assert_eq!(config.format, None);
        assert_eq!(config.header, HeaderMode::Auto);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn missing_required_flags_is_a_usage_error() {
        let result = Cli::try_parse_from(["di-payload", "ids.csv"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["di-payload", "--namespace", "email", "ids.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_input_files_is_a_usage_error() {
        let result =
            Cli::try_parse_from(["di-payload", "--namespace", "email", "--dataset-id", "DS1"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_flags_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "di-payload",
            "--namespace",
            "email",
            "--dataset-id",
            "DS1",
            "--csv",
            "--tsv",
            "ids.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn header_flags_map_to_tri_state() {
        let cli = parse(&["--namespace", "n", "--dataset-id", "d", "--header", "a.txt"]);
        assert_eq!(cli.into_config().unwrap().header, HeaderMode::Header);
        let cli = parse(&["--namespace", "n", "--dataset-id", "d", "--no-header", "a.csv"]);
        assert_eq!(cli.into_config().unwrap().header, HeaderMode::NoHeader);
    }

    #[test]
    fn zero_column_is_rejected_at_config_time() {
        let cli = parse(&["--namespace", "n", "--dataset-id", "d", "--column", "0", "a.csv"]);
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn format_flag_carries_into_config() {
        let cli = parse(&["--namespace", "n", "--dataset-id", "d", "--tsv", "a.csv"]);
        assert_eq!(cli.into_config().unwrap().format, Some(FormatKind::Tsv));
    }
}
