//! CLI commands: render a dispatch artifact and write it somewhere.

use std::path::{Path, PathBuf};

use thiserror::Error;

use numgen_codegen::{generate_conversion_dispatch, generate_sample_extraction, DispatchTarget};
use numgen_ir::{CategoryTable, TableError};

/// Separator the combined artifact uses between the two dispatch blocks,
/// matching the historical checked-in layout.
const BLOCK_SEPARATOR: &str = "---------------";

/// Which generated artifact a command produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// The four-level byte-buffer conversion dispatch.
    Conversion,
    /// The two-level boxed sample-extraction dispatch.
    Extraction,
    /// Both, joined under their paste-location labels.
    All,
}

/// Options shared by all generate commands.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// JSON taxonomy file; the built-in reference table when absent.
    pub table: Option<PathBuf>,
    /// Host-class symbol set; `cp` when absent.
    pub target: Option<DispatchTarget>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
}

/// A failed generate command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("failed to read table {path}: {source}")]
    ReadTable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse table {path}: {source}")]
    ParseTable {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown dispatch target '{0}' (expected 'cp' or 'bw')")]
    UnknownTarget(String),
}

/// Parse a `--target=` value.
pub fn parse_target(name: &str) -> Result<DispatchTarget, CommandError> {
    match name {
        "cp" => Ok(DispatchTarget::core_plot()),
        "bw" => Ok(DispatchTarget::bw_numeric_data()),
        other => Err(CommandError::UnknownTarget(other.to_string())),
    }
}

/// Render an artifact for a table and target. Pure; no I/O.
pub fn render(
    artifact: Artifact,
    table: &CategoryTable,
    target: &DispatchTarget,
) -> Result<String, CommandError> {
    let text = match artifact {
        Artifact::Conversion => generate_conversion_dispatch(table, target)?,
        Artifact::Extraction => generate_sample_extraction(table, target)?,
        Artifact::All => {
            let conversion = generate_conversion_dispatch(table, target)?;
            let extraction = generate_sample_extraction(table, target)?;
            format!(
                "{}\n\n{conversion}{BLOCK_SEPARATOR}\n\n{}\n\n{extraction}",
                target.conversion_label(),
                target.extraction_label(),
            )
        }
    };
    Ok(text)
}

/// Run one generate command end to end.
pub fn run_generate(artifact: Artifact, options: &GenerateOptions) -> Result<(), CommandError> {
    let table = match &options.table {
        Some(path) => load_table(path)?,
        None => CategoryTable::core_plot_reference(),
    };
    let target = options.target.clone().unwrap_or_default();

    let text = render(artifact, &table, &target)?;
    tracing::debug!(?artifact, bytes = text.len(), "rendered dispatch artifact");

    match &options.output {
        Some(path) => std::fs::write(path, &text).map_err(|source| CommandError::WriteOutput {
            path: path.clone(),
            source,
        }),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn load_table(path: &Path) -> Result<CategoryTable, CommandError> {
    tracing::debug!(path = %path.display(), "loading taxonomy table");
    let bytes = std::fs::read(path).map_err(|source| CommandError::ReadTable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| CommandError::ParseTable {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_target_accepts_both_hosts() {
        assert_eq!(
            match parse_target("cp") {
                Ok(t) => t,
                Err(e) => panic!("{e}"),
            },
            DispatchTarget::core_plot()
        );
        assert_eq!(
            match parse_target("bw") {
                Ok(t) => t,
                Err(e) => panic!("{e}"),
            },
            DispatchTarget::bw_numeric_data()
        );
        assert!(matches!(
            parse_target("gtm"),
            Err(CommandError::UnknownTarget(_))
        ));
    }
}
