//! Command line helpers for polyrecover.
use std::path::Path;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use slog::{debug, info, Logger};

use polyrecover::{common::logger::get_logger, Document, Recoverer};

/// Processes problem instances one after another.
///
/// A failed instance does not affect the ones after it.
pub struct Runner {
    logger: Logger,
    recoverer: Recoverer,
}

impl Runner {
    /// Creates a new runner.
    pub fn new(recoverer: Recoverer) -> Self {
        Self {
            logger: get_logger("tools/runner"),
            recoverer,
        }
    }

    /// Recovers the constant term of the document at the given path.
    pub fn process(&self, path: &Path) -> Result<BigInt> {
        let result = Document::from_path(path)
            .and_then(|doc| self.recoverer.recover(&doc))
            .with_context(|| path.display().to_string());

        match &result {
            Ok(r) => {
                info!(self.logger, "Document processed";
                    "path" => %path.display(),
                    "outliers" => r.outliers.len(),
                );
            }
            Err(err) => {
                debug!(self.logger, "Failed to process document";
                    "path" => %path.display(),
                    "err" => format!("{:#}", err),
                );
            }
        }

        result.map(|r| r.constant)
    }

    /// Processes all documents in order.
    pub fn process_all<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<Result<BigInt>> {
        paths.iter().map(|p| self.process(p.as_ref())).collect()
    }
}
