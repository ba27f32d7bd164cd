//! Source scanner: file paths in, top-level Go function signatures out.

use std::path::{Path, PathBuf};

use crate::models::FunctionSignature;
use crate::parser::{GoParser, Result};

pub struct Scanner {
    parser: GoParser,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
        })
    }

    /// Scan files in the given order. A file that cannot be read or parsed
    /// contributes nothing; it never aborts the run.
    pub fn scan(&mut self, paths: &[PathBuf]) -> Vec<FunctionSignature> {
        let mut signatures = Vec::new();

        for path in paths {
            match self.scan_file(path) {
                Ok(found) => {
                    tracing::debug!("{}: {} function(s)", path.display(), found.len());
                    signatures.extend(found);
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        signatures
    }

    pub fn scan_file(&mut self, path: &Path) -> Result<Vec<FunctionSignature>> {
        let code = std::fs::read_to_string(path)?;
        self.parser.parse_source(&code)
    }
}
