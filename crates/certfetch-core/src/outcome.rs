//! Per-source result of a fetch run and its console rendering.

use std::fmt;
use std::path::PathBuf;

/// Reason attached to a skipped source whose content type is not PDF.
pub const NOT_A_PDF: &str = "not a PDF";

/// Terminal state of one source entry. Each source yields exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// PDF payload written to `path`.
    Saved { url: String, path: PathBuf },
    /// Response was fine but not a PDF; nothing written.
    Skipped { url: String, reason: String },
    /// Transport, HTTP status or write failure; nothing kept on disk.
    Failed { url: String, error: String },
}

impl Outcome {
    pub fn url(&self) -> &str {
        match self {
            Outcome::Saved { url, .. } | Outcome::Skipped { url, .. } | Outcome::Failed { url, .. } => {
                url
            }
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved { path, .. } => {
                write!(f, "[OK] Zertifikat gespeichert: {}", path.display())
            }
            Outcome::Skipped { url, .. } => write!(f, "[INFO] URL enthält keine PDF: {}", url),
            Outcome::Failed { url, error } => write!(f, "[FEHLER] {}: {}", url, error),
        }
    }
}

/// Counts per outcome kind for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        outcomes.iter().fold(Summary::default(), |mut s, o| {
            match o {
                Outcome::Saved { .. } => s.saved += 1,
                Outcome::Skipped { .. } => s.skipped += 1,
                Outcome::Failed { .. } => s.failed += 1,
            }
            s
        })
    }

    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }
}
