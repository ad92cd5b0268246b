pub mod ast;
pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the report writers consume for one analyzed file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub path: PathBuf,
    pub language: Language,
    pub timestamp: DateTime<Utc>,
    /// Whole-file metrics, computed against the module root.
    pub metrics: MetricsSet,
    /// The same metrics computed per function/class definition.
    pub definitions: Vec<DefinitionMetrics>,
    /// Verbatim output of the external linter, when one was run.
    pub lint_report: Option<String>,
}

/// The four quality metrics. Created fresh per analysis call and never
/// mutated after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSet {
    pub cyclomatic_complexity: u32,
    pub code_duplication: u32,
    pub code_length: u32,
    pub function_complexity: u32,
}

impl MetricsSet {
    /// The metrics as (key, value) pairs under their fixed names, in
    /// report order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("cyclomatic_complexity", self.cyclomatic_complexity),
            ("code_duplication", self.code_duplication),
            ("code_length", self.code_length),
            ("function_complexity", self.function_complexity),
        ]
    }
}

/// Metrics for a single function or class definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionMetrics {
    pub name: String,
    pub line: usize,
    pub metrics: MetricsSet,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Language {
    Python,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[(&["py", "pyi"], Language::Python)];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_str = match self {
            Language::Python => "Python",
            Language::Unknown => "Unknown",
        };
        write!(f, "{display_str}")
    }
}
