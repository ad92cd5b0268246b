// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod lint;
pub mod metrics;

// Re-export commonly used types
pub use crate::core::ast::{NodeKind, SyntaxNode};
pub use crate::core::errors::{Error, Result};
pub use crate::core::{AnalysisReport, DefinitionMetrics, Language, MetricsSet};

pub use crate::analyzers::{analyze_file, get_analyzer, Analyzer};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::lint::{CommandLinter, Linter};
pub use crate::metrics::{analyze, analyze_definitions, DEFAULT_RECURSION_LIMIT};
