use crate::analyzers;
use crate::config::{self, Config, LintConfig};
use crate::core::{AnalysisReport, Language};
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use crate::lint::{CommandLinter, Linter};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub lint: bool,
    pub linter: Option<String>,
    pub recursion_limit: Option<usize>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = config::load_config(config.config.as_deref())?;
    let recursion_limit = config
        .recursion_limit
        .unwrap_or(file_config.engine.recursion_limit);

    let language = Language::from_path(&config.path);
    let analyzer = analyzers::get_analyzer(language)
        .with_context(|| format!("cannot analyze {}", config.path.display()))?;

    let content = io::read_file(&config.path)
        .with_context(|| format!("failed to read {}", config.path.display()))?;

    let (metrics, definitions) =
        analyzers::analyze_file(&content, &config.path, analyzer.as_ref(), recursion_limit)?;

    let lint_report = gather_lint_report(&config, &file_config)?;

    let report = AnalysisReport {
        path: config.path.clone(),
        language,
        timestamp: Utc::now(),
        metrics,
        definitions,
        lint_report,
    };

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)
}

fn gather_lint_report(config: &AnalyzeConfig, file_config: &Config) -> Result<Option<String>> {
    let enabled = config.lint || config.linter.is_some() || file_config.lint.enabled;
    if !enabled {
        return Ok(None);
    }

    let lint_config = match &config.linter {
        Some(command) => LintConfig {
            command: command.clone(),
            ..file_config.lint.clone()
        },
        None => file_config.lint.clone(),
    };

    let linter = CommandLinter::from_config(&lint_config);
    let report = linter.run(&config.path)?;
    Ok(Some(report))
}
