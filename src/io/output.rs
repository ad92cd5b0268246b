use crate::core::AnalysisReport;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_definitions(report)?;
        self.write_lint_report(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Code Quality Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "File: `{}`", report.path.display())?;
        writeln!(self.writer, "Language: {}", report.language)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        for (name, value) in report.metrics.entries() {
            writeln!(self.writer, "| {} | {} |", display_name(name), value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_definitions(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.definitions.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Definitions")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Line | Name | Cyclomatic | Duplication | Length | Function Complexity |"
        )?;
        writeln!(
            self.writer,
            "|------|------|------------|-------------|--------|---------------------|"
        )?;
        for def in &report.definitions {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                def.line,
                def.name,
                def.metrics.cyclomatic_complexity,
                def.metrics.code_duplication,
                def.metrics.code_length,
                def.metrics.function_complexity,
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_lint_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let Some(lint_report) = &report.lint_report else {
            return Ok(());
        };

        writeln!(self.writer, "## Linting Results")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer, "{}", lint_report.trim_end())?;
        writeln!(self.writer, "```")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header(report);
        print_metrics(report);
        print_definitions(report);
        print_lint_report(report);
        Ok(())
    }
}

fn print_header(report: &AnalysisReport) {
    println!("{}", "Code Quality Analysis Report".bold().blue());
    println!("{}", "----------------------------".blue());
    println!();
    println!("File: {}", report.path.display());
    println!("Language: {}", report.language);
    println!();
}

fn print_metrics(report: &AnalysisReport) {
    println!("{}", "Metrics:".bold());
    for (name, value) in report.metrics.entries() {
        println!("  - {}: {}", display_name(name), value);
    }
    println!();
}

fn print_definitions(report: &AnalysisReport) {
    if report.definitions.is_empty() {
        return;
    }

    println!("{}", "Definitions:".bold());
    for def in &report.definitions {
        println!(
            "  {}:{} {}() - Cyclomatic: {}, Duplication: {}, Length: {}, Function Complexity: {}",
            report.path.display(),
            def.line,
            def.name.yellow(),
            def.metrics.cyclomatic_complexity,
            def.metrics.code_duplication,
            def.metrics.code_length,
            def.metrics.function_complexity,
        );
    }
    println!();
}

fn print_lint_report(report: &AnalysisReport) {
    let Some(lint_report) = &report.lint_report else {
        return;
    };

    println!("{}", "Linting Results:".bold());
    println!("{}", lint_report.trim_end());
}

fn display_name(key: &str) -> &'static str {
    match key {
        "cyclomatic_complexity" => "Cyclomatic Complexity",
        "code_duplication" => "Code Duplication",
        "code_length" => "Code Length",
        "function_complexity" => "Function Complexity",
        _ => "Unknown",
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    })
}
