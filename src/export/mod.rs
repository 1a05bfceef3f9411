//! Export functionality for component analysis results.
//!
//! This module provides exporters for outputting analysis results in
//! various formats: plain text, JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use crate::analysis::{AnalysisReport, SccEntry};
use crate::parser::IndexBase;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - component counts and lists, one per line
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - one row per vertex
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
///
/// Pairs an analysis report with the labelling used to print vertices.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Where the graph came from (file path or "sample")
    pub source: String,
    /// Labelling convention for printed vertices
    pub index_base: IndexBase,
    /// The analysis results
    pub report: AnalysisReport,
}

impl ExportData {
    /// Create new export data from analysis results.
    pub fn new(source: impl Into<String>, index_base: IndexBase, report: AnalysisReport) -> Self {
        Self {
            source: source.into(),
            index_base,
            report,
        }
    }

    /// SCC vertices relabelled for output.
    pub fn labeled_sccs(&self) -> Vec<Vec<i64>> {
        self.report
            .sccs
            .iter()
            .map(|scc: &SccEntry| self.index_base.label_all(&scc.vertices))
            .collect()
    }

    /// WCC vertices relabelled for output.
    pub fn labeled_wccs(&self) -> Vec<Vec<i64>> {
        self.report
            .wccs
            .iter()
            .map(|wcc| self.index_base.label_all(wcc))
            .collect()
    }
}

/// Formats labels as `[a, b, c]`.
pub(crate) fn format_list(labels: &[i64]) -> String {
    let items: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::create_test_data;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("invalid".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Csv), "csv");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
    }

    #[test]
    fn test_labeled_components() {
        let data = create_test_data(false);
        assert_eq!(data.labeled_wccs(), vec![vec![1, 2, 3, 4, 5], vec![6], vec![7]]);
        assert!(data.labeled_sccs().contains(&vec![1, 3, 2]));
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "[]");
        assert_eq!(format_list(&[7]), "[7]");
        assert_eq!(format_list(&[1, 2, 4]), "[1, 2, 4]");
    }

    #[test]
    fn test_export_to_string_every_format() {
        let data = create_test_data(true);
        for format in [
            ExportFormat::Text,
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Markdown,
        ] {
            let out = export_to_string(format, &data).unwrap();
            assert!(!out.is_empty(), "{format} export was empty");
        }
    }
}
