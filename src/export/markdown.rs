//! Markdown export implementation.
//!
//! Exports component analysis results in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use crate::graph::verify::PartitionCheck;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

fn join_labels(labels: &[i64]) -> String {
    let items: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    items.join(", ")
}

fn status(check: &PartitionCheck) -> &'static str {
    if check.matches {
        "✅"
    } else {
        "⚠️"
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        // Title
        writeln!(writer, "# Component Analysis Report")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "**Graph:** {} ({} vertices, {} edges, {} labels)",
            data.source, report.vertex_count, report.edge_count, data.index_base
        )?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Strongly Connected Components | {} |", report.sccs.len())?;
        writeln!(writer, "| Cyclic Components | {} |", report.cyclic_count())?;
        writeln!(writer, "| Largest SCC | {} |", report.largest_scc())?;
        writeln!(writer, "| Weakly Connected Components | {} |", report.wccs.len())?;
        writeln!(writer, "| Largest WCC | {} |", report.largest_wcc())?;
        writeln!(writer, "| Seed Order | {} |", report.seed_order)?;
        writeln!(writer)?;

        // Strongly connected components
        let sccs = data.labeled_sccs();
        if !sccs.is_empty() {
            writeln!(writer, "## Strongly Connected Components ({})", sccs.len())?;
            writeln!(writer)?;
            writeln!(writer, "| # | Size | Cyclic | Vertices |")?;
            writeln!(writer, "|---|------|--------|----------|")?;
            for (i, (scc, labels)) in report.sccs.iter().zip(&sccs).enumerate() {
                writeln!(
                    writer,
                    "| {} | {} | {} | {} |",
                    i + 1,
                    labels.len(),
                    if scc.cyclic { "yes" } else { "no" },
                    join_labels(labels)
                )?;
            }
            writeln!(writer)?;
        }

        // Weakly connected components
        let wccs = data.labeled_wccs();
        if !wccs.is_empty() {
            writeln!(writer, "## Weakly Connected Components ({})", wccs.len())?;
            writeln!(writer)?;
            writeln!(writer, "| # | Size | Vertices |")?;
            writeln!(writer, "|---|------|----------|")?;
            for (i, labels) in wccs.iter().enumerate() {
                writeln!(
                    writer,
                    "| {} | {} | {} |",
                    i + 1,
                    labels.len(),
                    join_labels(labels)
                )?;
            }
            writeln!(writer)?;
        }

        if let Some(verification) = &report.verification {
            writeln!(writer, "## Verification")?;
            writeln!(writer)?;
            writeln!(
                writer,
                "- {} SCC: {}",
                status(&verification.scc),
                verification.scc.summary()
            )?;
            writeln!(
                writer,
                "- {} WCC: {}",
                status(&verification.wcc),
                verification.wcc.summary()
            )?;
            writeln!(writer)?;
        }

        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by GraphScope*")?;

        Ok(())
    }
}
