//! JSON export implementation.
//!
//! Exports component analysis results in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::graph::verify::PartitionCheck;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Graph info for JSON output.
#[derive(Serialize)]
struct JsonGraph {
    source: String,
    vertex_count: usize,
    edge_count: usize,
    index_base: u8,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    strongly_connected: usize,
    cyclic_components: usize,
    largest_strongly_connected: usize,
    weakly_connected: usize,
    largest_weakly_connected: usize,
    seed_order: String,
}

/// Serializable strongly connected component.
#[derive(Serialize)]
struct JsonScc {
    id: usize,
    size: usize,
    cyclic: bool,
    vertices: Vec<i64>,
}

/// Serializable weakly connected component.
#[derive(Serialize)]
struct JsonWcc {
    id: usize,
    size: usize,
    vertices: Vec<i64>,
}

/// Serializable verification check.
#[derive(Serialize)]
struct JsonCheck {
    matches: bool,
    is_partition: bool,
    found: usize,
    expected: usize,
}

impl From<&PartitionCheck> for JsonCheck {
    fn from(check: &PartitionCheck) -> Self {
        Self {
            matches: check.matches,
            is_partition: check.is_partition,
            found: check.found,
            expected: check.expected,
        }
    }
}

/// Serializable verification results.
#[derive(Serialize)]
struct JsonVerification {
    strongly_connected: JsonCheck,
    weakly_connected: JsonCheck,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    graph: JsonGraph,
    summary: JsonSummary,
    strongly_connected: Vec<JsonScc>,
    weakly_connected: Vec<JsonWcc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification: Option<JsonVerification>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        let strongly_connected: Vec<JsonScc> = report
            .sccs
            .iter()
            .zip(data.labeled_sccs())
            .enumerate()
            .map(|(i, (scc, vertices))| JsonScc {
                id: i + 1,
                size: vertices.len(),
                cyclic: scc.cyclic,
                vertices,
            })
            .collect();

        let weakly_connected: Vec<JsonWcc> = data
            .labeled_wccs()
            .into_iter()
            .enumerate()
            .map(|(i, vertices)| JsonWcc {
                id: i + 1,
                size: vertices.len(),
                vertices,
            })
            .collect();

        let export = JsonExport {
            graph: JsonGraph {
                source: data.source.clone(),
                vertex_count: report.vertex_count,
                edge_count: report.edge_count,
                index_base: data.index_base.into(),
            },
            summary: JsonSummary {
                strongly_connected: report.sccs.len(),
                cyclic_components: report.cyclic_count(),
                largest_strongly_connected: report.largest_scc(),
                weakly_connected: report.wccs.len(),
                largest_weakly_connected: report.largest_wcc(),
                seed_order: report.seed_order.to_string(),
            },
            strongly_connected,
            weakly_connected,
            verification: report.verification.as_ref().map(|v| JsonVerification {
                strongly_connected: (&v.scc).into(),
                weakly_connected: (&v.wcc).into(),
            }),
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
