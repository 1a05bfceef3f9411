//! CSV export implementation.
//!
//! Exports one row per vertex for spreadsheet use. Component ids are 1-based
//! positions in the report's component lists.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        // Write header
        writeln!(writer, "vertex,scc,wcc,scc_size,cyclic")?;

        let scc_of = report.scc_membership();
        let wcc_of = report.wcc_membership();

        for vertex in 0..report.vertex_count {
            let label = data.index_base.to_label(vertex);
            let wcc = wcc_of[vertex].map(|id| (id + 1).to_string()).unwrap_or_default();

            // Vertices left out of the SCC list get empty SCC columns
            match scc_of[vertex] {
                Some(id) => {
                    let scc = &report.sccs[id];
                    writeln!(
                        writer,
                        "{},{},{},{},{}",
                        label,
                        id + 1,
                        wcc,
                        scc.len(),
                        scc.cyclic
                    )?;
                }
                None => writeln!(writer, "{},,{},,", label, wcc)?,
            }
        }

        Ok(())
    }
}
