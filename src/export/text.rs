//! Plain text export implementation.
//!
//! Prints component counts followed by the components themselves, one SCC
//! per line and all WCCs on a single line.

use super::{format_list, ExportData, Exporter};
use std::io::{self, Write};

/// Plain text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let sccs = data.labeled_sccs();
        writeln!(
            writer,
            "Number of Strongly Connected Components: {}",
            sccs.len()
        )?;
        writeln!(writer, "Strongly Connected Components:")?;
        for (i, scc) in sccs.iter().enumerate() {
            writeln!(writer, "SCC {}: {}", i + 1, format_list(scc))?;
        }

        let wccs = data.labeled_wccs();
        writeln!(
            writer,
            "Number of Weakly Connected Components: {}",
            wccs.len()
        )?;
        let lists: Vec<String> = wccs.iter().map(|wcc| format_list(wcc)).collect();
        writeln!(
            writer,
            "Weakly Connected Components: [{}]",
            lists.join(", ")
        )?;

        if let Some(verification) = &data.report.verification {
            writeln!(writer, "Verification (SCC): {}", verification.scc.summary())?;
            writeln!(writer, "Verification (WCC): {}", verification.wcc.summary())?;
        }

        Ok(())
    }
}
