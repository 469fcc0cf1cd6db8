use std::fmt::Write;

use crate::pipeline::PipelineResult;

const RULE_WIDTH: usize = 60;

/// Human-readable run summary printed to stdout after a successful run.
pub fn render_summary(result: &PipelineResult) -> String {
    let stats = &result.statistics;
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "PROCESSING COMPLETE");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "\nTotal Members: {}", stats.total);
    let _ = writeln!(out, "  Active: {}", stats.active);
    let _ = writeln!(out, "  Inactive: {}", stats.inactive);
    let _ = writeln!(out, "\nBy Type:");
    for (label, split) in [
        ("Companies", &stats.companies),
        ("Individual Entrepreneurs", &stats.individual_entrepreneurs),
        ("Private Persons", &stats.private_persons),
    ] {
        let _ = writeln!(out, "  {}: {}", label, split.total());
        let _ = writeln!(out, "    - Active: {}", split.active);
        let _ = writeln!(out, "    - Inactive: {}", split.inactive);
    }

    match &result.written {
        Some(files) => {
            let _ = writeln!(out, "\nGenerated Files:");
            let _ = writeln!(
                out,
                "  ✓ {} ({} members with all fields)",
                files.complete.display(),
                stats.total
            );
            let _ = writeln!(
                out,
                "  ✓ {} (compact version for fast search)",
                files.search.display()
            );
        }
        None => {
            let _ = writeln!(out, "\nDry run: no files written");
        }
    }
    let _ = write!(out, "{rule}");
    out
}
