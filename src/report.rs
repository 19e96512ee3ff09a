//! Rendering of partition experiment results
//!
//! Three output formats, all written to stdout by the caller: a fixed-width
//! text table (the default), a markdown pipe table, and pretty-printed JSON.
//! Column order follows the report's scheme order: one time column per
//! scheme, then one swap-count column per scheme.

use crate::error::Result;
use crate::experiment::{DistributionRow, PartitionReport};

const LABEL_WIDTH: usize = 22;
const TIME_WIDTH: usize = 18;
const SWAPS_WIDTH: usize = 15;

/// Render the report as a fixed-width aligned table.
pub fn render_text(report: &PartitionReport) -> String {
    let header = text_header(report);
    let rule_width = header.chars().count() + 4;

    let mut lines = Vec::new();
    lines.push(format!("Array Size: {}", report.array_size));
    lines.push(format!("Number of Trials: {}", report.trials));
    lines.push(String::new());
    lines.push("=".repeat(rule_width));
    lines.push("--- Results (Averages) ---".to_string());
    lines.push("=".repeat(rule_width));
    lines.push(header);
    lines.push("-".repeat(rule_width));

    for row in &report.rows {
        lines.push(text_row(row));
    }

    lines.push("-".repeat(rule_width));
    lines.join("\n")
}

fn text_header(report: &PartitionReport) -> String {
    let mut cells = vec![format!("{:<LABEL_WIDTH$}", "Data Type")];
    for scheme in &report.schemes {
        cells.push(format!(
            "{:>TIME_WIDTH$}",
            format!("{} Time (ms)", scheme.label())
        ));
    }
    for scheme in &report.schemes {
        cells.push(format!(
            "{:>SWAPS_WIDTH$}",
            format!("{} Swaps", scheme.label())
        ));
    }
    cells.join(" | ")
}

fn text_row(row: &DistributionRow) -> String {
    let mut cells = vec![format!("{:<LABEL_WIDTH$}", row.label)];
    for metrics in &row.metrics {
        cells.push(format!(
            "{:>TIME_WIDTH$}",
            format!("{:.4}", metrics.avg_time_ms)
        ));
    }
    for metrics in &row.metrics {
        cells.push(format!(
            "{:>SWAPS_WIDTH$}",
            format_thousands(metrics.avg_swaps)
        ));
    }
    cells.join(" | ")
}

/// Render the report as a markdown pipe table.
pub fn render_markdown(report: &PartitionReport) -> String {
    let mut lines = Vec::new();

    lines.push("## Partition Comparison\n".to_string());
    lines.push(format!(
        "Array size {}, {} trials per pair.\n",
        report.array_size, report.trials
    ));

    let mut header = vec!["Data Type".to_string()];
    for scheme in &report.schemes {
        header.push(format!("{} Time (ms)", scheme.label()));
    }
    for scheme in &report.schemes {
        header.push(format!("{} Swaps", scheme.label()));
    }
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push(format!("|{}|", vec!["---"; header.len()].join("|")));

    for row in &report.rows {
        let mut cells = vec![row.label.clone()];
        for metrics in &row.metrics {
            cells.push(format!("{:.4}", metrics.avg_time_ms));
        }
        for metrics in &row.metrics {
            cells.push(format_thousands(metrics.avg_swaps));
        }
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &PartitionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Round to the nearest integer and insert `,` thousands separators.
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::SchemeMetrics;
    use crate::partition::Scheme;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn sample_report() -> PartitionReport {
        PartitionReport {
            array_size: 10_000,
            trials: 50,
            date: Utc::now(),
            schemes: Scheme::ALL.to_vec(),
            rows: vec![DistributionRow {
                label: "Sorted Data".to_string(),
                metrics: vec![
                    SchemeMetrics {
                        scheme: Scheme::Lomuto,
                        avg_time_ms: 0.12346,
                        avg_swaps: 10_000.0,
                    },
                    SchemeMetrics {
                        scheme: Scheme::Hoare,
                        avg_time_ms: 0.05,
                        avg_swaps: 0.0,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.4), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(4999.5), "5,000");
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&sample_report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Array Size: 10000");
        assert_eq!(lines[1], "Number of Trials: 50");
        // Two schemes: 22 + 18 + 18 + 15 + 15 wide cells, four separators,
        // rules four characters wider than the header.
        assert_eq!(lines[3], "=".repeat(104));
        assert!(lines[6].starts_with("Data Type"));
        assert_eq!(lines[7], "-".repeat(104));
        assert!(lines[8].starts_with("Sorted Data"));
        assert!(lines[8].contains("0.1235"), "time rounded to 4 decimals");
        assert!(lines[8].contains("10,000"));
    }

    #[test]
    fn test_text_columns_follow_scheme_order() {
        let mut report = sample_report();
        report.schemes.reverse();
        report.rows[0].metrics.reverse();

        let text = render_text(&report);
        let header = text.lines().nth(6).unwrap();
        let hoare_time = header.find("Hoare Time (ms)").unwrap();
        let lomuto_time = header.find("Lomuto Time (ms)").unwrap();
        assert!(hoare_time < lomuto_time);
    }

    #[test]
    fn test_markdown_row_count() {
        let md = render_markdown(&sample_report());
        let data_rows = md
            .lines()
            .filter(|l| l.starts_with("| Sorted Data"))
            .count();
        assert_eq!(data_rows, 1);
        assert!(md.contains("| Data Type | Lomuto Time (ms) | Hoare Time (ms) |"));
    }

    #[test]
    fn test_json_round_trips_fields() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["array_size"], 10_000);
        assert_eq!(value["schemes"][0], "Lomuto");
        assert_eq!(value["rows"][0]["label"], "Sorted Data");
        assert_eq!(value["rows"][0]["metrics"][1]["scheme"], "Hoare");
    }
}
