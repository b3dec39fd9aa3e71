//! Report rendering: terminal tables, markdown and JSON.

use crate::report::{AnalysisReport, CategoryShare, FrequencyTable, SummaryStats};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

/// Format the report as terminal tables.
pub fn format_table(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("Health Data Analysis Report\n");
    output.push_str(&format!(
        "Records analyzed: {}  Generated at: {}\n",
        format_number(report.total_records as u64),
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    // Numeric summaries
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Mean", "Median", "Min", "Max", "Std dev"]);

    table.add_row(stats_row("Age (years)", &report.demographics.age));
    for (name, stats) in report.vitals.metrics() {
        table.add_row(stats_row(name, stats));
    }

    output.push('\n');
    output.push_str(&table.to_string());
    output.push('\n');

    for (title, shares) in [
        ("Gender", &report.demographics.gender),
        ("Age group", &report.demographics.age_groups),
        ("Blood type", &report.demographics.blood_type),
        ("BMI category", &report.vitals.bmi_categories),
        ("Blood pressure", &report.vitals.blood_pressure_categories),
    ] {
        output.push('\n');
        output.push_str(&share_table(title, shares).to_string());
        output.push('\n');
    }

    for (title, freq) in report.history.categories() {
        output.push('\n');
        output.push_str(&frequency_table(title, freq).to_string());
        output.push_str(&format!(
            "\n{} mentions, {} distinct, {} with none\n",
            format_number(freq.total_mentions as u64),
            format_number(freq.distinct_items as u64),
            format_number(freq.none_count as u64)
        ));
    }

    output
}

fn stats_row(name: &str, stats: &SummaryStats) -> Vec<Cell> {
    vec![
        Cell::new(name).fg(Color::Cyan),
        Cell::new(format!("{:.1}", stats.mean)),
        Cell::new(format!("{:.1}", stats.median)),
        Cell::new(format!("{:.1}", stats.min)),
        Cell::new(format!("{:.1}", stats.max)),
        Cell::new(format!("{:.1}", stats.std_dev)),
    ]
}

fn share_table(title: &str, shares: &[CategoryShare]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![title, "Count", "Percent"]);

    for share in shares {
        table.add_row(vec![
            Cell::new(&share.label),
            Cell::new(format_number(share.count as u64)),
            Cell::new(format!("{:.1}%", share.percentage)),
        ]);
    }

    table
}

fn frequency_table(title: &str, freq: &FrequencyTable) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![title, "Count"]);

    if freq.top.is_empty() {
        table.add_row(vec![Cell::new("-").fg(Color::DarkGrey), Cell::new("0")]);
    }
    for entry in &freq.top {
        table.add_row(vec![
            Cell::new(&entry.item),
            Cell::new(format_number(entry.count as u64)),
        ]);
    }

    table
}

/// Format the report as markdown.
pub fn format_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str("# Health Data Analysis Report\n\n");
    output.push_str(&format!(
        "**Generated:** {}\n\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "**Records analyzed:** {}\n\n",
        format_number(report.total_records as u64)
    ));

    output.push_str("## Summary Statistics\n\n");
    output.push_str("| Metric | Mean | Median | Min | Max | Std dev |\n");
    output.push_str("|--------|------|--------|-----|-----|---------|\n");
    let rows = std::iter::once(("Age (years)", &report.demographics.age))
        .chain(report.vitals.metrics());
    for (name, s) in rows {
        output.push_str(&format!(
            "| {} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} |\n",
            name, s.mean, s.median, s.min, s.max, s.std_dev
        ));
    }

    output.push_str("\n## Distributions\n");
    for (title, shares) in [
        ("Gender", &report.demographics.gender),
        ("Age group", &report.demographics.age_groups),
        ("Blood type", &report.demographics.blood_type),
        ("BMI category", &report.vitals.bmi_categories),
        ("Blood pressure", &report.vitals.blood_pressure_categories),
    ] {
        output.push_str(&format!("\n### {title}\n\n"));
        output.push_str("| Category | Count | Percent |\n");
        output.push_str("|----------|-------|---------|\n");
        for share in shares {
            output.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                share.label,
                format_number(share.count as u64),
                share.percentage
            ));
        }
    }

    output.push_str("\n## Medical History\n");
    for (title, freq) in report.history.categories() {
        output.push_str(&format!("\n### {title}\n\n"));
        output.push_str(&format!(
            "- **Mentions:** {}\n- **Distinct:** {}\n- **None reported:** {}\n\n",
            format_number(freq.total_mentions as u64),
            format_number(freq.distinct_items as u64),
            format_number(freq.none_count as u64)
        ));
        if freq.top.is_empty() {
            continue;
        }
        output.push_str("| Item | Count |\n");
        output.push_str("|------|-------|\n");
        for entry in &freq.top {
            output.push_str(&format!(
                "| {} | {} |\n",
                entry.item,
                format_number(entry.count as u64)
            ));
        }
    }

    output
}

/// Format the report as pretty-printed JSON.
pub fn format_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use chrono::NaiveDate;
    use health_core::GeneratorConfig;
    use health_generator::RecordGenerator;

    fn sample_report() -> AnalysisReport {
        let created = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut generator = RecordGenerator::from_config(GeneratorConfig::default(), 42)
            .unwrap()
            .with_created_at(created);
        let records = generator.generate_batch(50).unwrap();
        analyze(&records).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_table_sections() {
        let output = format_table(&sample_report());
        assert!(output.contains("Records analyzed: 50"));
        assert!(output.contains("Age (years)"));
        assert!(output.contains("Cholesterol (mg/dL)"));
        assert!(output.contains("Blood type"));
        assert!(output.contains("Hypertension stage 2"));
        assert!(output.contains("Family history"));
        assert!(output.contains(" with none"));
        assert!(!output.contains("無已知過敏"));
    }

    #[test]
    fn test_format_markdown_sections() {
        let output = format_markdown(&sample_report());
        assert!(output.starts_with("# Health Data Analysis Report"));
        assert!(output.contains("## Summary Statistics"));
        assert!(output.contains("| Metric | Mean | Median | Min | Max | Std dev |"));
        assert!(output.contains("### Age group"));
        assert!(output.contains("| 76+ |"));
        assert!(output.contains("## Medical History"));
        assert!(output.contains("- **None reported:** "));
    }

    #[test]
    fn test_format_json_parses_back() {
        let report = sample_report();
        let json = format_json(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_records, 50);
        assert_eq!(parsed.demographics.gender.len(), 2);
    }
}
