//! Plain-text report rendering: fixed section headers, one bullet per
//! line item.

use std::io;
use std::path::Path;

use crate::pipeline::analysis::ClauseCategory;
use crate::pipeline::analyzer::DocumentAnalysis;

const BULLET: &str = "\u{2022} ";

/// Render the full analysis as the fixed-format text report.
pub fn render_report(analysis: &DocumentAnalysis) -> String {
    let mut out = String::new();

    out.push_str("=== INSURANCE DOCUMENT ANALYSIS ===\n\n");
    out.push_str("== SUMMARY ==\n\n");

    let summary = &analysis.summary;
    section(&mut out, "= PROS =", &summary.pros);
    section(&mut out, "= CONS =", &summary.cons);
    section(&mut out, "= HIDDEN DETAILS =", &summary.hidden_details);
    section(&mut out, "= KEY EXCLUSIONS =", &summary.key_exclusions);
    section(&mut out, "= KEY LIMITATIONS =", &summary.key_limitations);
    section(
        &mut out,
        "= IMPORTANT REQUIREMENTS =",
        &summary.important_requirements,
    );
    section(
        &mut out,
        "= CRITICAL DEADLINES =",
        &summary.critical_deadlines,
    );
    section(&mut out, "= SIGNIFICANT FEES =", &summary.significant_fees);
    section(
        &mut out,
        "= COVERAGE HIGHLIGHTS =",
        &summary.coverage_highlights,
    );

    out.push_str("== DETAILED ANALYSIS ==\n\n");

    let detailed = &analysis.detailed_analysis;
    for category in ClauseCategory::ALL {
        let title = format!("= {} =", category.as_str().to_uppercase());
        section(&mut out, &title, detailed.findings.category(category));
    }

    section_values(&mut out, "= MONETARY VALUES =", &detailed.monetary_values);
    section_values(&mut out, "= PERCENTAGES =", &detailed.percentages);
    section_values(&mut out, "= DATES =", &detailed.dates);

    out
}

/// Render and write the report to `path`.
pub fn write_report(analysis: &DocumentAnalysis, path: &Path) -> io::Result<()> {
    std::fs::write(path, render_report(analysis))
}

fn section(out: &mut String, title: &str, items: &[String]) {
    out.push_str(title);
    out.push('\n');
    for item in items {
        out.push_str(BULLET);
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');
}

fn section_values(
    out: &mut String,
    title: &str,
    mentions: &[crate::pipeline::analysis::Mention],
) {
    out.push_str(title);
    out.push('\n');
    for mention in mentions {
        out.push_str(BULLET);
        out.push_str(&mention.value);
        out.push_str(" \u{2014} ");
        out.push_str(&mention.context);
        out.push('\n');
    }
    out.push('\n');
}
