//! Display tables and metrics derived from an [`EstimateOutput`].

use crate::domain::models::{BreakdownRow, EstimateOutput, EstimateSummary, Metric, StudyRow};

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{}.{f}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

/// Whole rupees with thousands separators, e.g. `₹44,021`.
pub fn format_currency(amount: f64) -> String {
    format!("₹{}", format_grouped(amount, 0))
}

/// Hours to one decimal, e.g. `1,234.5`.
pub fn format_hours(hours: f64) -> String {
    format_grouped(hours, 1)
}

pub fn study_rows(out: &EstimateOutput) -> Vec<StudyRow> {
    out.studies
        .iter()
        .map(|s| StudyRow {
            study: s.name.clone(),
            study_hours: s.study_hours,
            report_hours: s.report_hours,
            total_hours: s.study_hours + s.report_hours,
            cost: s.study_cost + s.report_cost,
        })
        .collect()
}

pub fn breakdown_rows(out: &EstimateOutput) -> Vec<BreakdownRow> {
    let buses = f64::from(out.total_buses);
    [
        ("Studies", out.total_study_cost),
        ("Reporting", out.total_reporting_cost),
        ("Modelling", out.modelling_cost),
        ("Meetings", out.meetings_cost),
        ("Custom", out.custom_cost),
        ("Buffer", out.buffer),
    ]
    .into_iter()
    .map(|(component, total)| BreakdownRow {
        component: component.to_string(),
        total,
        per_bus: if buses > 0.0 { total / buses } else { 0.0 },
        percent: if out.grand_total > 0.0 {
            total / out.grand_total * 100.0
        } else {
            0.0
        },
    })
    .collect()
}

fn metric(label: &str, value: f64) -> Metric {
    Metric {
        label: label.to_string(),
        value,
    }
}

pub fn summary(project_name: &str, out: &EstimateOutput) -> EstimateSummary {
    EstimateSummary {
        project_name: project_name.to_string(),
        total_buses: out.total_buses,
        grand_total: out.grand_total,
        cost_per_bus: out.cost_per_bus,
        cost: vec![
            metric("Study", out.total_study_cost),
            metric("Report", out.total_reporting_cost),
            metric("Modelling", out.modelling_cost),
            metric("Meetings", out.meetings_cost),
            metric("Custom", out.custom_cost),
            metric("Subtotal", out.subtotal),
            metric("Buffer", out.buffer),
            metric("Total", out.grand_total),
        ],
        time: vec![
            metric("Study", out.total_study_hours),
            metric("Report", out.total_report_hours),
            metric("Modelling", out.modelling_hours),
            metric("Meetings", out.meetings_hours),
            metric("Total", out.total_project_hours),
        ],
    }
}
