//! Flat-file renderings of an estimate. Renderers are pure; the caller
//! supplies the timestamp and decides where the bytes go.

use crate::cli::ExportFormat;
use crate::domain::models::EstimateOutput;
use crate::services::report::{breakdown_rows, format_currency};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExportMeta {
    pub project_name: String,
    pub remarks: String,
    pub timestamp: DateTime<FixedOffset>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    project_name: &'a str,
    grand_total: f64,
    cost_per_bus: f64,
    total_buses: u32,
    timestamp: String,
    remarks: &'a str,
}

pub fn render_json(meta: &ExportMeta, out: &EstimateOutput) -> anyhow::Result<String> {
    let doc = JsonExport {
        project_name: &meta.project_name,
        grand_total: out.grand_total,
        cost_per_bus: out.cost_per_bus,
        total_buses: out.total_buses,
        timestamp: meta.timestamp.to_rfc3339(),
        remarks: &meta.remarks,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn render_csv(meta: &ExportMeta, out: &EstimateOutput, detail: bool) -> anyhow::Result<String> {
    let mut w = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    w.write_record(["Project", meta.project_name.as_str()])?;
    w.write_record(["Total", format!("{:.2}", out.grand_total).as_str()])?;
    w.write_record(["Per Bus", format!("{:.2}", out.cost_per_bus).as_str()])?;
    w.write_record(["Buses", out.total_buses.to_string().as_str()])?;
    if detail {
        w.write_record(["Component", "Total", "Percent"])?;
        for row in breakdown_rows(out) {
            w.write_record([
                row.component,
                format!("{:.2}", row.total),
                format!("{:.1}", row.percent),
            ])?;
        }
    }
    let bytes = w.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_txt(meta: &ExportMeta, out: &EstimateOutput) -> String {
    format!(
        "PROJECT: {}\nTOTAL: {}\nPER BUS: {}\nBUSES: {}\nREMARKS: {}\n",
        meta.project_name,
        format_currency(out.grand_total),
        format_currency(out.cost_per_bus),
        out.total_buses,
        meta.remarks
    )
}

pub fn render(
    format: ExportFormat,
    meta: &ExportMeta,
    out: &EstimateOutput,
    detail: bool,
) -> anyhow::Result<String> {
    match format {
        ExportFormat::Json => render_json(meta, out),
        ExportFormat::Csv => render_csv(meta, out, detail),
        ExportFormat::Txt => Ok(render_txt(meta, out)),
    }
}

/// `estimate-<project>.<ext>` with path separators replaced.
pub fn default_file_name(project_name: &str, format: ExportFormat) -> PathBuf {
    let safe: String = project_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    PathBuf::from(format!("estimate-{}.{}", safe, format.extension()))
}

pub fn write_export(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EstimateInput;
    use crate::services::calculator::calculate_all;

    fn fixture() -> (ExportMeta, EstimateOutput) {
        let meta = ExportMeta {
            project_name: "Plant-7".to_string(),
            remarks: "site visit pending".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2026-10-19T09:30:00+05:30")
                .expect("valid timestamp"),
        };
        let out = calculate_all(&EstimateInput::default())
            .expect("valid input")
            .expect("studies selected");
        (meta, out)
    }

    #[test]
    fn json_carries_headline_fields() {
        let (meta, out) = fixture();
        let v: serde_json::Value =
            serde_json::from_str(&render_json(&meta, &out).expect("render")).expect("json");
        assert_eq!(v["projectName"], "Plant-7");
        assert_eq!(v["totalBuses"], 78);
        assert_eq!(v["timestamp"], "2026-10-19T09:30:00+05:30");
        assert_eq!(v["remarks"], "site visit pending");
        assert!((v["grandTotal"].as_f64().expect("number") - out.grand_total).abs() < 1e-9);
    }

    #[test]
    fn csv_summary_has_two_columns() {
        let (meta, out) = fixture();
        let csv = render_csv(&meta, &out, false).expect("render");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Project,Plant-7");
        assert_eq!(lines[3], "Buses,78");
        assert!(lines[1].starts_with("Total,"));
    }

    #[test]
    fn csv_detail_appends_components() {
        let (meta, out) = fixture();
        let csv = render_csv(&meta, &out, true).expect("render");
        assert!(csv.contains("Component,Total,Percent"));
        assert!(csv.contains("\nBuffer,"));
        assert_eq!(csv.lines().count(), 4 + 1 + 6);
    }

    #[test]
    fn csv_quotes_awkward_project_names() {
        let (mut meta, out) = fixture();
        meta.project_name = "North, Phase 2".to_string();
        let csv = render_csv(&meta, &out, false).expect("render");
        assert!(csv.starts_with("Project,\"North, Phase 2\""));
    }

    #[test]
    fn txt_uses_currency_format() {
        let (meta, out) = fixture();
        let txt = render_txt(&meta, &out);
        assert!(txt.starts_with("PROJECT: Plant-7\nTOTAL: ₹"));
        assert!(txt.contains("BUSES: 78\n"));
        assert!(txt.ends_with("REMARKS: site visit pending\n"));
    }

    #[test]
    fn file_name_is_sanitized() {
        assert_eq!(
            default_file_name("a/b", ExportFormat::Csv),
            PathBuf::from("estimate-a_b.csv")
        );
    }
}
