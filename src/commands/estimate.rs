use crate::cli::{Cli, Commands, EstimateArgs, ExportFormat};
use crate::domain::models::{EstimateOutput, EstimateReport, ExportReport, JsonOut, Profile};
use crate::services::calculator::calculate_all;
use crate::services::export::{default_file_name, render, write_export, ExportMeta};
use crate::services::input::prepare_input;
use crate::services::output::{print_empty_selection, print_out};
use crate::services::report::{breakdown_rows, format_currency, format_hours, study_rows, summary};
use std::path::Path;

fn compute(args: &EstimateArgs, profile: &Profile) -> anyhow::Result<Option<EstimateReport>> {
    let input = prepare_input(args, profile)?;
    let Some(output) = calculate_all(&input)? else {
        return Ok(None);
    };
    Ok(Some(EstimateReport {
        project_name: args.project_name.clone(),
        remarks: args.remarks.clone(),
        input,
        output,
    }))
}

fn print_estimate(json: bool, report: &EstimateReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
        return Ok(());
    }
    let s = summary(&report.project_name, &report.output);
    println!("project: {}", s.project_name);
    println!("total: {}", format_currency(s.grand_total));
    println!(
        "per bus: {} ({} buses)",
        format_currency(s.cost_per_bus),
        s.total_buses
    );
    for m in &s.cost {
        println!("cost\t{}\t{}", m.label, format_currency(m.value));
    }
    for m in &s.time {
        println!("hours\t{}\t{}", m.label, format_hours(m.value));
    }
    if !report.remarks.is_empty() {
        println!("remarks: {}", report.remarks);
    }
    Ok(())
}

fn export(
    json: bool,
    report: &EstimateReport,
    format: ExportFormat,
    out: Option<&Path>,
    to_stdout: bool,
    detail: bool,
) -> anyhow::Result<()> {
    let meta = ExportMeta {
        project_name: report.project_name.clone(),
        remarks: report.remarks.clone(),
        timestamp: chrono::Local::now().fixed_offset(),
    };
    let contents = render(format, &meta, &report.output, detail)?;
    if to_stdout {
        print!("{}", contents);
        return Ok(());
    }
    let path = out
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_file_name(&report.project_name, format));
    write_export(&path, &contents)?;
    let written = ExportReport {
        path: path.to_string_lossy().to_string(),
        format: format.extension().to_string(),
        bytes: contents.len(),
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: written
            })?
        );
    } else {
        println!("wrote {}", written.path);
    }
    Ok(())
}

fn print_studies(json: bool, output: &EstimateOutput) -> anyhow::Result<()> {
    let rows = study_rows(output);
    print_out(json, &rows, |r| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            r.study,
            format_hours(r.study_hours),
            format_hours(r.report_hours),
            format_hours(r.total_hours),
            format_currency(r.cost)
        )
    })
}

fn print_breakdown(json: bool, output: &EstimateOutput) -> anyhow::Result<()> {
    let rows = breakdown_rows(output);
    print_out(json, &rows, |r| {
        format!(
            "{}\t{}\t{}\t{:.1}%",
            r.component,
            format_currency(r.total),
            format_currency(r.per_bus),
            r.percent
        )
    })
}

pub fn handle_estimate_commands(cli: &Cli, profile: &Profile) -> anyhow::Result<bool> {
    let args = match &cli.command {
        Commands::Estimate { args }
        | Commands::Breakdown { args }
        | Commands::Studies { args }
        | Commands::Export { args, .. } => args,
        _ => return Ok(false),
    };

    let Some(report) = compute(args, profile)? else {
        print_empty_selection(cli.json)?;
        return Ok(true);
    };

    match &cli.command {
        Commands::Estimate { .. } => print_estimate(cli.json, &report)?,
        Commands::Breakdown { .. } => print_breakdown(cli.json, &report.output)?,
        Commands::Studies { .. } => print_studies(cli.json, &report.output)?,
        Commands::Export {
            format,
            out,
            stdout,
            detail,
            ..
        } => export(cli.json, &report, *format, out.as_deref(), *stdout, *detail)?,
        _ => return Ok(false),
    }

    Ok(true)
}
