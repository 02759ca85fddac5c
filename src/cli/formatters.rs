// Formatters for displaying extraction and return reports
use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::syntax::returns::ReturnClassification;
use crate::syntax::FileReport;

#[derive(Serialize)]
struct ReturnsReport<'a> {
    file_path: &'a str,
    has_value_return: bool,
    returns: &'a [ReturnClassification],
}

pub fn print_reports(reports: &[FileReport], json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    if reports.iter().all(|r| r.units.is_empty()) {
        println!("No documented methods found.");
        return Ok(());
    }

    for report in reports.iter().filter(|r| !r.units.is_empty()) {
        println!("{}", report.file_path.bold());
        for unit in &report.units {
            println!(
                "{} {}-{}",
                "lines".dimmed(),
                unit.start_line.to_string().cyan(),
                unit.end_line.to_string().cyan()
            );
            println!("{}", unit.content);
            println!();
        }
    }
    Ok(())
}

pub fn print_returns(file_path: &str, returns: &[ReturnClassification], json_output: bool) -> Result<()> {
    let has_value_return = returns.iter().any(|r| r.has_value);

    if json_output {
        let report = ReturnsReport {
            file_path,
            has_value_return,
            returns,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for r in returns {
        let label = if r.has_value { "value".green() } else { "bare".yellow() };
        println!("line {}: {}", r.line, label);
    }
    println!("Has return value: {}", has_value_return);
    Ok(())
}
