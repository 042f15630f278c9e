// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod console_format;
mod error;
mod input;
mod report;
mod types;
mod ui;

use config::ReportPlan;
use error::ReportError;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve config file, environment and defaults
    let plan = match config::build_report_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&plan) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load the what-if document, render it, and write every requested output
fn run(plan: &ReportPlan) -> Result<(), ReportError> {
    let doc = input::load_document(&plan.input)?;

    if !plan.quiet
        && let Some(ref status) = doc.status
        && status != "Succeeded"
    {
        ui::print_warning(&format!("what-if status is '{}'; the report may be incomplete", status));
    }

    let blocks = report::assemble_blocks(&doc, &plan.title);
    let markdown = report::to_markdown(&blocks);

    match plan.output {
        Some(ref path) => {
            report::export_markdown_report(&markdown, path)?;
            if !plan.quiet {
                ui::status(&format!("Markdown report saved to: {}", path.display()));
            }
        }
        None => report::print_markdown_report(&markdown)?,
    }

    if let Some(ref path) = plan.json_blocks {
        report::export_json_blocks(&blocks, path)?;
        if !plan.quiet {
            ui::status(&format!("Document blocks saved to: {}", path.display()));
        }
    }

    if plan.summary {
        let summary = report::summarize_changes(&doc);
        console_format::print_summary_table(&plan.title, &summary);
    }

    if !plan.quiet {
        ui::status(&format!(
            "Rendered {} change(s) from {}",
            doc.changes.len(),
            plan.input.describe()
        ));
    }

    Ok(())
}
