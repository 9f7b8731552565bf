//! drawer-stack - scenario player for the stacked drawer system

use anyhow::Result;
use clap::Parser;

use drawer_stack::cli::CliArgs;
use drawer_stack::config::DrawerConfig;
use drawer_stack::scenario::{Scenario, ScenarioRunner, StepReport};

fn main() -> Result<()> {
    drawer_stack::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => DrawerConfig::load_from(path)?,
        None => DrawerConfig::load(),
    };
    let scenario = Scenario::load(&args.scenario)?;

    let mut runner = ScenarioRunner::new(config);
    let reports = runner.run(&scenario);

    let shown: &[StepReport] = if args.quiet {
        reports.last().map(std::slice::from_ref).unwrap_or(&[])
    } else {
        &reports
    };

    for (i, report) in shown.iter().enumerate() {
        if args.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            print_report(i + 1, report);
        }
    }

    Ok(())
}

fn print_report(number: usize, report: &StepReport) {
    match report.delivered {
        Some(0) => println!("#{} {} (dropped: no subscribers)", number, report.step),
        _ => println!("#{} {}", number, report.step),
    }

    let Some(stack) = &report.stack else {
        println!("   <no manager mounted>");
        return;
    };

    let ids: Vec<&str> = stack.entries.iter().map(|e| e.id.as_str()).collect();
    println!("   stack: [{}]", ids.join(", "));

    for panel in &report.panels {
        println!(
            "   {:<16} {:<10} pos={} offset={:>4} z={} opacity={:.2} backdrop={} hotspot={}",
            panel.id,
            panel.state,
            panel.position,
            panel.offset,
            panel.z_index,
            panel.opacity,
            if panel.backdrop { "on" } else { "off" },
            if panel.hotspot { "on" } else { "off" },
        );
        if !panel.breadcrumbs.is_empty() {
            println!("   {:<16} crumbs: {}", "", panel.breadcrumbs.join(" › "));
        }
    }
}
