//! plan-runner: headless runner for FinPlan.
//!
//! Usage:
//!   plan-runner --db plans.db --seed-demo
//!   plan-runner --db plans.db --ipc-mode

use anyhow::Result;
use finplan_core::{
    config::PlanConfig,
    error::PlanError,
    format::{self, terms},
    insight::InsightRequest,
    metrics::ScenarioMetrics,
    planner::Planner,
    projection::project,
    report::ReportType,
    scenario::ScenarioInput,
    status::RunwayBand,
    store::PlanStore,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    ListScenarios,
    CreateScenario {
        input: ScenarioInput,
    },
    UpdateScenario {
        id: String,
        input: ScenarioInput,
    },
    DeleteScenario {
        id: String,
    },
    DuplicateScenario {
        id: String,
    },
    Report {
        scenario_id: String,
        #[serde(default)]
        report_type: ReportType,
    },
    Insight {
        request: InsightRequest,
    },
    Analytics,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");
    let seed_demo = args.iter().any(|a| a == "--seed-demo");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    if !ipc_mode {
        println!("FinPlan — plan-runner");
        println!("  date:      {}", format::format_date(&chrono::Utc::now()));
        println!("  db:        {db}");
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let store = PlanStore::open(db)?;
    store.migrate()?;
    let planner = Planner::new(store);

    if seed_demo {
        let config = PlanConfig::load(data_dir)?;
        for preset in &config.presets {
            planner.create_scenario(preset.input())?;
        }
        log::info!("Seeded {} demo scenarios", config.presets.len());
    }

    if ipc_mode {
        run_ipc_loop(&planner)?;
    } else {
        print_summary(&planner)?;
    }

    Ok(())
}

fn run_ipc_loop(planner: &Planner) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        let response = match handle_command(planner, cmd) {
            Ok(value) => value,
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(planner: &Planner, cmd: IpcCommand) -> Result<serde_json::Value, PlanError> {
    match cmd {
        IpcCommand::ListScenarios => {
            let listed: Vec<serde_json::Value> = planner
                .list_with_badges()?
                .into_iter()
                .map(|(scenario, badge)| {
                    serde_json::json!({ "scenario": scenario, "status": badge })
                })
                .collect();
            Ok(serde_json::json!({ "scenarios": listed }))
        }
        IpcCommand::CreateScenario { input } => {
            let scenario = planner.create_scenario(input)?;
            Ok(serde_json::json!({ "scenario": scenario }))
        }
        IpcCommand::UpdateScenario { id, input } => {
            let scenario = planner.update_scenario(&id, input)?;
            Ok(serde_json::json!({ "scenario": scenario }))
        }
        IpcCommand::DeleteScenario { id } => {
            planner.delete_scenario(&id)?;
            Ok(serde_json::json!({ "deleted": id }))
        }
        IpcCommand::DuplicateScenario { id } => {
            let scenario = planner.duplicate_scenario(&id)?;
            Ok(serde_json::json!({ "scenario": scenario }))
        }
        IpcCommand::Report {
            scenario_id,
            report_type,
        } => {
            let report = planner.generate_report(&scenario_id, report_type)?;
            Ok(serde_json::json!({ "report": report }))
        }
        IpcCommand::Insight { request } => {
            let text = planner.request_insight(&request)?;
            Ok(serde_json::json!({ "result": text }))
        }
        IpcCommand::Analytics => {
            let summary = planner.usage_summary()?;
            Ok(serde_json::json!({ "analytics": summary }))
        }
        IpcCommand::Quit => unreachable!("handled by the loop"),
    }
}

fn print_summary(planner: &Planner) -> Result<()> {
    let scenarios = planner.list_with_badges()?;
    if scenarios.is_empty() {
        println!("(no scenarios — run with --seed-demo to load the presets)");
        return Ok(());
    }

    for (scenario, badge) in &scenarios {
        let metrics = ScenarioMetrics::for_scenario(scenario);
        let band = RunwayBand::for_metrics(&metrics);

        println!("=== {} [{}] ===", scenario.name, badge.label());
        println!(
            "  {}:   {}",
            terms::REVENUE,
            format::format_compact_currency(scenario.revenue)
        );
        println!(
            "  {}:   {}",
            terms::EXPENSES,
            format::format_compact_currency(scenario.expenses)
        );
        println!(
            "  {}:       {}",
            terms::GROWTH_RATE,
            format::format_percentage(scenario.growth_rate, 1)
        );
        println!(
            "  {}: {}",
            terms::BURN_RATE,
            format::format_compact_currency(scenario.burn_rate)
        );
        println!(
            "  {}:      {}",
            terms::CASH_ON_HAND,
            format::format_compact_currency(scenario.cash_on_hand)
        );
        println!(
            "  {}:       {} ({})",
            terms::RUNWAY,
            format::format_runway_card(metrics.runway),
            band.label()
        );
        println!(
            "  {}:      {}",
            terms::PROFIT_MARGIN,
            format::format_margin(metrics.profit_margin)
        );
        println!();
        println!("  month |    revenue |     profit |        cash | runway");
        for point in project(scenario) {
            let runway = point
                .runway
                .map(|months| months.to_string())
                .unwrap_or_else(|| "--".into());
            println!(
                "  {:>5} | {:>10} | {:>10} | {:>11} | {:>6}",
                point.month,
                format::format_compact_currency(point.revenue as f64),
                format::format_compact_currency(point.profit as f64),
                format::format_compact_currency(point.cash_balance as f64),
                runway,
            );
        }
        println!();
    }

    let summary = planner.usage_summary()?;
    println!("=== USAGE SUMMARY ===");
    println!("  scenarios:    {}", summary.total_scenarios);
    println!(
        "  avg turnover: {}",
        format::format_compact_currency(summary.average_revenue)
    );
    println!(
        "  avg expenses: {}",
        format::format_compact_currency(summary.average_expenses)
    );
    println!(
        "  avg runway:   {}",
        format::format_runway_card(summary.average_runway)
    );
    let mut actions: Vec<_> = summary.action_counts.iter().collect();
    actions.sort();
    for (action, count) in actions {
        println!("  {action}: {count}");
    }
    Ok(())
}
