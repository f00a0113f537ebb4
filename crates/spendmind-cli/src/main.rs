//! SpendMind CLI - Expense tracker with spending insights
//!
//! Usage:
//!   spendmind init                      Initialize database
//!   spendmind seed --count 200          Generate demo data
//!   spendmind expenses add 12.50 -c Food
//!   spendmind insights                  Print spending insights
//!   spendmind serve --port 8000         Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use spendmind_core::models::DEFAULT_EXPENSE_LIMIT;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Serve {
            port,
            host,
            allowed_origins,
            chart_width,
            chart_height,
        } => {
            commands::cmd_serve(
                &cli.db,
                &config,
                &host,
                port,
                allowed_origins,
                spendmind_core::ChartSize::new(chart_width, chart_height),
            )
            .await
        }
        Commands::Seed { count, from, to } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_seed(&db, count, &from, &to)?;
            Ok(())
        }
        Commands::Categories { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(CategoriesAction::List) => commands::cmd_categories_list(&db),
                Some(CategoriesAction::Add { name, essential }) => {
                    commands::cmd_categories_add(&db, &name, essential)?;
                    Ok(())
                }
            }
        }
        Commands::Expenses { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => {
                    commands::cmd_expenses_list(&db, None, None, None, DEFAULT_EXPENSE_LIMIT)
                }
                Some(ExpensesAction::List {
                    from,
                    to,
                    category,
                    limit,
                }) => commands::cmd_expenses_list(
                    &db,
                    from.as_deref(),
                    to.as_deref(),
                    category.as_deref(),
                    limit,
                ),
                Some(ExpensesAction::Add {
                    amount,
                    category,
                    date,
                    description,
                }) => {
                    commands::cmd_expenses_add(
                        &db,
                        &amount,
                        &category,
                        date.as_deref(),
                        description.as_deref(),
                    )?;
                    Ok(())
                }
            }
        }
        Commands::Report { report_type } => {
            let db = commands::open_db(&cli.db)?;
            match report_type {
                ReportType::Monthly { json } => commands::cmd_report_monthly(&db, json),
                ReportType::ByCategory { json } => commands::cmd_report_by_category(&db, json),
                ReportType::Daily { limit, json } => {
                    let limit = limit.unwrap_or(config.reports.top_days);
                    commands::cmd_report_daily(&db, limit, json)
                }
            }
        }
        Commands::Insights { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_insights(&db, &config, json)?;
            Ok(())
        }
        Commands::Chart {
            output,
            width,
            height,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_chart(
                &db,
                &output,
                spendmind_core::ChartSize::new(width, height),
            )
        }
    }
}
