//! Insight command implementation

use anyhow::Result;
use spendmind_core::{db::Database, Config, InsightEngine};

pub fn cmd_insights(db: &Database, config: &Config, json: bool) -> Result<Vec<String>> {
    let engine = InsightEngine::new(config.insights.clone());
    let messages = engine.messages(&db.monthly_totals()?, &db.category_totals()?);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "insights": messages }))?
        );
    } else {
        println!();
        println!("💡 Insights");
        println!("   ─────────────────────────────────────────────────────────────");
        for message in &messages {
            println!("   {}", message);
        }
    }

    Ok(messages)
}
