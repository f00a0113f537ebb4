//! Chart export command

use std::path::Path;

use anyhow::{Context, Result};
use spendmind_core::{db::Database, render_monthly_chart, ChartSize};

pub fn cmd_chart(db: &Database, output: &Path, size: ChartSize) -> Result<()> {
    let monthly = db.monthly_totals()?;
    let png = render_monthly_chart(&monthly, size).context("Failed to render chart")?;

    std::fs::write(output, &png)
        .with_context(|| format!("Failed to write chart to {}", output.display()))?;

    let span = match monthly.as_slice() {
        [] => "no data".to_string(),
        [only] => only.label(),
        [first, .., last] => format!("{} to {}", first.label(), last.label()),
    };
    println!(
        "📈 Wrote {} month(s), {}, to {} ({}x{})",
        monthly.len(),
        span,
        output.display(),
        size.width,
        size.height
    );
    Ok(())
}
