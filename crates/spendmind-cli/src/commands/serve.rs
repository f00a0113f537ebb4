//! Server command implementation

use std::path::Path;

use anyhow::Result;
use spendmind_core::{ChartSize, Config};
use spendmind_server::ServerConfig;

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    config: &Config,
    host: &str,
    port: u16,
    allowed_origins: Vec<String>,
    chart_size: ChartSize,
) -> Result<()> {
    println!("🚀 Starting SpendMind web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }

    let db = open_db(db_path)?;
    let server_config = ServerConfig {
        allowed_origins,
        chart_size,
    };

    spendmind_server::serve_with_config(db, host, port, config, server_config).await
}
