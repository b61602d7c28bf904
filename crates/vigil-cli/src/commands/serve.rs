//! Server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3000", env = "VIGIL_PORT")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1", env = "VIGIL_HOST")]
    pub host: String,

    /// Path to the SQLite database file
    #[arg(long, default_value = "vigil.db", env = "VIGIL_DB")]
    pub db: PathBuf,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let pool = Arc::new(vigil_db::init_pool(&args.db)?);
    info!(db = %args.db.display(), "database ready");

    println!();
    println!("  {} {}", "Vigil".cyan().bold(), "Incident Reports".bold());
    println!();
    println!("  {}        http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}  ws://{}:{}/ws", "WebSocket".green(), args.host, args.port);
    println!("  {}   {}", "Database".green(), args.db.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    vigil_web::run_server(pool, &args.host, args.port).await?;

    Ok(())
}
