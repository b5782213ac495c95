//! CLI administration tool for tinylink.
//!
//! Provides commands for managing links, viewing statistics, and performing
//! database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new link
//! cargo run --bin admin -- link create --target-url "https://example.com/docs"
//!
//! # List active links
//! cargo run --bin admin -- link list
//!
//! # Delete a link (retires the code permanently)
//! cargo run --bin admin -- link delete abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Link Management**: Create, list, and delete short links
//! - **Statistics**: View link and click counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Destination URL (prompted for if not provided)
        #[arg(short, long)]
        target_url: Option<String>,

        /// Custom code (optional, auto-generated if not provided)
        #[arg(short, long)]
        code: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List active links
    List,

    /// Delete a link by code
    Delete {
        /// Code to delete
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repository);

    match action {
        LinkAction::Create {
            target_url,
            code,
            yes,
        } => {
            create_link(&service, target_url, code, yes).await?;
        }
        LinkAction::List => {
            list_links(&service).await?;
        }
        LinkAction::Delete { code } => {
            delete_link(&service, code).await?;
        }
    }

    Ok(())
}

/// Creates a new short link with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for destination URL (or use provided)
/// 2. Show link details, including the custom code if one was given
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Create through the service (same validation as the HTTP API)
/// 5. Display the resulting code
async fn create_link(
    service: &LinkService,
    target_url: Option<String>,
    code: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    // Get destination URL
    let target_url = match target_url {
        Some(url) => url,
        None => Input::new()
            .with_prompt("Destination URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    // Show link details
    println!();
    println!("{}", "Link details:".bright_white().bold());
    println!("  Target: {}", target_url.cyan());
    match &code {
        Some(code) => println!("  Code:   {}", code.bright_yellow().bold()),
        None => println!("  Code:   {}", "(auto-generated)".bright_black()),
    }
    println!();

    // Confirm
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_link(target_url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e.message()))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Code:   {}", link.code.bright_yellow().bold());
    println!("  Target: {}", link.target_url.cyan());
    println!();
    println!("{}", "Try it:".bright_white());
    println!(
        "  curl -i http://localhost:3000/{}",
        link.code.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists active links in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID  Code       Target                                    Clicks   Created
///   ─────────────────────────────────────────────────────────────────────────────
///   2   xK3f9Qz    https://example.com/docs                  42       2026-08-20 10:30
///   1   launch24   https://example.com/launch                7        2026-08-19 14:02
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e.message()))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<10} {:<42} {:<8} {:<16}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Target".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(84).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<10} {:<42} {:<8} {}",
            link.id.to_string().bright_black(),
            link.code.cyan(),
            truncate(&link.target_url, 40),
            link.click_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link by code with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - Deleted codes are retired permanently and cannot be reused
async fn delete_link(service: &LinkService, code: String) -> Result<()> {
    println!("{}", "🗑 Delete Short Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(&code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message()))?;

    if link.deleted {
        println!("{}", "⚠️  This link is already deleted".yellow());
        return Ok(());
    }

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url.bright_black());
    println!("  Clicks: {}", link.click_count.to_string().bright_black());
    println!();
    println!(
        "{}",
        "⚠️  The code is retired permanently and cannot be reused.".yellow()
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this link?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    service
        .delete_link(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e.message()))?;

    println!();
    println!("{}", "✅ Link deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links (including deleted)
/// - Number of active links
/// - Total click count across all links
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let active_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE deleted = FALSE")
            .fetch_one(pool)
            .await?;

    let clicks_count: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0) FROM links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:        {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Active links: {}",
        active_count.to_string().bright_green().bold()
    );
    println!(
        "  Total clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Shortens long URLs for table display.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
