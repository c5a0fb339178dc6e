mod config;
mod generate_cmd;
mod serve_cmd;
mod tasks_cmd;
#[cfg(test)]
mod test_util;

use clap::{Parser, Subcommand};

use planner_core::gemini::GeminiClient;
use planner_core::plan::PlanService;
use planner_db::pool;

use config::PlannerConfig;

#[derive(Parser)]
#[command(name = "planner", about = "Goal-to-task planner backed by the Gemini API")]
struct Cli {
    /// Database URL (overrides PLANNER_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a planner config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/planner")]
        db_url: String,
        /// Gemini API key to store in the config file
        #[arg(long)]
        api_key: String,
        /// Gemini endpoint URL override
        #[arg(long)]
        api_url: Option<String>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Initialize the planner database (create + migrate)
    DbInit,
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8081)]
        port: u16,
    },
    /// Decompose a goal into tasks and save them
    Generate {
        /// The goal to decompose
        goal: String,
    },
    /// List persisted tasks
    Tasks {
        /// Only show tasks generated for this goal
        #[arg(long)]
        goal: Option<String>,
    },
}

/// Execute the `planner init` command: write config file.
fn cmd_init(db_url: &str, api_key: &str, api_url: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        gemini: config::GeminiSection {
            api_key: api_key.to_string(),
            api_url: api_url.map(str::to_owned),
            prompt_template: None,
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!();
    println!("Next: run `planner db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `planner db-init` command: create database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let db_config = config::resolve_db_config(cli_db_url);

    println!("Initializing planner database...");

    // 1. Create the database if it does not exist.
    pool::ensure_database_exists(&db_config).await?;

    // 2. Connect to the target database.
    let db_pool = pool::create_pool(&db_config).await?;

    // 3. Run migrations.
    pool::run_migrations(&db_pool).await?;

    // 4. Print success with table counts.
    let counts = pool::table_counts(&db_pool).await?;
    println!("Database ready. Tables:");
    for (table, count) in &counts {
        println!("  {table}: {count} rows");
    }

    // 5. Clean shutdown.
    db_pool.close().await;

    println!("planner db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            db_url,
            api_key,
            api_url,
            force,
        } => {
            cmd_init(&db_url, &api_key, api_url.as_deref(), force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Serve { bind, port } => {
            let resolved = PlannerConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let service = PlanService::new(GeminiClient::new(resolved.gemini), resolved.template);
            let result = serve_cmd::run_serve(db_pool.clone(), service, &bind, port).await;
            db_pool.close().await;
            result?;
        }
        Commands::Generate { goal } => {
            let resolved = PlannerConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let service = PlanService::new(GeminiClient::new(resolved.gemini), resolved.template);
            let result = generate_cmd::run_generate(&db_pool, &service, &goal).await;
            db_pool.close().await;
            result?;
        }
        Commands::Tasks { goal } => {
            let db_config = config::resolve_db_config(cli.database_url.as_deref());
            let db_pool = pool::create_pool(&db_config).await?;
            let result = tasks_cmd::run_tasks(&db_pool, goal.as_deref()).await;
            db_pool.close().await;
            result?;
        }
    }

    Ok(())
}
