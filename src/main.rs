use clap::{Parser, Subcommand};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{Surreal, engine::any::Any};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod audit;
mod config;
mod core;
mod dataset;
mod mask;
mod seed;
mod setup;
mod summary;

use config::{DbCfg, connect};
use dataset::Dataset;
use setup::prepare_collections;

#[derive(Parser, Debug)]
#[command(version, about = "Seed the sample product and order catalog")]
pub struct Cli {
	/// Increase output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Insert the sample catalog and print the summary (default)
	Seed,
	/// Prepare the products/orders collections without inserting
	Setup,
	/// Print counts and the first documents of each collection
	Summary,
	/// Report inconsistencies in the embedded dataset
	Check,
}

fn load_env() -> DotEnv {
	// Load .env in CWD if present, ignore missing
	DotEnv::new("")
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
		)
		.with_writer(std::io::stderr)
		.init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();
	init_tracing(args.verbose);
	let env = load_env();

	match args.command.unwrap_or(Commands::Seed) {
		Commands::Seed => {
			let db = connect_from_env(&env).await?;
			let report = seed::seed(&db).await?;
			info!(
				products_inserted = report.products_inserted,
				orders_inserted = report.orders_inserted,
				products_total = report.summary.products,
				orders_total = report.summary.orders,
				"seed completed"
			);
		}
		Commands::Setup => {
			let db = connect_from_env(&env).await?;
			prepare_collections(&db).await?;
			println!("collections ready");
		}
		Commands::Summary => {
			let db = connect_from_env(&env).await?;
			let summary = summary::collect(&db).await?;
			summary.print(&mut std::io::stdout().lock())?;
		}
		Commands::Check => {
			let dataset = Dataset::embedded()?;
			audit::print_findings(&dataset.audit());
		}
	}

	Ok(())
}

async fn connect_from_env(env: &DotEnv) -> anyhow::Result<Surreal<Any>> {
	let cfg = DbCfg::from_env(env)?;
	let db = connect(&cfg).await?;
	info!(host = cfg.host(), ns = cfg.ns(), db = cfg.db(), "connected");
	Ok(db)
}
