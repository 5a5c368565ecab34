use anyhow::{Context, Result};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{Surreal, engine::any::Any, opt::auth::Root};
use tracing::debug;

use crate::core::create_surreal_client;

pub const DEFAULT_HOST: &str = "http://localhost:8000";
pub const DEFAULT_NAMESPACE: &str = "db";
pub const DEFAULT_DATABASE: &str = "productdb";

/// Where the default connection points. Nothing about the seeding itself is configurable.
#[derive(Debug, Clone)]
pub struct DbCfg {
	host: String,
	ns: String,
	db: String,
	user: String,
	pass: String,
}

impl DbCfg {
	pub fn from_env(env: &DotEnv) -> Result<Self> {
		let var = |key: &str, default: &str| {
			env.get_var(key.to_string())
				.filter(|value| !value.trim().is_empty())
				.unwrap_or_else(|| default.to_string())
		};

		Ok(Self {
			host: var("PUBLIC_DATABASE_HOST", DEFAULT_HOST),
			ns: var("PUBLIC_DATABASE_NAMESPACE", DEFAULT_NAMESPACE),
			db: var("PUBLIC_DATABASE_NAME", DEFAULT_DATABASE),
			user: var("DATABASE_USER", "root"),
			pass: var("DATABASE_PASSWORD", "root"),
		})
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn ns(&self) -> &str {
		&self.ns
	}

	pub fn db(&self) -> &str {
		&self.db
	}
}

pub async fn connect(cfg: &DbCfg) -> Result<Surreal<Any>> {
	debug!(host = %cfg.host, ns = %cfg.ns, db = %cfg.db, "connecting");
	let db = create_surreal_client(&cfg.host)
		.await
		.with_context(|| format!("Failed connecting to {}", cfg.host))?;

	db.signin(Root {
		username: cfg.user.to_string(),
		password: cfg.pass.to_string(),
	})
	.await
	.context("signin failed")?;
	db.use_ns(&cfg.ns)
		.use_db(&cfg.db)
		.await
		.with_context(|| format!("use_ns/use_db failed for ns={} db={}", cfg.ns, cfg.db))?;

	Ok(db)
}
