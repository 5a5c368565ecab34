use surrealdb::{
	Surreal,
	engine::any::{Any, connect},
	opt::{Config, capabilities::Capabilities},
};
use time::OffsetDateTime;

pub async fn create_surreal_client(address: &str) -> Result<Surreal<Any>, surrealdb::Error> {
	let config =
		Config::new().capabilities(Capabilities::all().with_all_experimental_features_allowed());

	connect((address, config)).await
}

pub async fn exec_surql(db: &Surreal<Any>, sql: &str) -> anyhow::Result<()> {
	db.query(sql).await?.check()?;
	Ok(())
}

/// Nanosecond UTC timestamp, fixed width, so ids built from it sort by time.
pub fn unique_run_id() -> String {
	let ts = OffsetDateTime::now_utc().unix_timestamp_nanos();
	format!("{ts:020}")
}

#[cfg(test)]
pub async fn memory_db() -> Surreal<Any> {
	let db = create_surreal_client("mem://")
		.await
		.expect("in-memory engine should start");
	db.use_ns("orderseed")
		.use_db("productdb")
		.await
		.expect("selecting namespace and database should work");
	db
}
