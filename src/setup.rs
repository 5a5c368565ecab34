use anyhow::{Context, Result};
use surrealdb::{Surreal, engine::any::Any};

use crate::core::exec_surql;

pub const PRODUCTS: &str = "products";
pub const ORDERS: &str = "orders";

/// Coerces `orders.date` to a native datetime on write. Every other field stays
/// schemaless and unchecked.
const COLLECTIONS_SETUP: &str = r#"
DEFINE TABLE IF NOT EXISTS products SCHEMALESS;

DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;

DEFINE FIELD OVERWRITE date ON orders
	VALUE <datetime> $value;
"#;

pub async fn prepare_collections(db: &Surreal<Any>) -> Result<()> {
	exec_surql(db, COLLECTIONS_SETUP)
		.await
		.context("preparing products/orders collections")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::memory_db;

	#[tokio::test]
	async fn preparing_twice_is_harmless() {
		let db = memory_db().await;
		prepare_collections(&db).await.expect("first setup");
		prepare_collections(&db).await.expect("second setup");
	}

	#[tokio::test]
	async fn order_dates_become_datetimes() {
		let db = memory_db().await;
		prepare_collections(&db).await.expect("setup");
		exec_surql(
			&db,
			"CREATE orders CONTENT { orderNumber: 'ORD-T', date: '2024-12-20T10:30:00Z' };",
		)
		.await
		.expect("create order");

		let mut resp = db
			.query(r#"SELECT count() FROM orders WHERE date = d"2024-12-20T10:30:00Z" GROUP ALL;"#)
			.await
			.expect("query");
		let row: Option<serde_json::Value> = resp.take(0).expect("take");
		let count = row
			.as_ref()
			.and_then(|v| v.get("count"))
			.and_then(|v| v.as_u64());
		assert_eq!(count, Some(1));
	}
}
