use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;
use surrealdb::{Surreal, engine::any::Any};
use tracing::{debug, info};

use crate::core::unique_run_id;
use crate::dataset::Dataset;
use crate::mask::mask_customer_id;
use crate::setup::{ORDERS, PRODUCTS, prepare_collections};
use crate::summary::{self, Summary};

const PRODUCTS_NOTICE: &str = "✅ Productos insertados exitosamente";
const ORDERS_NOTICE: &str = "✅ Órdenes insertadas exitosamente";

#[derive(Debug, Clone)]
pub struct SeedReport {
	pub products_inserted: usize,
	pub orders_inserted: usize,
	pub summary: Summary,
}

/// Seeds the embedded sample catalog.
pub async fn seed(db: &Surreal<Any>) -> Result<SeedReport> {
	let dataset = Dataset::embedded()?;
	seed_dataset(db, &dataset).await
}

pub async fn seed_dataset(db: &Surreal<Any>, dataset: &Dataset) -> Result<SeedReport> {
	seed_dataset_to(db, dataset, &mut io::stdout()).await
}

/// Appends every record of `dataset`, then writes the summary to `out`. Nothing
/// is deduplicated or upserted: running twice doubles both collections. A failed
/// insert aborts the run and leaves earlier inserts in place.
pub async fn seed_dataset_to(
	db: &Surreal<Any>,
	dataset: &Dataset,
	out: &mut impl Write,
) -> Result<SeedReport> {
	let run_id = unique_run_id();
	info!(run_id = %run_id, "seeding sample catalog");

	prepare_collections(db).await?;

	let products = to_documents(&dataset.products, &run_id)?;
	let products_inserted = bulk_insert(db, PRODUCTS, products)
		.await
		.context("inserting products")?;
	writeln!(out, "{PRODUCTS_NOTICE}")?;

	for order in &dataset.orders {
		debug!(
			order = %order.order_number,
			customer = %mask_customer_id(&order.customer_id),
			items = order.items.len(),
			"queued order"
		);
	}
	let orders = to_documents(&dataset.orders, &run_id)?;
	let orders_inserted = bulk_insert(db, ORDERS, orders)
		.await
		.context("inserting orders")?;
	writeln!(out, "{ORDERS_NOTICE}")?;

	let summary = summary::collect(db).await?;
	summary.print(out)?;

	Ok(SeedReport {
		products_inserted,
		orders_inserted,
		summary,
	})
}

async fn bulk_insert(db: &Surreal<Any>, table: &str, rows: Vec<Value>) -> Result<usize> {
	if rows.is_empty() {
		return Ok(0);
	}
	let mut resp = db
		.query(format!("INSERT INTO {table} $rows;"))
		.bind(("rows", Value::Array(rows)))
		.await?
		.check()?;
	let inserted: Vec<Value> = resp.take(0)?;
	debug!(table, inserted = inserted.len(), "bulk insert finished");
	Ok(inserted.len())
}

/// Serializes records and gives each one a record id `<run_id>_<position>`.
fn to_documents<T: Serialize>(records: &[T], run_id: &str) -> Result<Vec<Value>> {
	records
		.iter()
		.enumerate()
		.map(|(position, record)| {
			let mut doc = serde_json::to_value(record)?;
			let fields = doc
				.as_object_mut()
				.ok_or_else(|| anyhow!("record {position} did not serialize to an object"))?;
			fields.insert(
				"id".to_string(),
				Value::String(format!("{run_id}_{position:04}")),
			);
			Ok(doc)
		})
		.collect()
}
