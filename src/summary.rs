use std::io::Write;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use surrealdb::{Surreal, engine::any::Any};

use crate::setup::{ORDERS, PRODUCTS, prepare_collections};

const SAMPLE_SIZE: usize = 3;

/// Live state of both collections right after (or independent of) a seeding run.
#[derive(Debug, Clone)]
pub struct Summary {
	pub products: u64,
	pub orders: u64,
	pub first_products: Vec<Value>,
	pub first_orders: Vec<Value>,
}

impl Summary {
	pub fn print(&self, out: &mut impl Write) -> Result<()> {
		writeln!(out, "\n📊 Resumen de datos insertados:")?;
		writeln!(out, "Total de productos: {}", self.products)?;
		writeln!(out, "Total de órdenes: {}", self.orders)?;

		writeln!(out, "\n📦 Primeros 3 productos:")?;
		print_documents(out, &self.first_products)?;

		writeln!(out, "\n📋 Primeras 3 órdenes:")?;
		print_documents(out, &self.first_orders)?;
		Ok(())
	}
}

fn print_documents(out: &mut impl Write, docs: &[Value]) -> Result<()> {
	for doc in docs {
		let pretty = serde_json::to_string_pretty(doc).context("rendering document")?;
		writeln!(out, "{pretty}")?;
	}
	Ok(())
}

/// Both collections are prepared first so a fresh database reports zeros.
pub async fn collect(db: &Surreal<Any>) -> Result<Summary> {
	prepare_collections(db).await?;
	Ok(Summary {
		products: count(db, PRODUCTS).await?,
		orders: count(db, ORDERS).await?,
		first_products: first(db, PRODUCTS, SAMPLE_SIZE).await?,
		first_orders: first(db, ORDERS, SAMPLE_SIZE).await?,
	})
}

pub async fn count(db: &Surreal<Any>, table: &str) -> Result<u64> {
	let mut resp = db
		.query(format!("SELECT count() FROM {table} GROUP ALL;"))
		.await
		.with_context(|| format!("counting {table}"))?;
	let row: Option<Value> = resp.take(0)?;
	count_from_row(table, row)
}

/// No row means an empty table. A row without an integer `count` is a broken query.
fn count_from_row(table: &str, row: Option<Value>) -> Result<u64> {
	match row {
		None => Ok(0),
		Some(row) => row
			.get("count")
			.and_then(|v| v.as_u64())
			.ok_or_else(|| anyhow!("unexpected count row for {table}: {row}")),
	}
}

/// First `limit` documents in insertion order. Record ids are prefixed with the
/// run id and the dataset position, so id order is insertion order.
pub async fn first(db: &Surreal<Any>, table: &str, limit: usize) -> Result<Vec<Value>> {
	let mut resp = db
		.query(format!("SELECT * FROM {table} ORDER BY id LIMIT {limit};"))
		.await
		.with_context(|| format!("reading first {limit} of {table}"))?;
	let rows: Vec<Value> = resp.take(0)?;
	Ok(rows)
}
