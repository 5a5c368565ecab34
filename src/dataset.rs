use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Sample catalog compiled into the binary.
pub const EMBEDDED_DATASET: &str = include_str!("../database/seed.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
	pub sku: String,
	pub stock: u32,
	pub name: String,
	pub category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderItem {
	/// Expected to match a `Product::sku`, nothing checks it.
	pub product_ref: String,
	pub product_name: String,
	pub quantity: u32,
	pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Order {
	pub order_number: String,
	pub customer_id: String,
	pub items: Vec<OrderItem>,
	#[serde(with = "time::serde::rfc3339")]
	pub date: OffsetDateTime,
	pub status: OrderStatus,
	/// Stored as written. Not derived from `items`.
	pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
	Pending,
	InProgress,
	Delivered,
	Cancelled,
}

impl OrderStatus {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Pending => "PENDING",
			Self::InProgress => "IN_PROGRESS",
			Self::Delivered => "DELIVERED",
			Self::Cancelled => "CANCELLED",
		}
	}
}

/// The records written by one seeding run, in insertion order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
	#[serde(default)]
	pub products: Vec<Product>,
	#[serde(default)]
	pub orders: Vec<Order>,
}

impl Dataset {
	pub fn embedded() -> Result<Self> {
		Self::from_toml(EMBEDDED_DATASET).context("parsing embedded database/seed.toml")
	}

	pub fn from_toml(raw: &str) -> Result<Self> {
		let dataset: Dataset = toml::from_str(raw).context("parsing dataset toml")?;
		Ok(dataset)
	}
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	#[test]
	fn embedded_dataset_has_full_catalog() {
		let dataset = Dataset::embedded().expect("embedded dataset should parse");
		assert_eq!(dataset.products.len(), 10);
		assert_eq!(dataset.orders.len(), 8);

		let first = &dataset.products[0];
		assert_eq!(first.sku, "LAPTOP-HP-001");
		assert_eq!(first.stock, 15);
		assert_eq!(first.name, "Laptop HP Pavilion 15");
		assert_eq!(first.category, "Computadoras");
		assert_eq!(dataset.products[9].sku, "CHAIR-SECR-010");
	}

	#[test]
	fn first_order_keeps_literal_values() {
		let dataset = Dataset::embedded().expect("embedded dataset should parse");
		let order = &dataset.orders[0];
		assert_eq!(order.order_number, "ORD-2024-001");
		assert_eq!(order.customer_id, "12345678");
		assert_eq!(order.date, datetime!(2024-12-20 10:30 UTC));
		assert_eq!(order.status, OrderStatus::Delivered);
		assert_eq!(order.total, 999.98);
		assert_eq!(order.items.len(), 2);
		assert_eq!(order.items[0].product_ref, "LAPTOP-HP-001");
		assert_eq!(order.items[1].unit_price, 99.99);
	}

	#[test]
	fn statuses_cover_every_label() {
		let dataset = Dataset::embedded().expect("embedded dataset should parse");
		let labels: Vec<&str> = dataset.orders.iter().map(|o| o.status.label()).collect();
		assert_eq!(
			labels,
			vec![
				"DELIVERED",
				"IN_PROGRESS",
				"PENDING",
				"IN_PROGRESS",
				"DELIVERED",
				"PENDING",
				"IN_PROGRESS",
				"CANCELLED"
			]
		);
	}

	#[test]
	fn order_serializes_with_wire_names() {
		let dataset = Dataset::embedded().expect("embedded dataset should parse");
		let doc = serde_json::to_value(&dataset.orders[1]).expect("serialization should work");
		assert_eq!(doc["orderNumber"], "ORD-2024-002");
		assert_eq!(doc["customerId"], "87654321");
		assert_eq!(doc["status"], "IN_PROGRESS");
		assert_eq!(doc["date"], "2024-12-21T14:15:00Z");
		assert_eq!(doc["items"][0]["productRef"], "TECLADO-COR-003");
		assert_eq!(doc["items"][0]["unitPrice"], 149.99);
	}

	#[test]
	fn unknown_status_is_rejected() {
		let raw = r#"
[[orders]]
orderNumber = "ORD-X"
customerId = "00000000"
items = []
date = "2024-01-01T00:00:00Z"
status = "SHIPPED"
total = 0.0
"#;
		assert!(Dataset::from_toml(raw).is_err());
	}
}
