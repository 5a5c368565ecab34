use std::collections::BTreeSet;
use std::fmt;

use crate::dataset::Dataset;

const TOTAL_TOLERANCE: f64 = 0.005;

/// A latent inconsistency in a dataset. Reported, never enforced: the seeder
/// writes the data as-is either way.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
	DuplicateSku {
		sku: String,
	},
	DanglingProductRef {
		order_number: String,
		product_ref: String,
	},
	TotalMismatch {
		order_number: String,
		stored: f64,
		computed: f64,
	},
}

impl fmt::Display for Finding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateSku { sku } => write!(f, "duplicate sku {sku}"),
			Self::DanglingProductRef {
				order_number,
				product_ref,
			} => write!(
				f,
				"order {order_number} references unknown product {product_ref}"
			),
			Self::TotalMismatch {
				order_number,
				stored,
				computed,
			} => write!(
				f,
				"order {order_number} stores total {stored:.2} but items sum to {computed:.2}"
			),
		}
	}
}

impl Dataset {
	pub fn audit(&self) -> Vec<Finding> {
		let mut findings = Vec::new();

		let mut skus = BTreeSet::new();
		for product in &self.products {
			if !skus.insert(product.sku.as_str()) {
				findings.push(Finding::DuplicateSku {
					sku: product.sku.clone(),
				});
			}
		}

		for order in &self.orders {
			for item in &order.items {
				if !skus.contains(item.product_ref.as_str()) {
					findings.push(Finding::DanglingProductRef {
						order_number: order.order_number.clone(),
						product_ref: item.product_ref.clone(),
					});
				}
			}

			let computed: f64 = order
				.items
				.iter()
				.map(|item| f64::from(item.quantity) * item.unit_price)
				.sum();
			if (order.total - computed).abs() > TOTAL_TOLERANCE {
				findings.push(Finding::TotalMismatch {
					order_number: order.order_number.clone(),
					stored: order.total,
					computed,
				});
			}
		}

		findings
	}
}

pub fn print_findings(findings: &[Finding]) {
	if findings.is_empty() {
		println!("dataset is consistent");
		return;
	}
	println!("{} finding(s):", findings.len());
	for finding in findings {
		println!("  - {finding}");
	}
}
