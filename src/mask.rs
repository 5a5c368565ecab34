const MASK: &str = "***";

/// Masks a national id for log output: `12345678` becomes `12***78`.
/// Anything that is not eight characters long is masked entirely.
pub fn mask_customer_id(id: &str) -> String {
	let chars: Vec<char> = id.chars().collect();
	if chars.len() != 8 {
		return MASK.to_string();
	}
	let head: String = chars[..2].iter().collect();
	let tail: String = chars[6..].iter().collect();
	format!("{head}{MASK}{tail}")
}

#[cfg(test)]
mod tests {
	use super::mask_customer_id;

	#[test]
	fn keeps_edges_of_national_id() {
		assert_eq!(mask_customer_id("12345678"), "12***78");
		assert_eq!(mask_customer_id("87654321"), "87***21");
	}

	#[test]
	fn masks_unexpected_lengths_entirely() {
		assert_eq!(mask_customer_id(""), "***");
		assert_eq!(mask_customer_id("1234"), "***");
		assert_eq!(mask_customer_id("12345678901"), "***");
	}
}
