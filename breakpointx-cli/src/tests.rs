use breakpointx::{RawValue, Selector};

use crate::{CommandArgs, build_table, parse_breakpoint_spec, parse_selector};

fn args(breakpoints: &[&str], break_points: Option<Vec<u32>>) -> CommandArgs {
	CommandArgs {
		breakpoints: breakpoints.iter().map(|s| s.to_string()).collect(),
		break_points,
	}
}

#[cfg(test)]
mod parse_breakpoint_spec_tests {
	use super::*;

	#[test]
	fn test_parse_simple_pair() {
		let (alias, value) = parse_breakpoint_spec("tablet=768").unwrap();
		assert_eq!(alias, "tablet");
		assert_eq!(value, RawValue::from("768"));
	}

	#[test]
	fn test_parse_pair_with_unit_suffix() {
		let (alias, value) = parse_breakpoint_spec("desktop=1024px").unwrap();
		assert_eq!(alias, "desktop");
		assert_eq!(value.coerce_to_pixels(), 1024);
	}

	#[test]
	fn test_parse_trims_whitespace() {
		let (alias, value) = parse_breakpoint_spec("  mobile = 0 ").unwrap();
		assert_eq!(alias, "mobile");
		assert_eq!(value.coerce_to_pixels(), 0);
	}

	#[test]
	fn test_parse_empty_spec() {
		let result = parse_breakpoint_spec("");
		assert!(result.is_err());
		assert!(result.unwrap_err().to_string().contains("cannot be empty"));
	}

	#[test]
	fn test_parse_missing_separator() {
		let result = parse_breakpoint_spec("tablet");
		assert!(result.is_err());
		assert!(
			result
				.unwrap_err()
				.to_string()
				.contains("expected alias=px")
		);
	}

	#[test]
	fn test_parse_empty_alias() {
		let result = parse_breakpoint_spec("=768");
		assert!(result.is_err());
		assert!(
			result
				.unwrap_err()
				.to_string()
				.contains("alias cannot be empty")
		);
	}
}

#[cfg(test)]
mod parse_selector_tests {
	use super::*;

	#[test]
	fn test_parse_first_and_last() {
		assert_eq!(parse_selector("first").unwrap(), Selector::First);
		assert_eq!(parse_selector("last").unwrap(), Selector::Last);
	}

	#[test]
	fn test_parse_numeric_width() {
		assert_eq!(parse_selector("800").unwrap(), Selector::Width(800));
	}

	#[test]
	fn test_parse_garbage_width() {
		let result = parse_selector("wide");
		assert!(result.is_err());
		assert!(
			result
				.unwrap_err()
				.to_string()
				.contains("invalid width selector")
		);
	}
}

#[cfg(test)]
mod build_table_tests {
	use super::*;

	#[test]
	fn test_named_pairs_build_an_alias_keyed_table() {
		let table = build_table(&args(&["mobile=0", "tablet=768", "desktop=1024"], None)).unwrap();
		assert_eq!(table.aliases(), &["mobile", "tablet", "desktop"]);
		assert_eq!(table.query("desktop"), Some("min-width: 1024px".to_string()));
	}

	#[test]
	fn test_bare_thresholds_build_a_legacy_table() {
		let table = build_table(&args(&[], Some(vec![0, 768, 1024]))).unwrap();
		assert_eq!(table.aliases(), &[
			"max-width: 767px",
			"max-width: 1023px",
			"min-width: 1024px",
		]);
	}

	#[test]
	fn test_no_input_is_an_error() {
		let result = build_table(&args(&[], None));
		assert!(result.is_err());
		assert!(
			result
				.unwrap_err()
				.to_string()
				.contains("no breakpoints supplied")
		);
	}

	#[test]
	fn test_invalid_pair_propagates_the_parse_error() {
		assert!(build_table(&args(&["mobile"], None)).is_err());
	}
}
