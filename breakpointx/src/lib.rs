use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw threshold value as supplied by a caller.
///
/// Callers hand thresholds over in whatever shape their configuration
/// produced: already-integral pixels, fractional numbers, or text such as
/// "768px". [`RawValue::coerce_to_pixels`] folds all of them into integer
/// pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum RawValue {
	Pixels(u32),
	Fractional(f64),
	Text(String),
}

impl RawValue {
	/// Coerces a raw threshold to integer pixels.
	///
	/// Fractional values truncate toward zero. Text parses a leading
	/// unsigned integer prefix ("768px" -> 768, "76.9" -> 76). Anything
	/// without such a prefix, negatives included, coerces to 0; thresholds
	/// are non-negative.
	pub fn coerce_to_pixels(&self) -> u32 {
		match self {
			RawValue::Pixels(pixels) => *pixels,
			// The cast truncates toward zero and saturates; NaN and
			// negative values land on 0.
			RawValue::Fractional(value) => *value as u32,
			RawValue::Text(text) => leading_pixels(text),
		}
	}
}

impl From<u32> for RawValue {
	fn from(pixels: u32) -> Self {
		RawValue::Pixels(pixels)
	}
}

impl From<f64> for RawValue {
	fn from(value: f64) -> Self {
		RawValue::Fractional(value)
	}
}

impl From<&str> for RawValue {
	fn from(text: &str) -> Self {
		RawValue::Text(text.to_string())
	}
}

impl From<String> for RawValue {
	fn from(text: String) -> Self {
		RawValue::Text(text)
	}
}

/// Parses the leading unsigned integer prefix of `text`, saturating on
/// overflow. No prefix means 0.
fn leading_pixels(text: &str) -> u32 {
	let trimmed = text.trim_start();
	let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

	let mut value: u32 = 0;
	for ch in unsigned.chars() {
		match ch.to_digit(10) {
			Some(digit) => value = value.saturating_mul(10).saturating_add(digit),
			None => break,
		}
	}
	value
}

/// Construction input for a [`BreakpointTable`].
///
/// Mirrors the two input shapes callers use: a mapping from alias to
/// threshold, or the legacy bare ordered sequence whose entries get
/// synthetic media-query aliases during construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum RawBreakpoints {
	/// Alias-keyed thresholds. Insertion order breaks threshold ties.
	ByAlias(Vec<(String, RawValue)>),
	/// Bare thresholds with positional aliases.
	Legacy(Vec<RawValue>),
}

impl RawBreakpoints {
	/// Builds the alias-keyed form from (alias, threshold) pairs.
	pub fn from_pairs<A, V>(pairs: impl IntoIterator<Item = (A, V)>) -> Self
	where
		A: Into<String>,
		V: Into<RawValue>,
	{
		RawBreakpoints::ByAlias(
			pairs
				.into_iter()
				.map(|(alias, value)| (alias.into(), value.into()))
				.collect(),
		)
	}

	/// Builds the legacy ordered-sequence form from bare thresholds.
	pub fn from_sequence<V: Into<RawValue>>(values: impl IntoIterator<Item = V>) -> Self {
		RawBreakpoints::Legacy(values.into_iter().map(Into::into).collect())
	}
}

/// The resolved pixel interval owned by one alias.
///
/// `max_width` sits one pixel short of the next alias's threshold; the
/// largest alias is unbounded above and carries `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
	pub min_width: u32,
	pub max_width: Option<u32>,
}

impl Range {
	pub const fn new(min_width: u32, max_width: Option<u32>) -> Self {
		Self {
			min_width,
			max_width,
		}
	}

	/// Checks whether a width falls inside this range.
	pub const fn contains(&self, width: u32) -> bool {
		width >= self.min_width
			&& match self.max_width {
				Some(max_width) => width <= max_width,
				None => true,
			}
	}

	pub const fn is_unbounded(&self) -> bool {
		self.max_width.is_none()
	}
}

impl fmt::Display for Range {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.max_width {
			Some(max_width) => write!(f, "{}..={}", self.min_width, max_width),
			None => write!(f, "{}..", self.min_width),
		}
	}
}

/// Selects an alias out of a table: by position, or by pixel width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
	First,
	Last,
	Width(u32),
}

impl From<u32> for Selector {
	fn from(width: u32) -> Self {
		Selector::Width(width)
	}
}

#[derive(Clone, Copy)]
enum Directive {
	Min,
	Max,
}

impl Directive {
	fn keyword(self) -> &'static str {
		match self {
			Directive::Min => "min",
			Directive::Max => "max",
		}
	}
}

fn width_query(directive: Directive, value: u32) -> String {
	format!("{}-width: {}px", directive.keyword(), value)
}

/// Sorted, named, non-overlapping pixel ranges resolved from raw
/// breakpoints, with media-query rendering per alias.
///
/// The table is a value object: built once by [`BreakpointTable::new`] and
/// immutable afterwards. To change breakpoints, build a new table. Every
/// query answers with an absence value for unknown aliases or an empty
/// table; nothing here panics or errors.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointTable {
	settings: RawBreakpoints,
	aliases: Vec<String>,
	ranges: HashMap<String, Range>,
}

impl BreakpointTable {
	pub fn new(raw: RawBreakpoints) -> Self {
		let pairs = match &raw {
			RawBreakpoints::ByAlias(pairs) => pairs
				.iter()
				.map(|(alias, value)| (alias.clone(), value.coerce_to_pixels()))
				.collect(),
			RawBreakpoints::Legacy(values) => synthetic_aliases(values),
		};

		let mut sortable = collapse_duplicates(pairs);
		// Ordering must be stable: aliases with equal thresholds keep
		// their input order. slice::sort_by guarantees this.
		sortable.sort_by(|a, b| a.1.cmp(&b.1));

		let mut aliases = Vec::with_capacity(sortable.len());
		let mut ranges = HashMap::with_capacity(sortable.len());
		for (i, (alias, min_width)) in sortable.iter().enumerate() {
			let max_width = sortable
				.get(i + 1)
				.map(|(_, next)| next.saturating_sub(1));
			aliases.push(alias.clone());
			ranges.insert(alias.clone(), Range::new(*min_width, max_width));
		}

		Self {
			settings: raw,
			aliases,
			ranges,
		}
	}

	/// The raw settings the table was built from.
	pub fn settings(&self) -> &RawBreakpoints {
		&self.settings
	}

	/// Alias names sorted ascending by threshold.
	pub fn aliases(&self) -> &[String] {
		&self.aliases
	}

	pub fn len(&self) -> usize {
		self.aliases.len()
	}

	pub fn is_empty(&self) -> bool {
		self.aliases.is_empty()
	}

	/// The resolved range for `alias`, or `None` for an unknown alias.
	pub fn value(&self, alias: &str) -> Option<Range> {
		self.ranges.get(alias).copied()
	}

	/// Resolves a selector to an alias name.
	///
	/// `First` and `Last` pick the ends of the sorted alias list. A width
	/// walks the list in ascending order and returns the alias whose range
	/// owns the width; widths beyond the largest threshold resolve to the
	/// last alias. A width below the smallest threshold still resolves to
	/// the first alias: the smallest alias acts as a floor. Deliberate,
	/// not a gap.
	pub fn alias(&self, selector: impl Into<Selector>) -> Option<&str> {
		match selector.into() {
			Selector::First => self.aliases.first().map(String::as_str),
			Selector::Last => self.aliases.last().map(String::as_str),
			Selector::Width(width) => self.alias_for_width(width),
		}
	}

	fn alias_for_width(&self, width: u32) -> Option<&str> {
		let mut found: Option<&str> = None;
		for alias in &self.aliases {
			let Some(range) = self.ranges.get(alias) else {
				continue;
			};
			let candidate = found.unwrap_or(alias);
			if width < range.min_width {
				return Some(candidate);
			}
			found = Some(alias);
		}
		found
	}

	/// Renders the media query owning `alias`.
	///
	/// The unbounded (largest) alias renders as `min-width: {min}px`,
	/// every other alias as `max-width: {max}px`.
	pub fn query(&self, alias: &str) -> Option<String> {
		let range = self.value(alias)?;
		let query = match range.max_width {
			Some(max_width) => width_query(Directive::Max, max_width),
			None => width_query(Directive::Min, range.min_width),
		};
		Some(query)
	}

	/// Iterates aliases with their ranges in ascending threshold order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Range)> {
		self.aliases
			.iter()
			.filter_map(|alias| self.ranges.get(alias).map(|range| (alias.as_str(), *range)))
	}
}

/// Derives the synthetic media-query alias for each entry of the legacy
/// ordered-sequence form: `max-width` of the next threshold minus one, or
/// `min-width` of the entry itself for the last one.
fn synthetic_aliases(values: &[RawValue]) -> Vec<(String, u32)> {
	let pixels: Vec<u32> = values.iter().map(RawValue::coerce_to_pixels).collect();
	pixels
		.iter()
		.enumerate()
		.map(|(i, own)| {
			let alias = match pixels.get(i + 1) {
				Some(next) => width_query(Directive::Max, next.saturating_sub(1)),
				None => width_query(Directive::Min, *own),
			};
			(alias, *own)
		})
		.collect()
}

/// Collapses duplicate aliases the way an associative array would: the
/// first occurrence keeps its position, the last occurrence's value wins.
fn collapse_duplicates(pairs: Vec<(String, u32)>) -> Vec<(String, u32)> {
	let mut resolved: Vec<(String, u32)> = Vec::with_capacity(pairs.len());
	for (alias, pixels) in pairs {
		match resolved.iter().position(|(existing, _)| *existing == alias) {
			Some(index) => resolved[index].1 = pixels,
			None => resolved.push((alias, pixels)),
		}
	}
	resolved
}
