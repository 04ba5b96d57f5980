use breakpointx::{BreakpointTable, RawBreakpoints};

fn main() {
	// Named breakpoints shared between server-side logic and CSS.
	let table = BreakpointTable::new(RawBreakpoints::from_pairs([
		("mobile", 0u32),
		("tablet", 768u32),
		("desktop", 1024u32),
	]));

	for (alias, range) in table.iter() {
		println!("{alias}: {range}");
	}

	if let Some(alias) = table.alias(800u32) {
		println!("a 800px viewport is {alias}");
	}

	if let Some(query) = table.query("tablet") {
		println!("@media ({query}) {{ /* tablet rules */ }}");
	}

	// The legacy positional form derives media-query aliases by itself.
	let legacy = BreakpointTable::new(RawBreakpoints::from_sequence([0u32, 768, 1024]));
	for alias in legacy.aliases() {
		println!("{alias}");
	}
}
