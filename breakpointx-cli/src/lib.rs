use std::fmt;

use anyhow::{Result, anyhow};
use breakpointx::{BreakpointTable, RawBreakpoints, RawValue, Selector};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

const BPX_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
	name = "bpx",
	version,
	about = "Resolve breakpoint ranges and CSS media queries"
)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the resolved pixel range for every alias
	Ranges(CommandArgs),
	/// Print the CSS media query for every alias
	Queries(CommandArgs),
	/// Resolve "first", "last" or a pixel width to its alias
	Alias(AliasArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommandArgs {
	/// Named breakpoints as alias=px pairs (comma separated or repeated)
	#[arg(
		short = 'b',
		long = "breakpoint",
		value_name = "ALIAS=PX",
		value_delimiter = ','
	)]
	pub breakpoints: Vec<String>,
	/// Bare thresholds with positional aliases (comma separated, e.g., 0,768,1024)
	#[arg(
		long,
		value_name = "PX",
		value_delimiter = ',',
		conflicts_with = "breakpoints"
	)]
	pub break_points: Option<Vec<u32>>,
}

#[derive(Args, Debug, Clone)]
pub struct AliasArgs {
	/// Pixel width, or "first"/"last"
	#[arg(value_name = "WIDTH")]
	pub width: String,
	#[command(flatten)]
	pub table: CommandArgs,
}

pub fn run(args: Cli) -> Result<()> {
	log_startup_version();

	match args.command {
		Command::Ranges(args) => run_ranges(&args),
		Command::Queries(args) => run_queries(&args),
		Command::Alias(args) => run_alias(&args),
	}
}

fn run_ranges(args: &CommandArgs) -> Result<()> {
	let table = build_table(args)?;
	log_action(format!("resolved {} breakpoint ranges", table.len()));
	for (alias, range) in table.iter() {
		println!("{alias}: {range}");
	}
	Ok(())
}

fn run_queries(args: &CommandArgs) -> Result<()> {
	let table = build_table(args)?;
	log_action(format!("resolved {} media queries", table.len()));
	for alias in table.aliases() {
		if let Some(query) = table.query(alias) {
			println!("{alias}: {query}");
		}
	}
	Ok(())
}

fn run_alias(args: &AliasArgs) -> Result<()> {
	let table = build_table(&args.table)?;
	let selector = parse_selector(&args.width)?;
	match table.alias(selector) {
		Some(alias) => println!("{alias}"),
		// An empty table is a normal not-found outcome, not a failure.
		None => log_warn("the breakpoint table is empty; nothing to resolve"),
	}
	Ok(())
}

pub fn build_table(args: &CommandArgs) -> Result<BreakpointTable> {
	let raw = if !args.breakpoints.is_empty() {
		let pairs = args
			.breakpoints
			.iter()
			.map(|spec| parse_breakpoint_spec(spec))
			.collect::<Result<Vec<_>>>()?;
		RawBreakpoints::ByAlias(pairs)
	} else if let Some(thresholds) = &args.break_points {
		RawBreakpoints::from_sequence(thresholds.iter().copied())
	} else {
		return Err(anyhow!(
			"no breakpoints supplied; use --breakpoint or --break-points"
		));
	};

	Ok(BreakpointTable::new(raw))
}

pub fn parse_breakpoint_spec(spec: &str) -> Result<(String, RawValue)> {
	let spec = spec.trim();
	if spec.is_empty() {
		return Err(anyhow!("breakpoint spec cannot be empty"));
	}

	let (alias, value) = spec
		.split_once('=')
		.ok_or_else(|| anyhow!("invalid breakpoint syntax: expected alias=px, got {}", spec))?;

	let alias = alias.trim();
	if alias.is_empty() {
		return Err(anyhow!("alias cannot be empty in {}", spec));
	}

	Ok((alias.to_string(), RawValue::from(value.trim())))
}

pub fn parse_selector(width: &str) -> Result<Selector> {
	match width.trim() {
		"first" => Ok(Selector::First),
		"last" => Ok(Selector::Last),
		other => other.parse::<u32>().map(Selector::Width).map_err(|_| {
			anyhow!(
				"invalid width selector: expected a pixel width, first or last, got {}",
				other
			)
		}),
	}
}

fn log_action(message: impl fmt::Display) {
	log_message(LogTarget::Stdout, LogKind::Action, message);
}

fn log_startup_version() {
	log_action(format!("bpx v{BPX_VERSION}"));
}

fn log_warn(message: impl fmt::Display) {
	log_message(LogTarget::Stderr, LogKind::Warning, message);
}

fn log_message(target: LogTarget, kind: LogKind, message: impl fmt::Display) {
	let tag = "[bpx]".bold().cyan().to_string();
	let icon = kind.style_icon();
	let text = kind.style_text(message.to_string());
	match target {
		LogTarget::Stdout => println!("{} {} {}", tag, icon, text),
		LogTarget::Stderr => eprintln!("{} {} {}", tag, icon, text),
	}
}

#[derive(Clone, Copy)]
enum LogTarget {
	Stdout,
	Stderr,
}

#[derive(Clone, Copy)]
enum LogKind {
	Action,
	Warning,
}

impl LogKind {
	fn style_icon(self) -> String {
		match self {
			LogKind::Action => "⚡".bright_green().to_string(),
			LogKind::Warning => "⚠".magenta().to_string(),
		}
	}

	fn style_text(self, text: String) -> String {
		match self {
			LogKind::Action => text.bright_green().to_string(),
			LogKind::Warning => text.magenta().to_string(),
		}
	}
}

#[cfg(test)]
mod tests;
