use clap::Parser;

fn main() {
	let cli = breakpointx_cli::Cli::parse();
	if let Err(err) = breakpointx_cli::run(cli) {
		eprintln!("Error: {err}");
		std::process::exit(1);
	}
}
