use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let res = quality_plot::load(quality_plot::DEFAULT_INPUT).and_then(quality_plot::run);
	if let Err(err) = res {
		eprintln!("{} {}", "Error:".red().bold(), err);
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}
