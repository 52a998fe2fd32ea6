mod args;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use args::Args;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Usage problems are reported before any file is touched
    let (input, output) = match args.paths() {
        Ok(paths) => paths,
        Err(e) => {
            println!("{e}");
            println!("{}", Args::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    if !args.ignored.is_empty() {
        log::debug!("ignoring trailing arguments: {:?}", args.ignored);
    }

    let report = match alphatrim_core::trim_file(&input, &output) {
        Ok(report) => report,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Complete, and saved to: {}", output.display());

    if args.json {
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => log::warn!("Failed to serialize trim report: {e}"),
        }
    }

    ExitCode::SUCCESS
}
