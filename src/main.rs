use clap::Parser;
use linetally::{
    Cli, LineTally, LineTallyError, OutputFormatter, OutputMode, RawParams, UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    let params = RawParams::parse(&cli.params);

    // Parameter warnings surface before anything else happens
    let startup_formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    for warning in params.warnings() {
        startup_formatter.warning(warning);
    }

    if params.is_empty() || params.contains("help") {
        Cli::print_usage();
        return 0;
    }

    let config = match params.load_config() {
        Ok(config) => config,
        Err(e) => {
            startup_formatter.print_user_friendly_error(&e);
            return exit_code_for(&e);
        }
    };

    let input = match params.input() {
        Some(path) => path,
        None => {
            let e = LineTallyError::InvalidInput {
                path: "(not provided)".to_string(),
            };
            startup_formatter.print_user_friendly_error(&e);
            return exit_code_for(&e);
        }
    };

    let tally = LineTally::new(config);
    match tally.count_directory(&input) {
        Ok(report) => {
            tally.output_formatter().print_run_summary(&report);
            0
        }
        Err(e) => {
            tally.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &LineTallyError) -> i32 {
    match error {
        LineTallyError::Config { .. } => 2,
        LineTallyError::InvalidInput { .. } => 3,
        LineTallyError::Pattern { .. } => 4,
        LineTallyError::Archive { .. } => 5,
        LineTallyError::Report { .. } => 6,
        LineTallyError::Io(_) => 1,
    }
}
