use std::process::ExitCode;

use slice_repo::cli::{self, Parsed};
use slice_repo::logging::init::init_tracing;
use slice_repo::ui::Reporter;

fn main() -> ExitCode {
    let cli = match cli::parse_from(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::Usage => {
            cli::print_usage();
            return ExitCode::SUCCESS;
        }
        Parsed::Info(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Parsed::Invalid(e) => {
            let _ = e.print();
            println!();
            cli::print_usage();
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing(cli.verbose) {
        Reporter.error(&format!("{err:#}"));
        return ExitCode::FAILURE;
    }

    match slice_repo::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Reporter.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
