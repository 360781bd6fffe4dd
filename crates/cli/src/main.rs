use std::process::ExitCode;

use clap::Parser;

use playbill_cli::Args;

fn main() -> ExitCode {
    playbill_observability::init();

    let args = Args::parse();

    match playbill_cli::run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "statement run failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
