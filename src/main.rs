use std::process::ExitCode;

use clap::Parser;
use devicehub_lib::bootstrap::{self, AppRuntime};
use devicehub_lib::cli::Cli;
use devicehub_lib::commands::CommandError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match bootstrap::resolve_config(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let runtime = match AppRuntime::from_config(&config) {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "Failed to wire dependencies");
            return report(CommandError::Internal);
        }
    };

    match cli.command.run(&runtime).await {
        Ok(output) => match output.to_json() {
            Ok(Some(body)) => {
                println!("{body:#}");
                ExitCode::SUCCESS
            }
            Ok(None) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize command output");
                report(CommandError::Internal)
            }
        },
        Err(err) => report(err),
    }
}

fn report(err: CommandError) -> ExitCode {
    eprintln!("{}", err.to_json());
    ExitCode::from(err.exit_code())
}
