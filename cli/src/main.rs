//! hub-provision - Unity Hub provisioning for CI build agents

use std::process::ExitCode;

use clap::Parser;
use hub_provision::cli::Cli;
use hub_provision::output::OutputContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    hub_provision::logging::init(cli.verbose);
    let output = OutputContext::new(cli.no_color, cli.quiet);
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            output.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
