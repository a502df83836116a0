use std::process::ExitCode;

use site_smoke::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    cli::run_cli().await
}
