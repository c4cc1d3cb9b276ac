use clap::Parser;
use upload_verify::utils::{logger, validation::Validate};
use upload_verify::{report_failure, CliConfig, ExitStatus, UploadVerifier, VerifyError};

fn report_and_exit(e: VerifyError) -> ! {
    let status = report_failure(&e, std::io::stdout());
    std::process::exit(status.code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => report_and_exit(e),
    };

    if let Err(e) = config.validate() {
        report_and_exit(e);
    }

    tracing::info!("Verifying {} against {}", config.file_path, config.endpoint);

    let verifier = match UploadVerifier::with_defaults() {
        Ok(verifier) => verifier,
        Err(e) => report_and_exit(e),
    };

    let status = verifier
        .run_with_config(&config, std::io::stdout())
        .await;

    if status != ExitStatus::Success {
        std::process::exit(status.code());
    }
}
