use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Failures only by default; `--verbose` adds the per-step trace.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "upload_verify=debug,info"
    } else {
        "upload_verify=warn"
    }
}

/// `RUST_LOG` wins over the built-in directives.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Diagnostics go to stderr so stdout only carries the upload report.
pub fn init_cli_logger(verbose: bool) {
    let report_safe_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(report_safe_layer)
        .init();
}
