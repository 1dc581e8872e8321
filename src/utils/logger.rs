use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// RUST_LOG wins over the built-in directives.
fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn cli_directives(verbose: bool) -> &'static str {
    if verbose {
        "contact_book=debug,info"
    } else {
        "contact_book=warn"
    }
}

/// Console replies go to stdout, so logs are written to stderr.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(cli_directives(verbose)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr, for runs whose output is collected by another tool.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("contact_book=info"))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true),
        )
        .init();
}
