use tracing_subscriber::{EnvFilter, FmtSubscriber};

// Sets up tracing. Goes to stderr, filtered by the TRACE env var.
// Levels are: trace, debug, info, warn, error
//
// EnvFilter has a standard syntax, for example:
//
// All targets, info level:                   info
// All modules under statement, debug level:  ibflat::statement=debug
// Global at info, statement as debug:        info,ibflat::statement=debug
//
// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
pub fn setup_tracing() {
    // Use stderr for tracing, so diagnostics never mix with any output
    // written to stdout. Filtering is off by default.
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_env("TRACE"))
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
