use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` overrides the default `contact_form=info` filter. Logs go to
/// stderr so rendered form output on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("contact_form=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
