//! Process-wide tracing setup: JSON lines to stdout, filtered by
//! `RUST_LOG` (defaulting to info).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_target(false)
                .with_ansi(false),
        )
        .init();
}
