use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the process-wide tracing subscriber.
///
/// Call once from the embedding host before creating sessions; RUST_LOG
/// overrides the default filter.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pantry_session=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
