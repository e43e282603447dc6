use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Install the bunyan-formatted subscriber on stderr.
///
/// The library logs through the `log` facade; `LogTracer` bridges those
/// records into tracing. Filtering follows `RUST_LOG`, defaulting to `warn`
/// so normal output stays clean.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let formatting_layer = BunyanFormattingLayer::new("ensutil".into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    if LogTracer::init().is_ok() {
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
