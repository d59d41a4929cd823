//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Under Lambda, CloudWatch does not render colour codes, so ANSI output and
/// the per-line target are turned off.
pub fn init_tracing(default_filter: &str, lambda: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(!lambda)
        .with_target(!lambda);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// True when running inside the AWS Lambda runtime.
pub fn running_in_lambda() -> bool {
    std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some()
}
