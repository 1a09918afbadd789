use tracing_subscriber::EnvFilter;

/// Workspace crates that log through the default filter.
const CRATE_TARGETS: [&str; 5] = [
    "lunara",
    "lunara_calendar",
    "lunara_tide",
    "lunara_shipping",
    "lunara_export",
];

/// Initialize tracing from the CLI verbosity count.
///
/// 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace. A set `RUST_LOG`
/// env var takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = CRATE_TARGETS.map(|t| format!("{t}={level}")).join(",");
        EnvFilter::new(directives)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
