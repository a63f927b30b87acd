//! Logging setup shared by the command-line tools.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `bin_target` is the calling binary's crate name (`env!("CARGO_CRATE_NAME")`),
/// so its own events pass the default filter alongside the library's.
/// `RUST_LOG` wins when set; otherwise both log at `info`, or `debug` when
/// `verbose` is true. Output goes to stderr, leaving stdout for results.
pub fn init(bin_target: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(bin_target, verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn default_directives(bin_target: &str, verbose: bool) -> String {
    let log_level = if verbose { "debug" } else { "info" };
    format!("texalpha={log_level},{bin_target}={log_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_binary() {
        assert_eq!(
            default_directives("convert_alpha", false),
            "texalpha=info,convert_alpha=info"
        );
        assert_eq!(
            default_directives("combine_color_alpha", true),
            "texalpha=debug,combine_color_alpha=debug"
        );
    }
}
