use anyhow::{Context, Result};

/// Filter used when `RUST_LOG` is unset.
fn base_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr. RUST_LOG (if set) takes precedence.
/// Otherwise, -v/-vv map to "debug"/"trace".
pub fn init_tracing(verbosity: u8) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| base_filter(verbosity).to_string());

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(filter).context("invalid RUST_LOG / filter")?;

    // Allow re-init to be a no-op in tests
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(base_filter(0), "warn");
        assert_eq!(base_filter(1), "debug");
        assert_eq!(base_filter(5), "trace");
    }

    #[test]
    fn reinit_is_harmless() {
        init_tracing(0).unwrap();
        init_tracing(2).unwrap();
    }
}
