//! Opt-in tracing output for filesystem events
//!
//! The library only emits `tracing` events (reservation, creation, rename);
//! it never installs a subscriber on its own. Binaries and test harnesses
//! that want those events on stderr can call [`init`] once. The filter is
//! read from the `TMPPATH_LOG` environment variable and accepts standard
//! directive syntax, e.g. `TMPPATH_LOG=tmppath=debug`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const FILTER_ENV: &str = "TMPPATH_LOG";
const DEFAULT_DIRECTIVE: &str = "tmppath=info";

fn env_filter() -> EnvFilter {
    // An unset or unparsable TMPPATH_LOG falls back to the crate default
    // rather than silencing everything.
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a process-level subscriber filtered by `TMPPATH_LOG`.
///
/// Safe to call multiple times; only the first call installs. Best-effort:
/// if the process already has a global subscriber, it is left in place and
/// the crate's events flow to it instead.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    let _ = INIT.set(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_filter_reads_directives_from_env() {
        let saved = env::var_os(FILTER_ENV);
        unsafe {
            env::set_var(FILTER_ENV, "tmppath=trace");
        }

        let filter = env_filter().to_string();

        unsafe {
            match saved {
                Some(value) => env::set_var(FILTER_ENV, value),
                None => env::remove_var(FILTER_ENV),
            }
        }

        assert!(filter.contains("tmppath=trace"));
    }

    #[test]
    #[serial]
    fn test_unset_env_falls_back_to_default() {
        let saved = env::var_os(FILTER_ENV);
        unsafe {
            env::remove_var(FILTER_ENV);
        }

        let filter = env_filter().to_string();

        unsafe {
            if let Some(value) = saved {
                env::set_var(FILTER_ENV, value);
            }
        }

        assert!(filter.contains(DEFAULT_DIRECTIVE));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
