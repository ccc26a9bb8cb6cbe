//! Opt-in log output for hosts embedding `rallyplot`.
//!
//! Accepted plot requests, forwarded config groups and layout changes are
//! logged at `DEBUG`; axis-label replacements at `WARN`. Hosts that already run
//! a `tracing` subscriber need nothing from here.

use crate::error::{PlotError, PlotResult};

/// Environment variable read by [`init_default_tracing`].
pub const LOG_ENV_VAR: &str = "RALLYPLOT_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset: facade warnings only.
pub const DEFAULT_FILTER: &str = "rallyplot=warn";

/// Installs a compact stderr subscriber filtered by `RALLYPLOT_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled, the variable holds
/// an invalid directive, or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    let directive = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_FILTER.to_owned());
    init_tracing(&directive).unwrap_or(false)
}

/// Installs a compact stderr subscriber for `directive`, e.g. `"rallyplot=debug"`.
///
/// `Ok(false)` means nothing was installed. A malformed directive is a
/// `Value` error.
pub fn init_tracing(directive: &str) -> PlotResult<bool> {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_new(directive).map_err(|e| {
            PlotError::value(format!("invalid log filter \"{directive}\": {e}"))
        })?;
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
        return Ok(installed);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        if directive.trim().is_empty() {
            return Err(PlotError::value("log filter must not be empty"));
        }
        Ok(false)
    }
}
