use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

/// Library settings read from the environment.
#[derive(Debug, confique::Config)]
pub struct Config {
    /// Emit a `trace!` event for every token produced by `tokenize`.
    #[config(env = "SQLSCAN_TRACE_TOKENS", default = false)]
    pub trace_tokens: bool,
    /// Log diagnostics (unterminated literals, unknown characters) at `warn`
    /// rather than `debug`.
    #[config(env = "SQLSCAN_WARN_DIAGNOSTICS", default = true)]
    pub warn_diagnostics: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }

    fn fallback() -> Self {
        Self {
            trace_tokens: false,
            warn_diagnostics: true,
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env().unwrap_or_else(|e| {
            warn!("{e}; using default settings");
            Config::fallback()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_declared_defaults() {
        let fallback = Config::fallback();
        assert!(!fallback.trace_tokens);
        assert!(fallback.warn_diagnostics);
    }

    #[test]
    fn config_is_loaded_once() {
        assert!(std::ptr::eq(config(), config()));
    }
}
