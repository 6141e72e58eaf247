//! Startup configuration read from the environment.
//!
//! | variable             | values                                       |
//! |----------------------|----------------------------------------------|
//! | `ROSETTE_MAPPING`    | `unit`, `centered`                           |
//! | `ROSETTE_FIELD`      | `identity`, `square`, `rosette`, `rosette-polar` |
//! | `ROSETTE_COLOURIZER` | `linear`, `hsv`, `polar`, `polar-quarter`    |
//!
//! Unset or empty variables keep the default.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::render::RenderConfig;

pub const MAPPING_VAR: &str = "ROSETTE_MAPPING";
pub const FIELD_VAR: &str = "ROSETTE_FIELD";
pub const COLOURIZER_VAR: &str = "ROSETTE_COLOURIZER";

pub fn from_env() -> Result<RenderConfig, ConfigError> {
    from_lookup(|var| std::env::var(var).ok())
}

/// Builds a config from any variable source; `from_env` passes the process
/// environment.
pub fn from_lookup<F>(lookup: F) -> Result<RenderConfig, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let defaults = RenderConfig::default();
    Ok(RenderConfig {
        mapping: parse_var(&lookup, MAPPING_VAR)?.unwrap_or(defaults.mapping),
        field: parse_var(&lookup, FIELD_VAR)?.unwrap_or(defaults.field),
        colorizer: parse_var(&lookup, COLOURIZER_VAR)?.unwrap_or(defaults.colorizer),
    })
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = ConfigError>,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => value
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Env {
                var,
                source: Box::new(e),
            }),
        _ => Ok(None),
    }
}
