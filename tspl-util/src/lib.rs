//! Bits shared between the trainsplorer crates: error and naming macros,
//! config loading, logging setup, and a JSON API client (`rpc`).

use config as cfg;
use serde::de::DeserializeOwned;
use log::*;

pub mod rpc;

/// Expands to the name of the crate it's used in, e.g. `tspl_ampel`.
#[macro_export]
macro_rules! crate_name {
    () => {module_path!().split("::").next().unwrap()}
}

/// Generates `From` impls that wrap foreign errors in variants of a
/// crate-local error enum.
#[macro_export]
macro_rules! impl_from_for_error {
    ($error:ident, $($orig:ident => $var:ident),*) => {
        $(
            impl From<$orig> for $error {
                fn from(err: $orig) -> $error {
                    $error::$var(err)
                }
            }
         )*
    }
}

/// Extension trait for populating crate configuration structs.
///
/// Values are read from `[crate name].toml` in the working directory (if there
/// is one), then overridden by `[prefix]_*` environment variables. With neither
/// present the struct is built from an empty table, so every field wants a
/// `#[serde(default)]`.
pub trait ConfigExt: DeserializeOwned {
    fn crate_name() -> &'static str;
    /// Prefix for environment variable overrides.
    fn env_prefix() -> &'static str {
        "TSPL"
    }
    fn load() -> Result<Self, failure::Error> {
        let cn = Self::crate_name();
        debug!("Loading config for {} (file {}.toml, env {}_*)", cn, cn, Self::env_prefix());
        let mut settings = cfg::Config::default();
        let file = cfg::File::with_name(cn).required(false);
        if let Err(e) = settings.merge(file) {
            warn!("Ignoring config file {}.toml: {}", cn, e);
            settings = cfg::Config::default();
        }
        settings.merge(cfg::Environment::with_prefix(Self::env_prefix()))?;
        Ok(settings.try_into()?)
    }
}

/// Sends `log` records to stderr at `level` and above, formatted as
/// `[target LEVEL] message`.
///
/// Stdout is left alone for whatever output the binary actually produces.
pub fn setup_logging(level: log::LevelFilter) -> Result<(), failure::Error> {
    fern::Dispatch::new()
        .level(level)
        .format(|out, msg, record| {
            out.finish(format_args!("[{} {}] {}", record.target(), record.level(), msg))
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
