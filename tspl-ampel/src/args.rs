//! Command-line handling.

use clap::{Arg, App, AppSettings};
use std::ffi::OsString;

/// What we were asked to do.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    /// TfL line id, lowercased.
    pub line_id: String,
    /// Station names to look out for.
    pub stations: Vec<String>,
    /// MAC address of the light.
    pub light_mac: String,
    /// IP address of the light.
    pub light_ip: String
}

/// Splits a comma-separated station list, trimming whitespace.
///
/// Empty entries (e.g. from a trailing comma) are kept; `classify` ignores them.
pub fn parse_stations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_owned())
        .collect()
}

fn app() -> App<'static, 'static> {
    App::new("tspl-ampel")
        .version(env!("CARGO_PKG_VERSION"))
        .author("eta <hi@theta.eu.org>")
        .about("Turns a LIFX light red, orange or green depending on TfL line disruptions.")
        // Only the argument count is checked; anything else is a value, even
        // if it looks like a flag.
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(Arg::with_name("line_id")
             .help("TfL line id, e.g. 'victoria'.")
             .index(1)
             .required(true))
        .arg(Arg::with_name("stations")
             .help("Comma-separated station names, e.g. 'Green Park,Euston'.")
             .index(2)
             .required(true))
        .arg(Arg::with_name("light_mac")
             .help("MAC address of the light.")
             .index(3)
             .required(true))
        .arg(Arg::with_name("light_ip")
             .help("IP address of the light.")
             .index(4)
             .required(true))
}

/// Parses the full argument list (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error> where I: IntoIterator<Item = T>, T: Into<OsString> + Clone {
    let matches = app().get_matches_from_safe(args)?;
    // All four are required, so clap has already checked they're there.
    let get = |name| matches.value_of(name).unwrap_or_default();
    Ok(Invocation {
        line_id: get("line_id").to_lowercase(),
        stations: parse_stations(get("stations")),
        light_mac: get("light_mac").to_owned(),
        light_ip: get("light_ip").to_owned()
    })
}

/// Usage message, with an example.
pub fn usage(program: &str) -> String {
    format!("Usage: {0} line_id comma_separated_stations lifx_mac_addr lifx_ip_addr\n\
             eg. {0} victoria \"Green Park,Euston\" a0:01:b2:03:04:05 192.168.0.42\n",
            program)
}
