//! Checks a TfL line for disruptions affecting the stations you care about,
//! and sets a LIFX light to match:
//!
//! - red: a disruption mentions one of the stations
//! - orange: there are disruptions on the line, but they don't look relevant
//! - green: good service

pub mod errors;
pub mod config;
pub mod args;
pub mod classify;
pub mod tfl;
pub mod light;
pub mod driver;

use std::env;
use std::process;
use lifx_proto::Light;
use log::*;
use tspl_util::ConfigExt;
use self::config::Config;
use self::tfl::TflClient;
use errors::Result;

fn main() -> Result<()> {
    let program = env::args_os()
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tspl-ampel".into());
    let inv = match args::parse_args(env::args_os()) {
        Ok(i) => i,
        Err(_) => {
            print!("{}", args::usage(&program));
            process::exit(1);
        }
    };
    let cfg = Config::load()?;
    tspl_util::setup_logging(cfg.log_level())?;
    debug!("config: {:?}", cfg);
    let tfl = TflClient::new(&cfg)?;
    let mut light = Light::with_options(&inv.light_mac, &inv.light_ip, cfg.light_options())?;
    let conf = driver::run(&tfl, &mut light, &inv)?;
    println!("{}", conf);
    Ok(())
}
