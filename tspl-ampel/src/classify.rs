//! Deciding how worried to be about a line's status.

use std::fmt;
use tfl_types::{LineStatus, Disruption};
use log::*;

/// The three states the light can show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlertColor {
    /// Nothing is disrupted.
    None,
    /// Something on the line is disrupted, but none of our stations
    /// are mentioned.
    Partial,
    /// A disruption mentions one of our stations.
    Affecting
}
impl fmt::Display for AlertColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            AlertColor::None => "no disruption",
            AlertColor::Partial => "disruption elsewhere on the line",
            AlertColor::Affecting => "disruption affecting a station"
        };
        write!(f, "{}", s)
    }
}

/// Works out the `AlertColor` for a set of status entries, given the
/// stations we care about.
///
/// Good-service entries (and entries without a disruption) are ignored.
/// A station counts as affected if its name appears, case-sensitively,
/// anywhere in one of a disruption's affected stop names or, failing that,
/// in its description. TfL often doesn't fill in the affected stops, hence
/// the description check.
///
/// Empty station names would match everything, so they're skipped.
pub fn classify(statuses: &[LineStatus], stations: &[String]) -> AlertColor {
    let disruptions: Vec<&Disruption> = statuses.iter()
        .filter(|st| !st.is_good_service())
        .filter_map(|st| st.disruption.as_ref())
        .collect();
    if disruptions.is_empty() {
        return AlertColor::None;
    }
    debug!("{} active disruption(s)", disruptions.len());
    for dis in disruptions {
        for station in stations.iter().filter(|s| !s.is_empty()) {
            let station = station as &str;
            if let Some(stop) = dis.affected_stops.iter().find(|stop| stop.common_name.contains(station)) {
                debug!("'{}' matches affected stop '{}'", station, stop.common_name);
                return AlertColor::Affecting;
            }
            if dis.description.contains(station) {
                debug!("'{}' mentioned in disruption: {}", station, dis.description);
                return AlertColor::Affecting;
            }
        }
    }
    AlertColor::Partial
}
