//! `/Line/{ids}/Status` response types.

use serde_derive::{Serialize, Deserialize};
use super::fns::*;

/// Status severity code meaning "Good Service".
pub const SEVERITY_GOOD_SERVICE: i32 = 10;

/// A transit line, along with its current status.
///
/// The status endpoint returns an array of these, one per requested line id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Line id, e.g. 'victoria'.
    pub id: String,
    /// Human-readable name, e.g. 'Victoria'.
    #[serde(default)]
    pub name: String,
    /// Transport mode, e.g. 'tube' or 'overground'.
    #[serde(default)]
    pub mode_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line_statuses: Vec<LineStatus>
}

/// One severity/disruption record for a line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    pub status_severity: i32,
    /// e.g. 'Good Service', 'Minor Delays', 'Part Closure'.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_severity_description: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub disruption: Option<Disruption>
}
impl LineStatus {
    /// Whether this entry reports good service, and should be ignored.
    pub fn is_good_service(&self) -> bool {
        self.status_severity == SEVERITY_GOOD_SERVICE
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// e.g. 'RealTime', 'PlannedWork'.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_description: String,
    /// Free text, which often (but not always) names the stations involved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Stops affected by the disruption.
    ///
    /// TfL frequently leaves this empty, even when the description
    /// names specific stations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affected_stops: Vec<StopPoint>,
    #[serde(default)]
    pub closure_text: Option<String>
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StopPoint {
    /// e.g. 'Euston Underground Station'.
    #[serde(default, deserialize_with = "null_as_default")]
    pub common_name: String,
    #[serde(default)]
    pub naptan_id: Option<String>
}
