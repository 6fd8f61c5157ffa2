use serde_json;
use crate::line::*;

macro_rules! mktest {
    ($($name:ident, $path:expr),*) => {
        $(
        #[test]
        fn $name() {
            let data = include_str!($path);
            let _: Vec<Line> = serde_json::from_str(&data).unwrap();
        }
        )*
    }
}
mktest! {
    parse_good_service, "good_service.json",
    parse_minor_delays, "minor_delays.json",
    parse_part_closure, "part_closure.json"
}

fn load(data: &str) -> Line {
    let mut lines: Vec<Line> = serde_json::from_str(data).unwrap();
    assert_eq!(lines.len(), 1);
    lines.remove(0)
}

#[test]
fn good_service_has_no_disruption() {
    let line = load(include_str!("good_service.json"));
    assert_eq!(line.id, "victoria");
    assert_eq!(line.mode_name, "tube");
    assert_eq!(line.line_statuses.len(), 1);
    let st = &line.line_statuses[0];
    assert!(st.is_good_service());
    assert_eq!(st.status_severity_description, "Good Service");
    assert!(st.reason.is_none());
    assert!(st.disruption.is_none());
}
#[test]
fn null_affected_stops_become_empty() {
    let line = load(include_str!("minor_delays.json"));
    let st = &line.line_statuses[0];
    assert_eq!(st.status_severity, 6);
    assert!(!st.is_good_service());
    let dis = st.disruption.as_ref().unwrap();
    assert!(dis.affected_stops.is_empty());
    assert!(dis.description.contains("Highbury"));
    assert_eq!(dis.closure_text.as_ref().map(|x| x as &str), Some("minorDelays"));
}
#[test]
fn affected_stops_are_parsed() {
    let line = load(include_str!("part_closure.json"));
    assert_eq!(line.line_statuses.len(), 2);
    let dis = line.line_statuses[0].disruption.as_ref().unwrap();
    assert_eq!(dis.category, "PlannedWork");
    let names: Vec<&str> = dis.affected_stops.iter()
        .map(|s| &s.common_name as &str)
        .collect();
    assert_eq!(names, vec!["Euston Underground Station", "Warren Street Underground Station"]);
    assert_eq!(dis.affected_stops[0].naptan_id.as_ref().map(|x| x as &str), Some("940GZZLUEUS"));
    assert!(line.line_statuses[1].is_good_service());
}
#[test]
fn missing_optional_fields_default() {
    let data = r#"[{"id": "dlr", "lineStatuses": [{"statusSeverity": 9, "disruption": {}}]}]"#;
    let line = load(data);
    assert_eq!(line.name, "");
    let dis = line.line_statuses[0].disruption.as_ref().unwrap();
    assert_eq!(dis.description, "");
    assert!(dis.affected_stops.is_empty());
}
#[test]
fn null_line_statuses_become_empty() {
    let data = r#"[{"id": "dlr", "lineStatuses": null}]"#;
    let line = load(data);
    assert!(line.line_statuses.is_empty());
}
