//! One end-to-end alert run.

use std::fmt;
use lifx_proto::Hsbk;
use log::*;

use crate::args::Invocation;
use crate::classify::{classify, AlertColor};
use crate::light::LightController;
use crate::tfl::StatusProvider;
use crate::errors::*;

/// What the light told us after we set it.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub alert: AlertColor,
    pub label: String,
    pub location: String,
    pub color: Hsbk
}
impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Light {} in {} is now {}", self.label, self.location, self.color)
    }
}

/// Fetches the line's status, classifies it, and sets the light accordingly.
pub fn run<P, L>(provider: &P, light: &mut L, inv: &Invocation) -> AmpelResult<Confirmation> where P: StatusProvider, L: LightController {
    let line = provider.line_status(&inv.line_id)?;
    if line.line_statuses.is_empty() {
        warn!("Line {} has no status entries", inv.line_id);
        Err(AmpelError::UnknownLine(inv.line_id.clone()))?
    }
    let alert = classify(&line.line_statuses, &inv.stations);
    info!("{} ({}): {}", line.name, line.id, alert);
    light.set_color(alert.into())?;
    let label = light.label()?;
    let location = light.location()?;
    let color = light.color()?;
    Ok(Confirmation { alert, label, location, color })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfl_types::{Line, LineStatus, Disruption, StopPoint};
    use tspl_util::rpc::RpcError;
    use lifx_proto::errors::ProtoError;
    use lifx_proto::{GREEN, ORANGE, RED};
    use std::cell::RefCell;

    struct FakeTfl {
        line: Option<Line>,
        asked: RefCell<Vec<String>>
    }
    impl FakeTfl {
        fn new(line: Option<Line>) -> Self {
            Self { line, asked: RefCell::new(vec![]) }
        }
    }
    impl StatusProvider for FakeTfl {
        fn line_status(&self, line_id: &str) -> AmpelResult<Line> {
            self.asked.borrow_mut().push(line_id.into());
            match self.line {
                Some(ref l) => Ok(l.clone()),
                None => Err(RpcError::RemoteServiceUnavailable.into())
            }
        }
    }

    #[derive(Default)]
    struct FakeLight {
        color: Option<Hsbk>,
        unreachable: bool
    }
    impl LightController for FakeLight {
        fn set_color(&mut self, color: Hsbk) -> AmpelResult<()> {
            if self.unreachable {
                Err(ProtoError::MalformedMessage("unplugged"))?
            }
            self.color = Some(color);
            Ok(())
        }
        fn label(&mut self) -> AmpelResult<String> {
            Ok("Hallway".into())
        }
        fn location(&mut self) -> AmpelResult<String> {
            Ok("Home".into())
        }
        fn color(&mut self) -> AmpelResult<Hsbk> {
            Ok(self.color.unwrap_or(Hsbk::new(0, 0, 0, 0)))
        }
    }

    fn line(statuses: Vec<LineStatus>) -> Line {
        Line {
            id: "victoria".into(),
            name: "Victoria".into(),
            mode_name: "tube".into(),
            line_statuses: statuses
        }
    }
    fn status(severity: i32, description: &str, stops: &[&str]) -> LineStatus {
        let disruption = if severity == 10 {
            None
        }
        else {
            Some(Disruption {
                description: description.into(),
                affected_stops: stops.iter()
                    .map(|s| StopPoint { common_name: (*s).into(), naptan_id: None })
                    .collect(),
                ..Default::default()
            })
        };
        LineStatus {
            status_severity: severity,
            status_severity_description: String::new(),
            reason: None,
            disruption
        }
    }
    fn invocation(stations: &[&str]) -> Invocation {
        Invocation {
            line_id: "victoria".into(),
            stations: stations.iter().map(|s| (*s).into()).collect(),
            light_mac: "a0:01:b2:03:04:05".into(),
            light_ip: "192.168.0.42".into()
        }
    }

    #[test]
    fn good_service_goes_green() {
        let tfl = FakeTfl::new(Some(line(vec![status(10, "", &[])])));
        let mut light = FakeLight::default();
        let conf = run(&tfl, &mut light, &invocation(&["Euston"])).unwrap();
        assert_eq!(conf.alert, AlertColor::None);
        assert_eq!(light.color, Some(GREEN));
        assert_eq!(*tfl.asked.borrow(), vec!["victoria".to_string()]);
        assert_eq!(conf.to_string(), "Light Hallway in Home is now [16173, 65535, 65535, 3500]");
    }
    #[test]
    fn elsewhere_goes_orange() {
        let tfl = FakeTfl::new(Some(line(vec![status(6, "Minor delays between Kings Cross and Highbury", &[])])));
        let mut light = FakeLight::default();
        let conf = run(&tfl, &mut light, &invocation(&["Euston"])).unwrap();
        assert_eq!(conf.alert, AlertColor::Partial);
        assert_eq!(conf.color, ORANGE);
    }
    #[test]
    fn affecting_goes_red() {
        let tfl = FakeTfl::new(Some(line(vec![status(6, "", &["Green Park Underground Station"])])));
        let mut light = FakeLight::default();
        let conf = run(&tfl, &mut light, &invocation(&["Green Park", "Euston"])).unwrap();
        assert_eq!(conf, Confirmation {
            alert: AlertColor::Affecting,
            label: "Hallway".into(),
            location: "Home".into(),
            color: RED
        });
    }
    #[test]
    fn empty_status_is_unknown_line() {
        let tfl = FakeTfl::new(Some(line(vec![])));
        let mut light = FakeLight::default();
        match run(&tfl, &mut light, &invocation(&["Euston"])) {
            Err(AmpelError::UnknownLine(ref l)) if l == "victoria" => {},
            x => panic!("expected UnknownLine, got {:?}", x)
        }
        assert_eq!(light.color, None);
    }
    #[test]
    fn provider_errors_propagate() {
        let tfl = FakeTfl::new(None);
        let mut light = FakeLight::default();
        match run(&tfl, &mut light, &invocation(&["Euston"])) {
            Err(AmpelError::Rpc(RpcError::RemoteServiceUnavailable)) => {},
            x => panic!("expected an RPC error, got {:?}", x)
        }
        assert_eq!(light.color, None);
    }
    #[test]
    fn light_errors_propagate() {
        let tfl = FakeTfl::new(Some(line(vec![status(10, "", &[])])));
        let mut light = FakeLight { unreachable: true, ..Default::default() };
        match run(&tfl, &mut light, &invocation(&["Euston"])) {
            Err(AmpelError::Light(_)) => {},
            x => panic!("expected a light error, got {:?}", x)
        }
    }
}
