//! Driving the light.

use lifx_proto::{Light, Hsbk, RED, ORANGE, GREEN};

use crate::classify::AlertColor;
use crate::errors::*;

/// Something that can show a colour, and tell us about itself afterwards.
pub trait LightController {
    fn set_color(&mut self, color: Hsbk) -> AmpelResult<()>;
    fn label(&mut self) -> AmpelResult<String>;
    fn location(&mut self) -> AmpelResult<String>;
    /// The colour the light says it's showing.
    fn color(&mut self) -> AmpelResult<Hsbk>;
}

impl LightController for Light {
    fn set_color(&mut self, color: Hsbk) -> AmpelResult<()> {
        Light::set_color(self, color, 0)?;
        Ok(())
    }
    fn label(&mut self) -> AmpelResult<String> {
        Ok(self.get_label()?)
    }
    fn location(&mut self) -> AmpelResult<String> {
        Ok(self.get_location()?)
    }
    fn color(&mut self) -> AmpelResult<Hsbk> {
        Ok(self.get_color()?)
    }
}

impl From<AlertColor> for Hsbk {
    fn from(c: AlertColor) -> Hsbk {
        match c {
            AlertColor::None => GREEN,
            AlertColor::Partial => ORANGE,
            AlertColor::Affecting => RED
        }
    }
}
