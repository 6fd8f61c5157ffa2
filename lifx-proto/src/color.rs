//! Colours, as the bulbs understand them.

use std::fmt;

/// A colour in the hue / saturation / brightness / kelvin form used on the wire.
///
/// All four components cover the full `u16` range, except `kelvin`, which bulbs
/// clamp to somewhere around 1500..=9000.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hsbk {
    pub hue: u16,
    pub saturation: u16,
    pub brightness: u16,
    pub kelvin: u16
}
impl Hsbk {
    pub const fn new(hue: u16, saturation: u16, brightness: u16, kelvin: u16) -> Self {
        Self { hue, saturation, brightness, kelvin }
    }
}
impl fmt::Display for Hsbk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.hue, self.saturation, self.brightness, self.kelvin)
    }
}

pub const RED: Hsbk = Hsbk::new(65535, 65535, 65535, 3500);
pub const ORANGE: Hsbk = Hsbk::new(6500, 65535, 65535, 3500);
pub const GREEN: Hsbk = Hsbk::new(16173, 65535, 65535, 3500);
