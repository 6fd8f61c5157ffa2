//! Wire format for the LAN protocol.
//!
//! Every datagram is a 36-byte header followed by a message-specific payload,
//! all little-endian.

use crate::color::Hsbk;
use crate::errors::{Result, ProtoError};

pub const HEADER_SIZE: usize = 36;
/// Protocol number; the only one there is.
pub const PROTOCOL: u16 = 1024;
const ADDRESSABLE: u16 = 1 << 12;
const TAGGED: u16 = 1 << 13;
const PROTOCOL_MASK: u16 = 0x0fff;
const RES_REQUIRED: u8 = 1 << 0;
const ACK_REQUIRED: u8 = 1 << 1;
/// Labels are fixed-size, NUL-padded UTF-8.
pub const LABEL_SIZE: usize = 32;

pub mod msg_type {
    pub const GET_LABEL: u16 = 23;
    pub const STATE_LABEL: u16 = 25;
    pub const ACKNOWLEDGEMENT: u16 = 45;
    pub const GET_LOCATION: u16 = 48;
    pub const STATE_LOCATION: u16 = 50;
    pub const LIGHT_GET: u16 = 101;
    pub const LIGHT_SET_COLOR: u16 = 102;
    pub const LIGHT_STATE: u16 = 107;
}
use self::msg_type::*;

/// Frame, frame address and protocol header, minus the reserved fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Whether `target` should be ignored (i.e. broadcast to all bulbs).
    pub tagged: bool,
    /// Client identifier, echoed back in replies.
    pub source: u32,
    /// Bulb MAC address, left-aligned and zero-padded.
    pub target: [u8; 8],
    pub ack_required: bool,
    pub res_required: bool,
    /// Echoed back in replies, so they can be matched to requests.
    pub sequence: u8,
    pub msg_type: u16
}
impl Header {
    pub fn for_target(mac: [u8; 6], source: u32, sequence: u8, msg_type: u16) -> Self {
        let mut target = [0; 8];
        target[..6].copy_from_slice(&mac);
        Self {
            tagged: false,
            source, target,
            ack_required: false,
            res_required: false,
            sequence, msg_type
        }
    }
}

/// The messages we know how to speak.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    GetLabel,
    StateLabel {
        label: String
    },
    Acknowledgement,
    GetLocation,
    StateLocation {
        location: [u8; 16],
        label: String,
        updated_at: u64
    },
    LightGet,
    LightSetColor {
        color: Hsbk,
        /// Transition time, in milliseconds.
        duration: u32
    },
    LightState {
        color: Hsbk,
        power: u16,
        label: String
    },
    /// Anything else a bulb might send us.
    Unknown {
        msg_type: u16,
        payload: Vec<u8>
    }
}
impl Message {
    pub fn msg_type(&self) -> u16 {
        use self::Message::*;

        match *self {
            GetLabel => GET_LABEL,
            StateLabel { .. } => STATE_LABEL,
            Acknowledgement => ACKNOWLEDGEMENT,
            GetLocation => GET_LOCATION,
            StateLocation { .. } => STATE_LOCATION,
            LightGet => LIGHT_GET,
            LightSetColor { .. } => LIGHT_SET_COLOR,
            LightState { .. } => LIGHT_STATE,
            Unknown { msg_type, .. } => msg_type
        }
    }
    fn write_payload(&self, buf: &mut Vec<u8>) {
        use self::Message::*;

        match *self {
            GetLabel | Acknowledgement | GetLocation | LightGet => {},
            StateLabel { ref label } => write_label(buf, label),
            StateLocation { ref location, ref label, updated_at } => {
                buf.extend_from_slice(location);
                write_label(buf, label);
                buf.extend_from_slice(&updated_at.to_le_bytes());
            },
            LightSetColor { color, duration } => {
                buf.push(0);
                write_hsbk(buf, color);
                buf.extend_from_slice(&duration.to_le_bytes());
            },
            LightState { color, power, ref label } => {
                write_hsbk(buf, color);
                buf.extend_from_slice(&0i16.to_le_bytes());
                buf.extend_from_slice(&power.to_le_bytes());
                write_label(buf, label);
                buf.extend_from_slice(&0u64.to_le_bytes());
            },
            Unknown { ref payload, .. } => buf.extend_from_slice(payload)
        }
    }
    fn read_payload(msg_type: u16, payload: &[u8]) -> Result<Self> {
        let mut rdr = Reader { buf: payload };
        let ret = match msg_type {
            GET_LABEL => Message::GetLabel,
            STATE_LABEL => Message::StateLabel {
                label: rdr.label()?
            },
            ACKNOWLEDGEMENT => Message::Acknowledgement,
            GET_LOCATION => Message::GetLocation,
            STATE_LOCATION => {
                let mut location = [0; 16];
                location.copy_from_slice(rdr.take(16)?);
                let label = rdr.label()?;
                let updated_at = rdr.u64()?;
                Message::StateLocation { location, label, updated_at }
            },
            LIGHT_GET => Message::LightGet,
            LIGHT_SET_COLOR => {
                let _reserved = rdr.u8()?;
                let color = rdr.hsbk()?;
                let duration = rdr.u32()?;
                Message::LightSetColor { color, duration }
            },
            LIGHT_STATE => {
                let color = rdr.hsbk()?;
                let _reserved = rdr.u16()?;
                let power = rdr.u16()?;
                let label = rdr.label()?;
                Message::LightState { color, power, label }
            },
            other => Message::Unknown {
                msg_type: other,
                payload: payload.to_vec()
            }
        };
        Ok(ret)
    }
}

/// Serializes a header and message into a datagram.
///
/// The `msg_type` in the header is overwritten with the message's own.
pub fn encode(hdr: &Header, msg: &Message) -> Vec<u8> {
    let mut payload = vec![];
    msg.write_payload(&mut payload);
    let size = (HEADER_SIZE + payload.len()) as u16;
    let mut proto = PROTOCOL | ADDRESSABLE;
    if hdr.tagged {
        proto |= TAGGED;
    }
    let mut flags = 0;
    if hdr.res_required {
        flags |= RES_REQUIRED;
    }
    if hdr.ack_required {
        flags |= ACK_REQUIRED;
    }
    let mut buf = Vec::with_capacity(size as usize);
    buf.extend_from_slice(&size.to_le_bytes());
    buf.extend_from_slice(&proto.to_le_bytes());
    buf.extend_from_slice(&hdr.source.to_le_bytes());
    buf.extend_from_slice(&hdr.target);
    buf.extend_from_slice(&[0; 6]);
    buf.push(flags);
    buf.push(hdr.sequence);
    buf.extend_from_slice(&[0; 8]);
    buf.extend_from_slice(&msg.msg_type().to_le_bytes());
    buf.extend_from_slice(&[0; 2]);
    buf.extend_from_slice(&payload);
    buf
}

/// Parses a datagram into a header and message.
pub fn decode(bytes: &[u8]) -> Result<(Header, Message)> {
    if bytes.len() < HEADER_SIZE {
        Err(ProtoError::MalformedMessage("datagram shorter than header"))?
    }
    let mut rdr = Reader { buf: bytes };
    let size = rdr.u16()? as usize;
    if size < HEADER_SIZE || size > bytes.len() {
        Err(ProtoError::MalformedMessage("size field out of range"))?
    }
    let proto = rdr.u16()?;
    if proto & PROTOCOL_MASK != PROTOCOL {
        Err(ProtoError::MalformedMessage("unknown protocol number"))?
    }
    let source = rdr.u32()?;
    let mut target = [0; 8];
    target.copy_from_slice(rdr.take(8)?);
    let _reserved = rdr.take(6)?;
    let flags = rdr.u8()?;
    let sequence = rdr.u8()?;
    let _reserved = rdr.take(8)?;
    let msg_type = rdr.u16()?;
    let _reserved = rdr.take(2)?;
    let hdr = Header {
        tagged: proto & TAGGED != 0,
        source, target,
        ack_required: flags & ACK_REQUIRED != 0,
        res_required: flags & RES_REQUIRED != 0,
        sequence, msg_type
    };
    let msg = Message::read_payload(msg_type, &bytes[HEADER_SIZE..size])?;
    Ok((hdr, msg))
}

/// Parses a MAC address of the form `d0:73:d5:01:02:03`.
///
/// Dashes are accepted as separators too.
pub fn parse_mac(mac: &str) -> Result<[u8; 6]> {
    let mut ret = [0; 6];
    let mut parts = mac.trim().split(|c| c == ':' || c == '-');
    for byte in ret.iter_mut() {
        let part = parts.next()
            .ok_or_else(|| ProtoError::InvalidMac(mac.into()))?;
        if part.len() != 2 {
            Err(ProtoError::InvalidMac(mac.into()))?
        }
        *byte = u8::from_str_radix(part, 16)
            .map_err(|_| ProtoError::InvalidMac(mac.into()))?;
    }
    if parts.next().is_some() {
        Err(ProtoError::InvalidMac(mac.into()))?
    }
    Ok(ret)
}

fn write_label(buf: &mut Vec<u8>, label: &str) {
    let mut data = [0; LABEL_SIZE];
    let bytes = label.as_bytes();
    let len = bytes.len().min(LABEL_SIZE);
    data[..len].copy_from_slice(&bytes[..len]);
    buf.extend_from_slice(&data);
}
fn write_hsbk(buf: &mut Vec<u8>, c: Hsbk) {
    for x in &[c.hue, c.saturation, c.brightness, c.kelvin] {
        buf.extend_from_slice(&x.to_le_bytes());
    }
}

struct Reader<'a> {
    buf: &'a [u8]
}
impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.buf.len() < n {
            Err(ProtoError::MalformedMessage("payload too short"))?
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }
    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }
    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
    fn u64(&mut self) -> Result<u64> {
        let mut b = [0; 8];
        b.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(b))
    }
    fn hsbk(&mut self) -> Result<Hsbk> {
        Ok(Hsbk {
            hue: self.u16()?,
            saturation: self.u16()?,
            brightness: self.u16()?,
            kelvin: self.u16()?
        })
    }
    fn label(&mut self) -> Result<String> {
        let data = self.take(LABEL_SIZE)?;
        let end = data.iter()
            .position(|&b| b == 0)
            .unwrap_or(LABEL_SIZE);
        Ok(String::from_utf8_lossy(&data[..end]).into_owned())
    }
}
