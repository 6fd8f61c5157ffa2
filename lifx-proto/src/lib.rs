//! A small client for the LIFX LAN protocol.
//!
//! Only does what trainsplorer needs: setting a single bulb's colour, and
//! reading back its label, location and colour. Bulbs are addressed directly
//! by MAC and IP; there's no discovery.

use std::net::{IpAddr, SocketAddr, UdpSocket};
use std::time::{Duration, Instant};
use std::io::ErrorKind;
use log::*;

pub mod color;
pub mod errors;
pub mod wire;

pub use crate::color::{Hsbk, RED, ORANGE, GREEN};
use crate::errors::{Result, ProtoError};
use crate::wire::{Header, Message};
use crate::wire::msg_type::*;

/// The UDP port bulbs listen on.
pub const DEFAULT_PORT: u16 = 56700;

/// Tunables for talking to a `Light`.
#[derive(Clone, Debug)]
pub struct LightOptions {
    pub port: u16,
    /// How long to wait for a reply to each datagram sent.
    pub timeout: Duration,
    /// How many datagrams to send before giving up on a reply.
    pub attempts: u32
}

/// A single bulb on the local network.
pub struct Light {
    mac: [u8; 6],
    addr: SocketAddr,
    socket: UdpSocket,
    source: u32,
    sequence: u8,
    opts: LightOptions
}
impl Light {
    /// Makes a `Light` from a MAC address (e.g. `d0:73:d5:01:02:03`) and an IP address.
    pub fn with_options(mac: &str, ip: &str, opts: LightOptions) -> Result<Self> {
        let mac = wire::parse_mac(mac)?;
        let ip: IpAddr = ip.trim().parse()
            .map_err(|_| ProtoError::InvalidAddress(ip.into()))?;
        let addr = SocketAddr::new(ip, opts.port);
        let bind_addr = match ip {
            IpAddr::V4(_) => "0.0.0.0:0",
            IpAddr::V6(_) => "[::]:0"
        };
        let socket = UdpSocket::bind(bind_addr)?;
        // Zero is reserved for "broadcast the reply", which we don't want.
        let source = std::process::id().max(2);
        debug!("Light {} at {} (source {})", fmt_mac(&mac), addr, source);
        Ok(Self {
            mac, addr, socket, source,
            sequence: 0,
            opts
        })
    }
    /// Sets the bulb's colour, and waits for it to acknowledge.
    pub fn set_color(&mut self, color: Hsbk, duration: u32) -> Result<()> {
        info!("Setting {} to {}", self.addr, color);
        self.exchange(Message::LightSetColor { color, duration }, ACKNOWLEDGEMENT)?;
        Ok(())
    }
    pub fn get_label(&mut self) -> Result<String> {
        match self.exchange(Message::GetLabel, STATE_LABEL)? {
            Message::StateLabel { label } => Ok(label),
            x => Err(unexpected(STATE_LABEL, &x))
        }
    }
    /// Returns the label of the location group the bulb belongs to.
    pub fn get_location(&mut self) -> Result<String> {
        match self.exchange(Message::GetLocation, STATE_LOCATION)? {
            Message::StateLocation { label, .. } => Ok(label),
            x => Err(unexpected(STATE_LOCATION, &x))
        }
    }
    pub fn get_color(&mut self) -> Result<Hsbk> {
        match self.exchange(Message::LightGet, LIGHT_STATE)? {
            Message::LightState { color, .. } => Ok(color),
            x => Err(unexpected(LIGHT_STATE, &x))
        }
    }
    /// Sends `msg`, retransmitting until a reply of type `expect` arrives.
    ///
    /// If `expect` is an acknowledgement, the message asks for one; otherwise
    /// it asks for a response.
    fn exchange(&mut self, msg: Message, expect: u16) -> Result<Message> {
        self.sequence = self.sequence.wrapping_add(1);
        let mut hdr = Header::for_target(self.mac, self.source, self.sequence, msg.msg_type());
        hdr.ack_required = expect == ACKNOWLEDGEMENT;
        hdr.res_required = !hdr.ack_required;
        let data = wire::encode(&hdr, &msg);
        let attempts = self.opts.attempts.max(1);
        for attempt in 1..=attempts {
            debug!("Sending type {} (seq {}) to {}, attempt {}/{}",
                   hdr.msg_type, hdr.sequence, self.addr, attempt, attempts);
            self.socket.send_to(&data, self.addr)?;
            if let Some(reply) = self.await_reply(hdr.sequence, expect)? {
                return Ok(reply);
            }
        }
        warn!("No reply from {} for message type {}", self.addr, hdr.msg_type);
        Err(ProtoError::Timeout(self.addr, attempts))
    }
    fn await_reply(&mut self, sequence: u8, expect: u16) -> Result<Option<Message>> {
        let deadline = Instant::now() + self.opts.timeout;
        let mut buf = [0; 1024];
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            self.socket.set_read_timeout(Some(deadline - now))?;
            let (len, from) = match self.socket.recv_from(&mut buf) {
                Ok(x) => x,
                Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                    return Ok(None);
                },
                Err(e) => return Err(e.into())
            };
            if from.ip() != self.addr.ip() {
                continue;
            }
            let (hdr, msg) = match wire::decode(&buf[..len]) {
                Ok(x) => x,
                Err(e) => {
                    debug!("Ignoring bad datagram from {}: {}", from, e);
                    continue;
                }
            };
            if hdr.source != self.source || hdr.sequence != sequence || hdr.msg_type != expect {
                debug!("Ignoring type {} (seq {}) from {}", hdr.msg_type, hdr.sequence, from);
                continue;
            }
            return Ok(Some(msg));
        }
    }
}

fn unexpected(expected: u16, got: &Message) -> ProtoError {
    ProtoError::UnexpectedMessage {
        expected,
        got: got.msg_type()
    }
}
fn fmt_mac(mac: &[u8; 6]) -> String {
    mac.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}
