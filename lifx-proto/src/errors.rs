//! Error handling.

use tspl_util::impl_from_for_error;
use failure_derive::Fail;
use std::io::Error as IoError;
use std::net::SocketAddr;

pub type Result<T> = ::std::result::Result<T, ProtoError>;

#[derive(Fail, Debug)]
pub enum ProtoError {
    #[fail(display = "Invalid MAC address '{}'", _0)]
    InvalidMac(String),
    #[fail(display = "Invalid IP address '{}'", _0)]
    InvalidAddress(String),
    #[fail(display = "Malformed message: {}", _0)]
    MalformedMessage(&'static str),
    #[fail(display = "Expected message type {}, got {}", expected, got)]
    UnexpectedMessage {
        expected: u16,
        got: u16
    },
    #[fail(display = "No reply from light at {} after {} attempts", _0, _1)]
    Timeout(SocketAddr, u32),
    #[fail(display = "I/O error: {}", _0)]
    Io(IoError)
}
impl_from_for_error!(ProtoError,
                     IoError => Io);
