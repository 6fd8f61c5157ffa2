//! Error handling.

pub use failure::Error;
use failure_derive::Fail;
use tspl_util::impl_from_for_error;
use tspl_util::rpc::RpcError;
use lifx_proto::errors::ProtoError;

/// Error that could occur during an alert run.
#[derive(Fail, Debug)]
pub enum AmpelError {
    /// TfL had nothing to say about the line; it probably doesn't exist.
    #[fail(display = "unknown line '{}'", _0)]
    UnknownLine(String),
    /// Error talking to the TfL API.
    #[fail(display = "TfL API: {}", _0)]
    Rpc(RpcError),
    /// Error talking to the light.
    #[fail(display = "light: {}", _0)]
    Light(ProtoError)
}

pub type AmpelResult<T, E = AmpelError> = ::std::result::Result<T, E>;
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

impl_from_for_error!(AmpelError,
                     RpcError => Rpc,
                     ProtoError => Light);
