//! Fetching line status from the TfL Unified API.

use tfl_types::Line;
use tspl_util::rpc::{ApiClient, RpcError};
use log::*;

use crate::config::Config;
use crate::errors::*;

/// Something that can tell us how a line is doing.
pub trait StatusProvider {
    /// Returns the current status of the line with id `line_id`.
    fn line_status(&self, line_id: &str) -> AmpelResult<Line>;
}

pub struct TflClient {
    rpc: ApiClient
}
impl TflClient {
    pub fn new(cfg: &Config) -> AmpelResult<Self> {
        let rpc = ApiClient::new(cfg.user_agent.clone(), "tfl",
                                 cfg.tfl_base_url.clone(), cfg.http_timeout())?;
        Ok(Self { rpc })
    }
}
impl StatusProvider for TflClient {
    fn line_status(&self, line_id: &str) -> AmpelResult<Line> {
        info!("Requesting status for line {}", line_id);
        let lines = match self.rpc.get::<_, Vec<Line>>(format!("/Line/{}/Status", line_id)) {
            Ok(l) => l,
            Err(RpcError::RemoteNotFound) => Err(AmpelError::UnknownLine(line_id.into()))?,
            Err(e) => Err(e)?
        };
        // We only ask about one line, so only the first entry matters.
        lines.into_iter()
            .next()
            .ok_or_else(|| AmpelError::UnknownLine(line_id.into()))
    }
}
