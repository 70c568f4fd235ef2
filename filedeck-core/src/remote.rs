//! Stand-in for the absent file backend.
//!
//! Every delete goes through a [`FileRemote`]. The only implementation is
//! [`SimulatedRemote`], which sleeps for a fixed latency and can be told to
//! reject calls so failure handling is exercised.

use async_trait::async_trait;
use filedeck_common::FileId;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Latency of one simulated round trip.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Remote rejected delete of file {0}")]
    Rejected(FileId),
    #[error("Remote unavailable: {0}")]
    Unavailable(String),
}

/// Backend calls the store awaits before mutating.
#[async_trait]
pub trait FileRemote: Send + Sync {
    async fn delete(&self, id: FileId) -> Result<(), RemoteError>;
}

/// Which simulated calls fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RejectPolicy {
    #[default]
    Never,
    /// Every call fails with [`RemoteError::Unavailable`]
    Always,
    /// Calls for these ids fail with [`RemoteError::Rejected`]
    Ids(HashSet<FileId>),
}

/// Remote that only waits. Failures happen after the latency elapses.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    latency: Duration,
    reject: RejectPolicy,
}

impl SimulatedRemote {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            reject: RejectPolicy::Never,
        }
    }

    pub fn rejecting(mut self, reject: RejectPolicy) -> Self {
        self.reject = reject;
        self
    }

}

impl Default for SimulatedRemote {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl FileRemote for SimulatedRemote {
    async fn delete(&self, id: FileId) -> Result<(), RemoteError> {
        tokio::time::sleep(self.latency).await;
        match &self.reject {
            RejectPolicy::Never => {
                debug!("Simulated delete of file {} succeeded", id);
                Ok(())
            }
            RejectPolicy::Always => Err(RemoteError::Unavailable("simulated outage".to_string())),
            RejectPolicy::Ids(ids) if ids.contains(&id) => Err(RemoteError::Rejected(id)),
            RejectPolicy::Ids(_) => Ok(()),
        }
    }
}
