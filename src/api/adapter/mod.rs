use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::common::data::Simulation;

#[cfg(feature = "remote")]
pub mod remote;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("cannot serialize JSON: {0}")]
    JsonSerializationError(serde_json::error::Error),
    #[error("cannot deserialize JSON: {0}")]
    JsonDeserializationError(serde_json::error::Error),
    #[error("invalid admin URL: {0}")]
    InvalidUrl(String),
    #[error("adapter error: {0}")]
    UpstreamError(String),
    #[error("cannot ping Hoverfly: {0}")]
    PingError(String),
}

/// The modes a Hoverfly instance can run in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Simulate,
    Capture,
    Spy,
    Synthesize,
    Modify,
    Diff,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Mode::Simulate => "simulate",
            Mode::Capture => "capture",
            Mode::Spy => "spy",
            Mode::Synthesize => "synthesize",
            Mode::Modify => "modify",
            Mode::Diff => "diff",
        };
        f.write_str(name)
    }
}

/// Talks to the admin API of a Hoverfly instance.
#[async_trait]
pub trait HoverflyAdapter {
    fn admin_url(&self) -> &Url;

    async fn ping(&self) -> Result<(), AdapterError>;

    async fn import_simulation(&self, simulation: &Simulation) -> Result<(), AdapterError>;
    async fn export_simulation(&self) -> Result<Simulation, AdapterError>;
    async fn delete_simulation(&self) -> Result<(), AdapterError>;

    async fn set_mode(&self, mode: Mode) -> Result<(), AdapterError>;
}
