use std::sync::Arc;

#[cfg(feature = "remote")]
use crate::api::RemoteHoverflyAdapter;
use crate::{
    api::{AdapterError, HoverflyAdapter, HoverflyConfig, Mode, StubServiceBuilder},
    common::{data::Simulation, util::with_retry},
};

/// A handle to a running Hoverfly instance.
///
/// `Hoverfly` neither starts nor stops the proxy. It submits the stubs declared with
/// [`service`](crate::service) to whatever instance its [`HoverflyConfig`] points to.
pub struct Hoverfly {
    config: HoverflyConfig,
    adapter: Arc<dyn HoverflyAdapter + Send + Sync>,
}

impl Hoverfly {
    /// Connects to the admin API described by `config`.
    /// **Note**: This method requires the feature `remote` to be enabled.
    #[cfg(feature = "remote")]
    pub fn new(config: HoverflyConfig) -> Result<Self, AdapterError> {
        let adapter = RemoteHoverflyAdapter::from_config(&config)?;
        Ok(Self::with_adapter(config, Arc::new(adapter)))
    }

    pub fn with_adapter(
        config: HoverflyConfig,
        adapter: Arc<dyn HoverflyAdapter + Send + Sync>,
    ) -> Self {
        Self { config, adapter }
    }

    pub fn config(&self) -> &HoverflyConfig {
        &self.config
    }

    /// Pings the admin API until it answers, giving up after `retries` additional attempts.
    pub async fn wait_until_ready(&self, retries: usize) -> Result<(), AdapterError> {
        with_retry(retries, || self.adapter.ping()).await
    }

    /// Imports the stubs of all `services` as a single simulation and switches the instance
    /// into simulate mode.
    pub async fn simulate<I>(&self, services: I) -> Result<Simulation, AdapterError>
    where
        I: IntoIterator<Item = StubServiceBuilder>,
    {
        let simulation = Simulation::from_services(services);
        self.import(&simulation).await?;
        self.adapter.set_mode(Mode::Simulate).await?;
        Ok(simulation)
    }

    pub async fn import(&self, simulation: &Simulation) -> Result<(), AdapterError> {
        self.adapter.import_simulation(simulation).await
    }

    pub async fn export(&self) -> Result<Simulation, AdapterError> {
        self.adapter.export_simulation().await
    }

    /// Removes every pair from the instance.
    pub async fn reset(&self) -> Result<(), AdapterError> {
        self.adapter.delete_simulation().await
    }

    pub async fn set_mode(&self, mode: Mode) -> Result<(), AdapterError> {
        self.adapter.set_mode(mode).await
    }
}
