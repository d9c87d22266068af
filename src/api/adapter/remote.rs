use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, StatusCode};
use serde_json::json;
use url::Url;

use crate::{
    api::{
        adapter::{
            AdapterError::{
                self, InvalidUrl, JsonDeserializationError, JsonSerializationError, PingError,
                UpstreamError,
            },
            HoverflyAdapter, Mode,
        },
        HoverflyConfig,
    },
    common::{
        data::Simulation,
        http::{HoverflyHttpClient, HttpClient},
    },
};

const HEALTH_PATH: &str = "/api/health";
const SIMULATION_PATH: &str = "/api/v2/simulation";
const MODE_PATH: &str = "/api/v2/hoverfly/mode";

pub struct RemoteHoverflyAdapter {
    admin_url: Url,
    http_client: Arc<dyn HttpClient + Send + Sync + 'static>,
}

impl RemoteHoverflyAdapter {
    pub fn new(admin_url: Url, http_client: Arc<dyn HttpClient + Send + Sync + 'static>) -> Self {
        Self {
            admin_url,
            http_client,
        }
    }

    /// Creates an adapter for the admin API described by `config`.
    pub fn from_config(config: &HoverflyConfig) -> Result<Self, AdapterError> {
        let admin_url = config
            .admin_url()
            .map_err(|err| InvalidUrl(err.to_string()))?;

        Ok(Self::new(admin_url, Arc::new(HoverflyHttpClient::new())))
    }

    fn endpoint(&self, path: &str) -> Result<String, AdapterError> {
        self.admin_url
            .join(path)
            .map(|url| url.to_string())
            .map_err(|err| InvalidUrl(err.to_string()))
    }

    fn request(
        &self,
        method: &str,
        path: &str,
        body: Bytes,
    ) -> Result<Request<Bytes>, AdapterError> {
        let mut builder = Request::builder().method(method).uri(self.endpoint(path)?);

        if !body.is_empty() {
            builder = builder.header("content-type", "application/json");
        }

        builder.body(body).map_err(|e| UpstreamError(e.to_string()))
    }

    async fn do_request(&self, req: Request<Bytes>) -> Result<(u16, String), AdapterError> {
        tracing::debug!("Sending {} {} to Hoverfly", req.method(), req.uri());

        let response = self
            .http_client
            .send(req)
            .await
            .map_err(|e| UpstreamError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = String::from_utf8(response.body().to_vec())
            .map_err(|e| UpstreamError(e.to_string()))?;

        tracing::trace!("Hoverfly responded with status {}: {}", status, body);

        Ok((status, body))
    }

    async fn expect_ok(&self, req: Request<Bytes>, action: &str) -> Result<String, AdapterError> {
        let (status, body) = self.do_request(req).await?;

        if status != StatusCode::OK.as_u16() {
            return Err(UpstreamError(format!(
                "Could not {}. Expected response status 200 but was {} (response body = '{}')",
                action, status, body
            )));
        }

        Ok(body)
    }
}

#[async_trait]
impl HoverflyAdapter for RemoteHoverflyAdapter {
    fn admin_url(&self) -> &Url {
        &self.admin_url
    }

    async fn ping(&self) -> Result<(), AdapterError> {
        let request = self.request("GET", HEALTH_PATH, Bytes::new())?;

        let (status, body) = self
            .do_request(request)
            .await
            .map_err(|e| PingError(e.to_string()))?;

        if status != StatusCode::OK.as_u16() {
            return Err(PingError(format!(
                "Expected response status 200 but was {} (response body = '{}')",
                status, body
            )));
        }

        Ok(())
    }

    async fn import_simulation(&self, simulation: &Simulation) -> Result<(), AdapterError> {
        let json = serde_json::to_string(simulation).map_err(JsonSerializationError)?;
        let request = self.request("PUT", SIMULATION_PATH, Bytes::from(json))?;

        self.expect_ok(request, "import simulation").await?;

        tracing::info!(
            "Imported simulation with {} pairs into Hoverfly at {}",
            simulation.pairs().len(),
            self.admin_url
        );

        Ok(())
    }

    async fn export_simulation(&self) -> Result<Simulation, AdapterError> {
        let request = self.request("GET", SIMULATION_PATH, Bytes::new())?;
        let body = self.expect_ok(request, "export simulation").await?;

        serde_json::from_str(&body).map_err(JsonDeserializationError)
    }

    async fn delete_simulation(&self) -> Result<(), AdapterError> {
        let request = self.request("DELETE", SIMULATION_PATH, Bytes::new())?;
        self.expect_ok(request, "delete simulation").await?;
        Ok(())
    }

    async fn set_mode(&self, mode: Mode) -> Result<(), AdapterError> {
        let json = serde_json::to_string(&json!({ "mode": mode }))
            .map_err(JsonSerializationError)?;
        let request = self.request("PUT", MODE_PATH, Bytes::from(json))?;

        self.expect_ok(request, "set mode").await?;

        tracing::info!("Switched Hoverfly at {} to {} mode", self.admin_url, mode);
        Ok(())
    }
}
