use crate::{
    api::StubServiceBuilder,
    common::{
        data::Error::FileError,
        util::{read_file, write_file},
    },
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, path::PathBuf, str::FromStr};

/// The version tag written into the `meta` section of every exported simulation.
///
/// `v1` is the schema whose request fields are plain strings. Hoverfly upgrades such documents to
/// its current matcher format on import.
pub const SCHEMA_VERSION: &str = "v1";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSONConversionError: {0}")]
    JSONConversionError(#[from] serde_json::Error),
    #[error("cannot access simulation file: {0}")]
    FileError(String),
}

/// Multi-valued HTTP headers. Header names and the values of each header keep insertion order.
pub type Headers = IndexMap<String, Vec<String>>;

/// How Hoverfly compares a request against a [`RequestMatcher`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Fields are matched as given. This is what stubs declared with the DSL use.
    #[default]
    Template,
    /// Every field must match exactly, as for traffic Hoverfly captured itself.
    Recording,
}

/// Describes which incoming requests a stub applies to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestMatcher {
    pub(crate) request_type: RequestType,
    pub(crate) scheme: String,
    pub(crate) destination: String,
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) headers: Headers,
    pub(crate) body: String,
}

impl RequestMatcher {
    pub fn request_type(&self) -> RequestType {
        self.request_type
    }

    /// Either `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host (and optional port) of the stubbed service.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query string without a leading `?`, e.g. `Id=1&Id=2`.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// All values recorded for the header `name`, if any.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name).map(|values| values.as_slice())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Describes what a matched request is answered with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseTemplate {
    pub(crate) status: u16,
    pub(crate) body: String,
    pub(crate) headers: Headers,
    pub(crate) encoded_body: bool,
}

impl ResponseTemplate {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: String::new(),
            headers: Headers::new(),
            encoded_body: false,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// The response body. Holds base64 text when [`encoded_body`](Self::encoded_body) is `true`.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name).map(|values| values.as_slice())
    }

    pub fn encoded_body(&self) -> bool {
        self.encoded_body
    }
}

impl Default for ResponseTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// A single stub: a request matcher and the response template it answers with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestResponsePair {
    request: RequestMatcher,
    response: ResponseTemplate,
}

impl RequestResponsePair {
    pub(crate) fn new(request: RequestMatcher, response: ResponseTemplate) -> Self {
        Self { request, response }
    }

    pub fn request(&self) -> &RequestMatcher {
        &self.request
    }

    pub fn response(&self) -> &ResponseTemplate {
        &self.response
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
struct SimulationData {
    #[serde(default)]
    pairs: Vec<RequestResponsePair>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
struct SimulationMeta {
    #[serde(rename = "schemaVersion")]
    schema_version: String,
}

impl Default for SimulationMeta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// The document a Hoverfly instance imports: every stubbed pair, in the order they were declared.
///
/// ```rust
/// use hoverfly_dsl::prelude::*;
///
/// let simulation = Simulation::from_services([
///     service("www.my-test.com").get("/a").will_return(response()),
///     service("https://www.other.com").post("/b").will_return(created("/b/1")),
/// ]);
///
/// assert_eq!(simulation.pairs().len(), 2);
/// assert!(simulation.to_json().unwrap().contains("\"schemaVersion\":\"v1\""));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Simulation {
    data: SimulationData,
    #[serde(default)]
    meta: SimulationMeta,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: Vec<RequestResponsePair>) -> Self {
        Self {
            data: SimulationData { pairs },
            meta: SimulationMeta::default(),
        }
    }

    /// Collects the pairs of all services, keeping service order and pair order within each.
    pub fn from_services<I: IntoIterator<Item = StubServiceBuilder>>(services: I) -> Self {
        services
            .into_iter()
            .fold(Self::new(), |simulation, service| simulation.with_service(service))
    }

    /// Appends the pairs of another service behind the ones already present.
    pub fn with_service(mut self, service: StubServiceBuilder) -> Self {
        self.data.pairs.extend(service.into_pairs());
        self
    }

    pub fn pairs(&self) -> &[RequestResponsePair] {
        &self.data.pairs
    }

    pub fn schema_version(&self) -> &str {
        &self.meta.schema_version
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the simulation as JSON, creating missing parent directories.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, Error> {
        let json = self.to_json_pretty()?;
        let path = write_file(path, json.as_bytes(), true)
            .map_err(|err| FileError(err.to_string()))?;

        tracing::debug!(
            "Wrote simulation with {} pairs to '{}'",
            self.data.pairs.len(),
            path.to_string_lossy()
        );

        Ok(path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = read_file(path).map_err(|err| FileError(err.to_string()))?;
        let content = String::from_utf8(content).map_err(|err| FileError(err.to_string()))?;
        Self::from_json(&content)
    }
}

/// Represents an HTTP method.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
    PATCH,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "CONNECT" => Ok(Method::CONNECT),
            "OPTIONS" => Ok(Method::OPTIONS),
            "TRACE" => Ok(Method::TRACE),
            "PATCH" => Ok(Method::PATCH),
            _ => Err(format!("Invalid HTTP method {}", input)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
