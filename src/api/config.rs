use crate::common::util::read_env;
use thiserror::Error;
use url::Url;

/// Port of the proxy itself. Matches the default of the Hoverfly binary.
pub const DEFAULT_PROXY_PORT: u16 = 8500;
/// Port of the admin API. Matches the default of the Hoverfly binary.
pub const DEFAULT_ADMIN_PORT: u16 = 8888;

const LOCALHOST: &str = "http://localhost";
const HOVERFLY_EXECUTABLE: &str = "hoverfly.exe";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Describes how to reach a Hoverfly instance.
///
/// All setters consume and return the configuration so they can be chained. Setters that
/// validate their input return a `Result` and leave nothing changed on failure.
///
/// A new configuration uses the Hoverfly binary's defaults: the admin API listens on
/// [`DEFAULT_ADMIN_PORT`] (8888) and the proxy on [`DEFAULT_PROXY_PORT`] (8500). Some other
/// Hoverfly clients use these two numbers the other way round.
///
/// ```rust
/// use hoverfly_dsl::HoverflyConfig;
///
/// let config = HoverflyConfig::new()
///     .use_remote_instance(Some("http://hoverfly.internal"), 8500, 8888)
///     .unwrap()
///     .set_proxy_localhost(true);
///
/// assert!(config.is_remote_instance());
/// assert_eq!(config.admin_url().unwrap().as_str(), "http://hoverfly.internal:8888/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HoverflyConfig {
    admin_port: u16,
    proxy_port: u16,
    is_remote_instance: bool,
    remote_host: Url,
    proxy_localhost: bool,
    hoverfly_base_path: String,
}

impl HoverflyConfig {
    pub fn new() -> Self {
        Self {
            admin_port: DEFAULT_ADMIN_PORT,
            proxy_port: DEFAULT_PROXY_PORT,
            is_remote_instance: false,
            remote_host: localhost(),
            proxy_localhost: false,
            hoverfly_base_path: String::new(),
        }
    }

    /// Builds a configuration from the `HOVERFLY_HOST`, `HOVERFLY_ADMIN_PORT` and
    /// `HOVERFLY_PROXY_PORT` environment variables. Setting `HOVERFLY_HOST` marks the
    /// configuration as pointing to a remote instance.
    pub fn from_env() -> Result<Self, Error> {
        let admin_port = parse_port("HOVERFLY_ADMIN_PORT", DEFAULT_ADMIN_PORT)?;
        let proxy_port = parse_port("HOVERFLY_PROXY_PORT", DEFAULT_PROXY_PORT)?;

        let config = Self::new()
            .set_admin_port(admin_port)
            .set_proxy_port(proxy_port);

        match std::env::var("HOVERFLY_HOST") {
            Ok(host) => config.use_remote_instance(Some(&host), proxy_port, admin_port),
            Err(_) => Ok(config),
        }
    }

    /// Points the configuration to an already running instance. `None` keeps `localhost`.
    ///
    /// `proxy_port` and `admin_port` replace the ports configured so far.
    pub fn use_remote_instance(
        self,
        remote_host: Option<&str>,
        proxy_port: u16,
        admin_port: u16,
    ) -> Result<Self, Error> {
        let remote_host = match remote_host {
            Some(host) => parse_remote_host(host)?,
            None => localhost(),
        };

        Ok(Self {
            is_remote_instance: true,
            remote_host,
            proxy_port,
            admin_port,
            ..self
        })
    }

    pub fn set_proxy_port(mut self, port: u16) -> Self {
        self.proxy_port = port;
        self
    }

    pub fn set_admin_port(mut self, port: u16) -> Self {
        self.admin_port = port;
        self
    }

    /// Sets the URL of a running instance. Fails if `remote_host` is not an absolute
    /// `http`/`https` URL with a host.
    pub fn set_remote_host(mut self, remote_host: &str) -> Result<Self, Error> {
        self.remote_host = parse_remote_host(remote_host)?;
        Ok(self)
    }

    /// Whether requests to localhost are routed through the proxy as well.
    pub fn set_proxy_localhost(mut self, proxy_localhost: bool) -> Self {
        self.proxy_localhost = proxy_localhost;
        self
    }

    /// Sets the directory holding the Hoverfly executable. A trailing executable file name is
    /// removed, so both the directory and the path to the binary are accepted.
    pub fn set_hoverfly_base_path(mut self, hoverfly_base_path: &str) -> Result<Self, Error> {
        if hoverfly_base_path.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "the Hoverfly base path must not be empty".to_string(),
            ));
        }

        self.hoverfly_base_path = hoverfly_base_path.replace(HOVERFLY_EXECUTABLE, "");
        Ok(self)
    }

    pub fn admin_port(&self) -> u16 {
        self.admin_port
    }

    pub fn proxy_port(&self) -> u16 {
        self.proxy_port
    }

    pub fn is_remote_instance(&self) -> bool {
        self.is_remote_instance
    }

    pub fn remote_host(&self) -> &Url {
        &self.remote_host
    }

    pub fn proxy_localhost(&self) -> bool {
        self.proxy_localhost
    }

    pub fn hoverfly_base_path(&self) -> &str {
        &self.hoverfly_base_path
    }

    /// The base URL of the admin API: the remote host with the admin port.
    pub fn admin_url(&self) -> Result<Url, Error> {
        with_port(&self.remote_host, self.admin_port)
    }

    /// The URL clients use as their HTTP proxy.
    pub fn proxy_url(&self) -> Result<Url, Error> {
        with_port(&self.remote_host, self.proxy_port)
    }
}

impl Default for HoverflyConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn localhost() -> Url {
    Url::parse(LOCALHOST).expect("cannot parse default remote host")
}

fn parse_remote_host(remote_host: &str) -> Result<Url, Error> {
    let url = Url::parse(remote_host).map_err(|err| {
        Error::InvalidArgument(format!("invalid remote host '{}': {}", remote_host, err))
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::InvalidArgument(format!(
            "remote host '{}' must be an http or https URL with a host",
            remote_host
        )));
    }

    Ok(url)
}

fn with_port(url: &Url, port: u16) -> Result<Url, Error> {
    let mut url = url.clone();
    url.set_port(Some(port))
        .map_err(|_| Error::InvalidArgument(format!("cannot set port {} on '{}'", port, url)))?;
    Ok(url)
}

fn parse_port(name: &str, default: u16) -> Result<u16, Error> {
    let value = read_env(name, &default.to_string());
    value
        .parse::<u16>()
        .map_err(|err| Error::InvalidArgument(format!("{}='{}': {}", name, value, err)))
}
