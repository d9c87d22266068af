#[cfg(feature = "remote")]
pub use adapter::remote::RemoteHoverflyAdapter;
pub use adapter::{AdapterError, HoverflyAdapter, Mode};
pub use config::HoverflyConfig;
pub use hoverfly::Hoverfly;
pub use service::{service, StubServiceBuilder};
pub use spec::{response, RequestMatcherBuilder, ResponseBuilder};

mod adapter;
pub mod config;
pub mod creators;
mod hoverfly;
mod service;
mod spec;
