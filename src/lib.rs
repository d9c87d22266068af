//! `hoverfly-dsl` lets tests describe HTTP request/response pairs ("stubs") with a fluent API
//! and hands them to a [Hoverfly](https://hoverfly.io) proxy as a simulation.
//!
//! The crate has two parts:
//!
//! * a **DSL** that turns method chains into a serializable [`Simulation`], and
//! * a thin **client** for the Hoverfly admin API that imports such simulations into an already
//!   running instance (feature `remote`, enabled by default).
//!
//! Starting and stopping the Hoverfly binary is out of scope.
//!
//! # Getting Started
//!
//! ```rust
//! use hoverfly_dsl::prelude::*;
//!
//! let service = service("www.my-test.com")
//!     .get("/test")
//!     .query_param("Id", [1, 2, 3])
//!     .header("Content-Type", "plain/text")
//!     .body("")
//!     .will_return(success("Hello World", "plain/text"));
//!
//! let pair = &service.request_response_pairs()[0];
//! assert_eq!(pair.request().destination(), "www.my-test.com");
//! assert_eq!(pair.request().query(), "Id=1&Id=2&Id=3");
//! assert_eq!(pair.response().status(), 200);
//! ```
//!
//! # Services and stubs
//!
//! [`service`] parses a destination into scheme and host (`http` unless the destination starts
//! with `https://`). Each verb method ([`get`](StubServiceBuilder::get),
//! [`post`](StubServiceBuilder::post), ...) opens a [`RequestMatcherBuilder`] for one stub.
//! [`will_return`](RequestMatcherBuilder::will_return) closes the stub and returns the service,
//! so several stubs can be chained:
//!
//! ```rust
//! use hoverfly_dsl::prelude::*;
//!
//! let service = service("https://api.my-test.com")
//!     .post("/users")
//!     .json_body(serde_json::json!({ "name": "Hans" }))
//!     .will_return(created("/users/1"))
//!     .get("/users/1")
//!     .will_return(success_json(serde_json::json!({ "id": 1, "name": "Hans" })));
//!
//! assert_eq!(service.request_response_pairs().len(), 2);
//! ```
//!
//! # Submitting stubs
//!
//! With the `remote` feature, [`Hoverfly`] imports the stubs into a running instance:
//!
//! ```rust,no_run
//! use hoverfly_dsl::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let hoverfly = Hoverfly::new(HoverflyConfig::from_env()?)?;
//! hoverfly.wait_until_ready(5).await?;
//! hoverfly
//!     .simulate([service("www.my-test.com").get("/").will_return(response())])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Debugging
//! `hoverfly-dsl` logs with the `tracing` crate (including its `log` compatibility layer). For
//! example, with the `env_logger` backend, set `RUST_LOG=hoverfly_dsl=debug` and call
//! `env_logger::try_init()` at the start of your test.

pub use api::{
    creators, response, service, AdapterError, Hoverfly, HoverflyAdapter, HoverflyConfig, Mode,
    RequestMatcherBuilder, ResponseBuilder, StubServiceBuilder,
};
#[cfg(feature = "remote")]
pub use api::RemoteHoverflyAdapter;
pub use common::data::{
    Headers, Method, RequestMatcher, RequestResponsePair, RequestType, ResponseTemplate,
    Simulation, SCHEMA_VERSION,
};

mod api;
mod common;

pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        creators::*, response, service, Hoverfly, HoverflyConfig, Method, Mode,
        RequestResponsePair, ResponseTemplate, Simulation,
    };
}

pub mod config {
    //! Errors and defaults of [`HoverflyConfig`](crate::HoverflyConfig).
    pub use crate::api::config::{Error, DEFAULT_ADMIN_PORT, DEFAULT_PROXY_PORT};
}

pub mod data {
    //! Errors raised while (de)serializing simulations.
    pub use crate::common::data::Error;
}
