use crate::{
    api::RequestMatcherBuilder,
    common::{data::RequestResponsePair, util::parse_destination},
    Method,
};

/// Starts declaring stubs for the service reachable under `destination`.
///
/// The destination may carry an `http://` or `https://` prefix. Without a prefix the scheme
/// defaults to `http` and the destination is used as the host as is.
///
/// ```rust
/// use hoverfly_dsl::prelude::*;
///
/// let service = service("https://www.my-test.com")
///     .get("/users")
///     .will_return(success("[]", "application/json"))
///     .delete("/users/1")
///     .will_return(no_content());
///
/// let pairs = service.request_response_pairs();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].request().scheme(), "https");
/// assert_eq!(pairs[1].request().method(), "DELETE");
/// ```
pub fn service<Destination: AsRef<str>>(destination: Destination) -> StubServiceBuilder {
    StubServiceBuilder::new(destination.as_ref())
}

/// Collects the stubs of a single service (scheme and host).
///
/// Every verb method consumes the service and returns a [`RequestMatcherBuilder`] that owns
/// it until [`will_return`](RequestMatcherBuilder::will_return) hands it back with one more
/// pair appended. Pairs are kept in declaration order.
#[derive(Debug, Clone)]
pub struct StubServiceBuilder {
    scheme: String,
    destination: String,
    pairs: Vec<RequestResponsePair>,
}

impl StubServiceBuilder {
    pub fn new(destination: &str) -> Self {
        let (scheme, destination) = parse_destination(destination);
        Self {
            scheme,
            destination,
            pairs: Vec::new(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn get<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::GET, path)
    }

    pub fn post<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::POST, path)
    }

    pub fn put<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::PUT, path)
    }

    pub fn delete<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::DELETE, path)
    }

    pub fn patch<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::PATCH, path)
    }

    pub fn head<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::HEAD, path)
    }

    pub fn options<IntoString: Into<String>>(self, path: IntoString) -> RequestMatcherBuilder {
        self.method(Method::OPTIONS, path)
    }

    /// Starts a stub for an arbitrary HTTP method.
    pub fn method<IntoString: Into<String>>(
        self,
        method: Method,
        path: IntoString,
    ) -> RequestMatcherBuilder {
        RequestMatcherBuilder::new(self, method, path.into())
    }

    /// The pairs declared so far, in declaration order.
    pub fn request_response_pairs(&self) -> &[RequestResponsePair] {
        &self.pairs
    }

    /// Hands the declared pairs over, e.g. to build a [`Simulation`](crate::Simulation).
    pub fn into_pairs(self) -> Vec<RequestResponsePair> {
        self.pairs
    }

    pub(crate) fn add_pair(mut self, pair: RequestResponsePair) -> Self {
        tracing::debug!(
            "Adding stub {} {}://{}{} (pair #{})",
            pair.request().method(),
            self.scheme,
            self.destination,
            pair.request().path(),
            self.pairs.len() + 1
        );
        self.pairs.push(pair);
        self
    }
}
