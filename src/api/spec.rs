use crate::{
    api::StubServiceBuilder,
    common::{
        data::{RequestMatcher, RequestResponsePair, ResponseTemplate},
        util::encode_base64,
    },
    Method,
};
use serde::Serialize;
use serde_json::Value;

/// Describes the request side of a stub.
///
/// A `RequestMatcherBuilder` is handed out by the verb methods of a [`StubServiceBuilder`]
/// (e.g. [`get`](StubServiceBuilder::get)) and already carries the scheme, destination, method
/// and path of that call. Further request attributes are chained onto it until
/// [`will_return`](RequestMatcherBuilder::will_return) hands control back to the service.
///
/// ```rust
/// use hoverfly_dsl::prelude::*;
///
/// let service = service("www.my-test.com")
///     .get("/search")
///     .query_param("q", ["rust"])
///     .header("Accept", "application/json")
///     .will_return(success_json(serde_json::json!({ "hits": 0 })));
///
/// let request = service.request_response_pairs()[0].request();
/// assert_eq!(request.query(), "q=rust");
/// ```
pub struct RequestMatcherBuilder {
    service: StubServiceBuilder,
    request: RequestMatcher,
    query_params: Vec<(String, Vec<String>)>,
}

impl RequestMatcherBuilder {
    pub(crate) fn new(service: StubServiceBuilder, method: Method, path: String) -> Self {
        let request = RequestMatcher {
            scheme: service.scheme().to_string(),
            destination: service.destination().to_string(),
            ..RequestMatcher::default()
        };

        Self {
            service,
            request,
            query_params: Vec::new(),
        }
        .method(method)
        .path(path)
    }

    /// Sets the HTTP method the request must use.
    pub fn method(mut self, method: Method) -> Self {
        self.request.method = method.to_string();
        self
    }

    /// Sets the request path. The path is stored verbatim, so a leading slash has to be part
    /// of the argument.
    pub fn path<IntoString: Into<String>>(mut self, path: IntoString) -> Self {
        self.request.path = path.into();
        self
    }

    /// Adds one or more values for the query parameter `name`.
    ///
    /// Values are rendered with their `Display` implementation and are not URL-encoded.
    /// Calling this method again with the same name appends to the values recorded so far;
    /// the parameter keeps the position of its first occurrence.
    ///
    /// ```rust
    /// use hoverfly_dsl::prelude::*;
    ///
    /// let service = service("www.my-test.com")
    ///     .get("/test")
    ///     .query_param("Id", [1, 2, 3])
    ///     .will_return(response());
    ///
    /// assert_eq!(service.request_response_pairs()[0].request().query(), "Id=1&Id=2&Id=3");
    /// ```
    pub fn query_param<KeyString, Values, Item>(mut self, name: KeyString, values: Values) -> Self
    where
        KeyString: Into<String>,
        Values: IntoIterator<Item = Item>,
        Item: ToString,
    {
        let name = name.into();
        let values = values.into_iter().map(|v| v.to_string());

        match self.query_params.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => existing.extend(values),
            None => self.query_params.push((name, values.collect())),
        }

        self.request.query = render_query(&self.query_params);
        self
    }

    /// Adds a value for the header `name`. Repeated calls with the same name accumulate values
    /// in call order.
    pub fn header<KeyString: Into<String>, ValueString: Into<String>>(
        mut self,
        name: KeyString,
        value: ValueString,
    ) -> Self {
        self.request
            .headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Sets the expected request body, replacing any body set before.
    pub fn body<IntoString: Into<String>>(mut self, body: IntoString) -> Self {
        self.request.body = body.into();
        self
    }

    /// Sets the expected request body to the JSON representation of `body`.
    pub fn json_body<JsonValue: Into<Value>>(self, body: JsonValue) -> Self {
        self.body(body.into().to_string())
    }

    /// Applies a function that bundles several request settings, without breaking the chain.
    pub fn and(self, func: impl FnOnce(RequestMatcherBuilder) -> RequestMatcherBuilder) -> Self {
        func(self)
    }

    /// Returns a snapshot of the request matcher configured so far.
    pub fn build(&self) -> RequestMatcher {
        self.request.clone()
    }

    /// Completes the stub: pairs the request matcher with `response`, appends the pair to the
    /// owning service and returns that service so that the next stub can be declared.
    pub fn will_return<R: Into<ResponseTemplate>>(self, response: R) -> StubServiceBuilder {
        let pair = RequestResponsePair::new(self.request, response.into());
        self.service.add_pair(pair)
    }
}

fn render_query(params: &[(String, Vec<String>)]) -> String {
    params
        .iter()
        .flat_map(|(key, values)| values.iter().map(move |value| format!("{}={}", key, value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Starts a new response template with status 200, an empty body and no headers.
pub fn response() -> ResponseBuilder {
    ResponseBuilder::new()
}

/// Describes the response side of a stub.
///
/// Use [`response`] or one of the functions in [`creators`](crate::creators) to obtain one.
/// The builder is consumed when it is turned into a [`ResponseTemplate`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response_template: ResponseTemplate,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            response_template: ResponseTemplate::new(),
        }
    }

    /// Sets the HTTP status code.
    pub fn status(mut self, status: u16) -> Self {
        self.response_template.status = status;
        self
    }

    /// Sets a plain text body. This clears the encoded-body flag.
    pub fn body<IntoString: Into<String>>(mut self, body: IntoString) -> Self {
        self.response_template.body = body.into();
        self.response_template.encoded_body = false;
        self
    }

    /// Sets a binary body. The bytes are stored base64-encoded and the template is flagged
    /// as carrying an encoded body.
    ///
    /// ```rust
    /// use hoverfly_dsl::prelude::*;
    ///
    /// let template = response().body_bytes(vec![0xde_u8, 0xad, 0xbe, 0xef]).build();
    ///
    /// assert_eq!(template.body(), "3q2+7w==");
    /// assert!(template.encoded_body());
    /// ```
    pub fn body_bytes<SliceRef: AsRef<[u8]>>(mut self, body: SliceRef) -> Self {
        self.response_template.body = encode_base64(body);
        self.response_template.encoded_body = true;
        self
    }

    /// Sets the body to the JSON representation of `body`.
    ///
    /// The `Content-Type` header is left untouched; see
    /// [`success_json`](crate::creators::success_json) for a variant that sets it.
    pub fn json_body<V: Into<Value>>(self, body: V) -> Self {
        self.body(body.into().to_string())
    }

    /// Sets the body to the JSON representation of a serializable object.
    pub fn json_body_obj<T: Serialize>(self, body: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(body)?;
        Ok(self.json_body(value))
    }

    /// Adds a response header. Repeated calls with the same name accumulate values.
    pub fn header<KeyString: Into<String>, ValueString: Into<String>>(
        mut self,
        name: KeyString,
        value: ValueString,
    ) -> Self {
        self.response_template
            .headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Marks the body as base64 encoded (or not) without touching its content.
    pub fn encoded_body(mut self, encoded: bool) -> Self {
        self.response_template.encoded_body = encoded;
        self
    }

    pub fn and(self, func: impl FnOnce(ResponseBuilder) -> ResponseBuilder) -> Self {
        func(self)
    }

    pub fn build(self) -> ResponseTemplate {
        self.response_template
    }
}

impl From<ResponseBuilder> for ResponseTemplate {
    fn from(builder: ResponseBuilder) -> Self {
        builder.build()
    }
}
