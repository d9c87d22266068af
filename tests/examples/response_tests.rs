use hoverfly_dsl::{prelude::*, ResponseTemplate};

fn response_of<R: Into<ResponseTemplate>>(r: R) -> ResponseTemplate {
    let service = service("www.my-test.com").get("/").will_return(r);
    service.request_response_pairs()[0].response().clone()
}

#[test]
fn success_response_test() {
    let response = response_of(success("Hello World", "plain/text"));

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "Hello World");
    assert_eq!(response.headers()["Content-Type"][0], "plain/text");
    assert_eq!(response.encoded_body(), false);
}

#[test]
fn default_response_test() {
    let response = response_of(response());

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "");
    assert!(response.headers().is_empty());
    assert_eq!(response.encoded_body(), false);
}

#[test]
fn prebuilt_template_is_accepted_test() {
    let template = not_found().body("nothing here").build();

    let response = response_of(template.clone());

    assert_eq!(response, template);
}

#[test]
fn binary_response_test() {
    let png_header: &[u8] = &[0x89, b'P', b'N', b'G'];

    let response = response_of(success_binary(png_header, "image/png"));

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "iVBORw==");
    assert_eq!(response.encoded_body(), true);
    assert_eq!(response.headers()["Content-Type"], vec!["image/png"]);
}

#[test]
fn encoded_flag_can_be_set_explicitly_test() {
    let response = response_of(response().body("SGVsbG8=").encoded_body(true));

    assert_eq!(response.body(), "SGVsbG8=");
    assert_eq!(response.encoded_body(), true);
}

#[test]
fn json_response_test() {
    let response = response_of(success_json(serde_json::json!({ "id": 7 })));

    assert_eq!(response.body(), r#"{"id":7}"#);
    assert_eq!(response.headers()["Content-Type"], vec!["application/json"]);
}

#[test]
fn error_responses_test() {
    assert_eq!(response_of(bad_request()).status(), 400);
    assert_eq!(response_of(unauthorized()).status(), 401);
    assert_eq!(response_of(forbidden()).status(), 403);
    assert_eq!(response_of(server_error()).status(), 500);
    assert_eq!(response_of(service_unavailable()).status(), 503);
    assert_eq!(response_of(with_status(429).header("Retry-After", "1")).status(), 429);
}

#[test]
fn reusable_response_settings_test() {
    fn json_no_cache(then: hoverfly_dsl::ResponseBuilder) -> hoverfly_dsl::ResponseBuilder {
        then.header("Content-Type", "application/json")
            .header("Cache-Control", "no-cache")
    }

    let response = response_of(response().status(202).and(json_no_cache));

    assert_eq!(response.status(), 202);
    assert_eq!(response.headers().len(), 2);
}
