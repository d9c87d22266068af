use hoverfly_dsl::{prelude::*, RequestMatcherBuilder, StubServiceBuilder};

fn method_of(verb: impl FnOnce(StubServiceBuilder) -> RequestMatcherBuilder) -> String {
    let service = verb(service("www.my-test.com")).will_return(response());

    let pairs = service.request_response_pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].request().path(), "/");
    pairs[0].request().method().to_string()
}

#[test]
fn get_request_test() {
    assert_eq!(method_of(|s| s.get("/")), "GET");
}

#[test]
fn post_request_test() {
    assert_eq!(method_of(|s| s.post("/")), "POST");
}

#[test]
fn put_request_test() {
    assert_eq!(method_of(|s| s.put("/")), "PUT");
}

#[test]
fn delete_request_test() {
    assert_eq!(method_of(|s| s.delete("/")), "DELETE");
}

#[test]
fn additional_verbs_test() {
    assert_eq!(method_of(|s| s.patch("/")), "PATCH");
    assert_eq!(method_of(|s| s.head("/")), "HEAD");
    assert_eq!(method_of(|s| s.options("/")), "OPTIONS");
    assert_eq!(method_of(|s| s.method(Method::TRACE, "/")), "TRACE");
}

#[test]
fn method_can_be_overridden_test() {
    assert_eq!(method_of(|s| s.get("/").method(Method::POST)), "POST");
}

#[test]
fn path_is_kept_verbatim_test() {
    let service = service("www.my-test.com")
        .get("no/leading/slash")
        .will_return(response())
        .get("/trailing/")
        .path("/replaced//path")
        .will_return(response());

    let pairs = service.request_response_pairs();
    assert_eq!(pairs[0].request().path(), "no/leading/slash");
    assert_eq!(pairs[1].request().path(), "/replaced//path");
}
