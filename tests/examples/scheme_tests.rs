use hoverfly_dsl::prelude::*;

#[test]
fn https_scheme_test() {
    let service = service("https://www.my-test.com")
        .get("/")
        .will_return(response());

    let pair = &service.request_response_pairs()[0];
    assert_eq!(pair.request().destination(), "www.my-test.com");
    assert_eq!(pair.request().scheme(), "https");
}

#[test]
fn http_scheme_test() {
    let service = service("http://www.my-test.com")
        .get("/")
        .will_return(response());

    let pair = &service.request_response_pairs()[0];
    assert_eq!(pair.request().destination(), "www.my-test.com");
    assert_eq!(pair.request().scheme(), "http");
}

#[test]
fn default_scheme_test() {
    for destination in ["www.my-test.com", "localhost:8080", "10.0.0.1", "weird host"] {
        let service = service(destination).get("/").will_return(response());

        assert_eq!(service.scheme(), "http");
        assert_eq!(service.destination(), destination);

        let pair = &service.request_response_pairs()[0];
        assert_eq!(pair.request().destination(), destination);
        assert_eq!(pair.request().scheme(), "http");
    }
}

#[test]
fn scheme_is_inherited_by_every_stub_test() {
    let service = service("https://www.my-test.com")
        .get("/a")
        .will_return(response())
        .delete("/b")
        .will_return(response());

    for pair in service.request_response_pairs() {
        assert_eq!(pair.request().scheme(), "https");
        assert_eq!(pair.request().destination(), "www.my-test.com");
    }
}
