use hoverfly_dsl::prelude::*;

fn query_of(service: hoverfly_dsl::StubServiceBuilder) -> String {
    service.request_response_pairs()[0].request().query().to_string()
}

#[test]
fn multi_value_query_param_test() {
    let service = service("www.my-test.com")
        .get("/test")
        .query_param("Id", [1, 2, 3])
        .will_return(response());

    assert_eq!(query_of(service), "Id=1&Id=2&Id=3");
}

#[test]
fn no_query_params_test() {
    let service = service("www.my-test.com").get("/").will_return(response());

    assert_eq!(query_of(service), "");
}

#[test]
fn keys_keep_insertion_order_test() {
    let service = service("www.my-test.com")
        .get("/search")
        .query_param("q", ["rust"])
        .query_param("page", [2])
        .query_param("limit", [50])
        .will_return(response());

    assert_eq!(query_of(service), "q=rust&page=2&limit=50");
}

#[test]
fn repeated_key_appends_at_first_position_test() {
    let service = service("www.my-test.com")
        .get("/search")
        .query_param("tag", ["a"])
        .query_param("page", [1])
        .query_param("tag", ["b", "c"])
        .will_return(response());

    assert_eq!(query_of(service), "tag=a&tag=b&tag=c&page=1");
}

#[test]
fn values_are_not_url_encoded_test() {
    let service = service("www.my-test.com")
        .get("/search")
        .query_param("q", ["hello world", "a&b"])
        .will_return(response());

    assert_eq!(query_of(service), "q=hello world&q=a&b");
}

#[test]
fn mixed_value_types_test() {
    let ids: Vec<u64> = vec![10, 20];

    let service = service("www.my-test.com")
        .get("/items")
        .query_param("id", ids)
        .query_param("ratio", [0.5])
        .query_param("flag", [true])
        .will_return(response());

    assert_eq!(query_of(service), "id=10&id=20&ratio=0.5&flag=true");
}
