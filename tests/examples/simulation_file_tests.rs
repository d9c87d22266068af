use hoverfly_dsl::prelude::*;
use serde_json::Value;
use std::{env, fs, process};

fn sample_simulation() -> Simulation {
    Simulation::from_services([service("www.my-test.com")
        .get("/test")
        .query_param("Id", [1, 2, 3])
        .header("Content-Type", "plain/text")
        .will_return(success("Hello World", "plain/text"))
        .post("/upload")
        .will_return(success_binary(b"\x00\x01", "application/octet-stream"))])
}

#[test]
fn simulation_json_document_test() {
    let json: Value = serde_json::from_str(&sample_simulation().to_json().unwrap()).unwrap();

    assert_eq!(json["meta"]["schemaVersion"], "v1");

    let pairs = json["data"]["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 2);

    assert_eq!(pairs[0]["request"]["requestType"], "template");
    assert_eq!(pairs[0]["request"]["scheme"], "http");
    assert_eq!(pairs[0]["request"]["destination"], "www.my-test.com");
    assert_eq!(pairs[0]["request"]["method"], "GET");
    assert_eq!(pairs[0]["request"]["path"], "/test");
    assert_eq!(pairs[0]["request"]["query"], "Id=1&Id=2&Id=3");
    assert_eq!(pairs[0]["request"]["headers"]["Content-Type"][0], "plain/text");
    assert_eq!(pairs[0]["response"]["status"], 200);
    assert_eq!(pairs[0]["response"]["body"], "Hello World");
    assert_eq!(pairs[0]["response"]["encodedBody"], false);

    assert_eq!(pairs[1]["request"]["method"], "POST");
    assert_eq!(pairs[1]["response"]["body"], "AAE=");
    assert_eq!(pairs[1]["response"]["encodedBody"], true);
}

#[test]
fn simulation_file_test() {
    let _ = env_logger::try_init();

    let dir = env::temp_dir().join(format!("hoverfly-dsl-{}", process::id()));
    let path = dir.join("nested").join("simulation.json");

    let simulation = sample_simulation();
    let written = simulation.write_to_file(&path).unwrap();
    assert_eq!(written, path);

    let read = Simulation::read_from_file(&path).unwrap();
    assert_eq!(read, simulation);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn empty_simulation_test() {
    let simulation = Simulation::new();

    assert!(simulation.pairs().is_empty());
    assert_eq!(
        simulation.to_json().unwrap(),
        r#"{"data":{"pairs":[]},"meta":{"schemaVersion":"v1"}}"#
    );
}
