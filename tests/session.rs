// End-to-end sessions: the real HTTP client against a mock Dog API, driven
// by scripted input.

use dog_browser_cli::api::{ApiClient, ApiConfig};
use dog_browser_cli::ui::{InteractionLoop, LinePrompter};
use mockito::{Matcher, Server};
use std::io::Cursor;
use std::time::Duration;

const CATALOG: &str = r#"{"message":{"hound":["afghan","basset"],"bulldog":[]},"status":"success"}"#;

fn run(base_url: String, input: &str) -> String {
    let api = ApiClient::with_config(ApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    let prompter = LinePrompter::new(Cursor::new(input.to_string()));
    let mut session = InteractionLoop::new(api, prompter, Vec::new());
    session.run().unwrap();
    let (_, _, out) = session.into_parts();
    String::from_utf8(out).unwrap()
}

#[test]
fn sub_breed_image_session() {
    let mut server = Server::new();
    let catalog = server
        .mock("GET", "/breeds/list/all")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CATALOG)
        .create();
    let image = server
        .mock("GET", "/breed/hound/afghan/images/random")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","message":"http://x/1.jpg"}"#)
        .expect(1)
        .create();

    let out = run(server.url(), "3\nhound\nafghan\n4\n");

    catalog.assert();
    image.assert();
    assert!(out.contains("Available sub-breeds for hound:"));
    assert!(out.contains("http://x/1.jpg"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn breed_without_sub_breeds_never_requests_an_image() {
    let mut server = Server::new();
    let _catalog = server
        .mock("GET", "/breeds/list/all")
        .with_status(200)
        .with_body(CATALOG)
        .create();
    let images = server
        .mock("GET", Matcher::Regex(r"^/breed/.*".into()))
        .expect(0)
        .create();

    let out = run(server.url(), "3\nbulldog\n4\n");

    images.assert();
    assert!(out.contains("The 'bulldog' breed does not have any sub-breeds."));
    assert!(!out.contains("Enter sub-breed"));
}

#[test]
fn image_failure_is_reported_and_session_continues() {
    let mut server = Server::new();
    let _catalog = server
        .mock("GET", "/breeds/list/all")
        .with_status(200)
        .with_body(CATALOG)
        .create();
    let _image = server
        .mock("GET", "/breed/hound/images/random")
        .with_status(503)
        .create();

    let out = run(server.url(), "2\nHOUND\n4\n");

    assert!(out.contains("Error: Could not get an image for hound"));
    assert_eq!(out.matches("What would you like to do?").count(), 2);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn unreachable_api_reports_and_returns_to_menu() {
    let out = run("http://127.0.0.1:1".into(), "1\n2\n4\n");

    assert_eq!(out.matches("Could not fetch breed list from API").count(), 2);
    assert!(out.contains("No breeds available to display."));
    assert!(out.contains("Unable to fetch breeds. Please try again later."));
    assert!(out.ends_with("Goodbye!\n"));
}
