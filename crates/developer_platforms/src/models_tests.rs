use super::*;
use serde_json::{from_str, to_string};

#[test]
fn test_pull_request_deserialization() {
    let json_str = r#"{"number": 7, "title": "Fix: bug", "draft": true, "body": null}"#;

    let pr: PullRequest = from_str(json_str).expect("Failed to deserialize PullRequest");

    assert_eq!(pr.number, 7);
    assert_eq!(pr.title, "Fix: bug");
    assert!(pr.draft);
    assert!(pr.body.is_none());
}

#[test]
fn test_pull_request_deserialization_without_draft() {
    let json_str = r#"{"number": 7, "title": "Fix: bug", "body": "text"}"#;

    let pr: PullRequest = from_str(json_str).expect("Failed to deserialize PullRequest");

    assert!(!pr.draft);
    assert_eq!(pr.body.as_deref(), Some("text"));
}

#[test]
fn test_pull_request_serialization() {
    let pr = PullRequest {
        number: 123,
        title: "[JIRA-123] Fix bug".to_string(),
        draft: false,
        body: None,
    };

    let json_str = to_string(&pr).expect("Failed to serialize PullRequest");

    let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("Failed to parse JSON");
    assert_eq!(parsed["number"], 123);
    assert_eq!(parsed["title"], "[JIRA-123] Fix bug");
}

#[test]
fn test_event_payload_from_json() {
    let json_str = r#"{
        "action": "edited",
        "number": 42,
        "pull_request": {
            "number": 42,
            "title": "old cached title",
            "base": {
                "ref": "main",
                "user": { "login": "octo-org", "id": 1 },
                "repo": { "name": "hello-world", "full_name": "octo-org/hello-world" }
            }
        }
    }"#;

    let payload = EventPayload::from_json(json_str).expect("Failed to parse event payload");

    let pr = payload.pull_request.expect("Expected pull request in payload");
    assert_eq!(pr.number, 42);
    assert_eq!(pr.base.user.login, "octo-org");
    assert_eq!(pr.base.repo.name, "hello-world");
}

#[test]
fn test_event_payload_without_pull_request() {
    let json_str = r#"{"ref": "refs/heads/main", "commits": []}"#;

    let payload = EventPayload::from_json(json_str).expect("Failed to parse event payload");

    assert!(payload.pull_request.is_none());
}

#[test]
fn test_event_payload_invalid_json() {
    let result = EventPayload::from_json("{ not json");

    assert!(matches!(result, Err(Error::InvalidResponse)));
}
