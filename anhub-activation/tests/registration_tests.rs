use anhub_activation::{registration_url, IssueTracker};
use anhub_license::Hwid;

fn hwid(s: &str) -> Hwid {
    Hwid::parse(s).unwrap()
}

// ── Config defaults ─────────────────────────────────────────────

#[test]
fn tracker_default() {
    let tracker = IssueTracker::default();
    assert_eq!(tracker.base_url, "https://github.com");
    assert_eq!(tracker.repo, "ANHub-Script/key-sytem");
}

#[test]
fn tracker_serde_roundtrip() {
    let tracker = IssueTracker {
        base_url: "https://git.example.com".to_string(),
        repo: "me/keys".to_string(),
    };
    let json = serde_json::to_string(&tracker).unwrap();
    let restored: IssueTracker = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.base_url, "https://git.example.com");
    assert_eq!(restored.repo, "me/keys");
}

// ── URL construction ────────────────────────────────────────────

#[test]
fn url_targets_new_issue_page() {
    let url = registration_url(&IssueTracker::default(), &hwid("ABCDE12345"));
    assert!(url.starts_with("https://github.com/ANHub-Script/key-sytem/issues/new?title="));
}

#[test]
fn title_is_register_key_marker() {
    let url = registration_url(&IssueTracker::default(), &hwid("ABCDE12345"));
    assert!(url.contains("title=REGISTER_KEY%3A%20ABCDE12345"));
}

#[test]
fn body_embeds_hwid_and_template() {
    let url = registration_url(&IssueTracker::default(), &hwid("ABCDE12345"));
    assert!(url.contains("body=Action%3A%20Register%20New%20Key%0AHWID%3A%20ABCDE12345%0A%0A"));
    assert!(url.contains("Please%20do%20not%20edit%20this%20issue."));
}

#[test]
fn hwid_with_reserved_characters_is_encoded() {
    let url = registration_url(&IssueTracker::default(), &hwid("AB&C=D 123"));
    // The raw HWID must not survive unencoded into the query string.
    assert!(!url.contains("AB&C=D 123"));
    assert!(url.contains("AB%26C%3DD%20123"));
}

#[test]
fn custom_tracker_host() {
    let tracker = IssueTracker {
        base_url: "https://git.example.com".to_string(),
        repo: "me/keys".to_string(),
    };
    let url = registration_url(&tracker, &hwid("ABCDE12345"));
    assert!(url.starts_with("https://git.example.com/me/keys/issues/new?"));
}
