use super::*;

#[test]
fn analytics_detail_prefers_entry_event() {
    let entry = MenuEntry {
        title: "My uploads".to_owned(),
        analytics_event: Some("UserUploads".to_owned()),
        ..MenuEntry::default()
    };
    let detail = entry_analytics_detail("user", &entry);
    assert_eq!(detail, serde_json::json!({ "event": "UserUploads", "label": "My uploads" }));
}

#[test]
fn analytics_detail_falls_back_to_menu_name() {
    let entry = MenuEntry { title: "Log in".to_owned(), ..MenuEntry::default() };
    let detail = entry_analytics_detail("signedOut", &entry);
    assert_eq!(detail["event"], "signedOut");
    assert_eq!(detail["label"], "Log in");
}
