use super::*;
use crate::state::events::AnalyticsKind;

#[test]
fn detail_json_passes_payload_through() {
    let event = AnalyticsEvent::click(serde_json::json!({ "event": "TopNav", "label": "Donate" }));
    let text = detail_json(&event);
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(parsed, event.detail);
}

#[test]
fn detail_json_for_null_payload() {
    let event = AnalyticsEvent { kind: AnalyticsKind::Submit, detail: serde_json::Value::Null };
    assert_eq!(detail_json(&event), "null");
}
