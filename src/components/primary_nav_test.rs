use super::*;

#[test]
fn search_action_targets_base_host() {
    assert_eq!(search_action("https://archive.org"), "https://archive.org/search");
    assert_eq!(search_action(""), "/search");
}

#[test]
fn search_submit_detail_defaults_label_to_metadata() {
    let detail = search_submit_detail("cats", "");
    assert_eq!(detail["event"], "SearchSubmit");
    assert_eq!(detail["label"], "metadata");
    assert_eq!(detail["query"], "cats");
}

#[test]
fn search_submit_detail_uses_scope_as_label() {
    let detail = search_submit_detail("news", "TV");
    assert_eq!(detail["label"], "TV");
}

#[test]
fn media_type_ids_are_unique() {
    for (i, a) in MEDIA_TYPES.iter().enumerate() {
        for b in &MEDIA_TYPES[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

// =============================================================
// SearchDraft
// =============================================================

#[test]
fn search_draft_starts_from_host_query() {
    let draft = SearchDraft::new("cats");
    assert_eq!(draft.text, "cats");
}

#[test]
fn search_draft_keeps_edits_when_host_query_unchanged() {
    let mut draft = SearchDraft::new("cats");
    draft.text = "cats and dogs".to_owned();
    assert!(!draft.sync_host("cats"));
    assert_eq!(draft.text, "cats and dogs");
}

#[test]
fn search_draft_adopts_new_host_query() {
    let mut draft = SearchDraft::new("cats");
    draft.text = "cats and dogs".to_owned();
    assert!(draft.sync_host("birds"));
    assert_eq!(draft.text, "birds");
    assert!(!draft.sync_host("birds"));
}

#[test]
fn search_draft_unrelated_attribute_write_keeps_edits() {
    use crate::state::attrs::TopNavAttrs;

    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("searchquery", Some("Y2F0cw==")).expect("searchquery");
    let mut draft = SearchDraft::new(&attrs.search_query);
    draft.text = "cat videos".to_owned();

    attrs.set_attribute("username", Some("alice")).expect("username");
    draft.sync_host(&attrs.search_query);
    assert_eq!(draft.text, "cat videos");

    attrs.set_attribute("searchquery", Some("ZG9ncw==")).expect("searchquery");
    draft.sync_host(&attrs.search_query);
    assert_eq!(draft.text, "dogs");
}
