use super::*;

const CONFIG_A1: &str = "eyJhIjoxfQ==";
const MENUS_B64: &str = "eyJzaWduZWRPdXQiOlt7InRpdGxlIjoiTG9nIGluIiwidXJsIjoiL2FjY291bnQvbG9naW4ifV0sInVzZXIiOlt7ImxhYmVsIjoiTXkgdXBsb2FkcyIsInVybCI6Ii9kZXRhaWxzL0BtZSIsImFuYWx5dGljc0V2ZW50IjoiVXNlclVwbG9hZHMifV0sIm1vcmUiOlt7InRpdGxlIjoiQWJvdXQiLCJ1cmwiOiIvYWJvdXQifV0sImF1ZGlvIjp7ImhlYWRpbmciOiJBdWRpbyJ9fQ==";

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_point_at_archive_hosts() {
    let attrs = TopNavAttrs::default();
    assert_eq!(attrs.base_host, "https://archive.org");
    assert_eq!(attrs.media_base_host, "https://archive.org");
    assert_eq!(attrs.user_profile_image_path, "/services/img/user/profile");
    assert!(!attrs.hide_search);
    assert!(!attrs.is_signed_in());
    assert!(!attrs.allow_secondary_identity_slot());
}

// =============================================================
// Encoded attributes
// =============================================================

#[test]
fn config_is_decoded_on_write() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("config", Some(CONFIG_A1)).expect("config");
    assert_eq!(attrs.config.0.get("a"), Some(&serde_json::json!(1)));
}

#[test]
fn invalid_config_keeps_previous_value() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("config", Some(CONFIG_A1)).expect("config");
    let err = attrs.set_attribute("config", Some("!!not base64!!")).expect_err("should fail");
    assert!(matches!(err, AttributeError::Decode { name: "config", .. }));
    assert_eq!(attrs.config.0.get("a"), Some(&serde_json::json!(1)));
}

#[test]
fn invalid_menus_json_keeps_previous_value() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_menus_encoded(MENUS_B64).expect("menus");
    let before = attrs.clone();
    // "[1,2" decodes but is not JSON.
    let err = attrs.set_menus_encoded("WzEsMg==").expect_err("should fail");
    assert!(matches!(err, AttributeError::Decode { name: "menus", .. }));
    assert_eq!(attrs, before);
}

#[test]
fn search_query_is_base64_string() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("searchQuery", Some("aGVsbG8gd29ybGQ=")).expect("query");
    assert_eq!(attrs.search_query, "hello world");
}

#[test]
fn invalid_search_query_keeps_previous_value() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_search_query_encoded("aGVsbG8gd29ybGQ=").expect("query");
    assert!(attrs.set_search_query_encoded("%%").is_err());
    assert_eq!(attrs.search_query, "hello world");
}

#[test]
fn removing_encoded_attribute_restores_default() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("menus", Some(MENUS_B64)).expect("menus");
    attrs.set_attribute("menus", None).expect("remove");
    assert_eq!(attrs.menus, navattrs::MenuDefinitions::default());
}

// =============================================================
// Menu slices
// =============================================================

#[test]
fn menu_accessors_return_matching_slice() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_menus_encoded(MENUS_B64).expect("menus");

    let signed_out: Vec<&str> = attrs.signed_out_menu_items().iter().map(|e| e.title.as_str()).collect();
    let user: Vec<&str> = attrs.user_menu_items().iter().map(|e| e.title.as_str()).collect();
    let more: Vec<&str> = attrs.desktop_subnav_menu_items().iter().map(|e| e.title.as_str()).collect();

    assert_eq!(signed_out, ["Log in"]);
    assert_eq!(user, ["My uploads"]);
    assert_eq!(more, ["About"]);
}

#[test]
fn menu_accessors_empty_before_menus_set() {
    let attrs = TopNavAttrs::default();
    assert!(attrs.signed_out_menu_items().is_empty());
    assert!(attrs.user_menu_items().is_empty());
    assert!(attrs.desktop_subnav_menu_items().is_empty());
}

// =============================================================
// Plain attributes
// =============================================================

#[test]
fn attribute_names_accept_dom_camel_and_kebab_spellings() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("basehost", Some("https://a.example")).expect("lower");
    assert_eq!(attrs.base_host, "https://a.example");
    attrs.set_attribute("baseHost", Some("https://b.example")).expect("camel");
    assert_eq!(attrs.base_host, "https://b.example");
    attrs.set_attribute("base-host", Some("")).expect("kebab");
    assert_eq!(attrs.base_host, "");
}

#[test]
fn removing_plain_attribute_restores_default() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("mediabasehost", Some("https://media.example")).expect("set");
    attrs.set_attribute("mediabasehost", None).expect("remove");
    assert_eq!(attrs.media_base_host, DEFAULT_BASE_HOST);
}

#[test]
fn hide_search_follows_attribute_presence() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("hidesearch", Some("")).expect("set");
    assert!(attrs.hide_search);
    attrs.set_attribute("hidesearch", None).expect("remove");
    assert!(!attrs.hide_search);
}

#[test]
fn username_controls_signed_in() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("username", Some("@jdoe")).expect("set");
    assert!(attrs.is_signed_in());
    attrs.set_attribute("username", None).expect("remove");
    assert!(!attrs.is_signed_in());
}

#[test]
fn secondary_identity_slot_requires_allow_sentinel() {
    let mut attrs = TopNavAttrs::default();
    attrs.set_attribute("secondIdentitySlotMode", Some("allow")).expect("set");
    assert!(attrs.allow_secondary_identity_slot());
    attrs.set_attribute("secondIdentitySlotMode", Some("Allow")).expect("set");
    assert!(!attrs.allow_secondary_identity_slot());
}

#[test]
fn unknown_attribute_is_rejected() {
    let mut attrs = TopNavAttrs::default();
    let err = attrs.set_attribute("openMenu", Some("user")).expect_err("should fail");
    assert!(matches!(err, AttributeError::Unknown(name) if name == "openMenu"));
    assert_eq!(attrs, TopNavAttrs::default());
}

#[test]
fn every_observed_attribute_is_accepted() {
    let mut attrs = TopNavAttrs::default();
    for name in OBSERVED_ATTRIBUTES {
        attrs.set_attribute(name, None).expect("observed attribute");
    }
    assert_eq!(attrs, TopNavAttrs::default());
}

// =============================================================
// URLs
// =============================================================

#[test]
fn profile_image_url_without_last_modified() {
    let attrs = TopNavAttrs::default();
    assert_eq!(attrs.profile_image_url(), "https://archive.org/services/img/user/profile");
}

#[test]
fn profile_image_url_appends_last_modified() {
    let attrs = TopNavAttrs {
        media_base_host: "https://media.example".to_owned(),
        user_profile_last_modified: "1700000000".to_owned(),
        ..TopNavAttrs::default()
    };
    assert_eq!(attrs.profile_image_url(), "https://media.example/services/img/user/profile?1700000000");
}

#[test]
fn link_prefixes_relative_urls_only() {
    let attrs = TopNavAttrs::default();
    assert_eq!(attrs.link("/about"), "https://archive.org/about");
    assert_eq!(attrs.link("https://help.example/faq"), "https://help.example/faq");
    assert_eq!(attrs.link("//cdn.example/x"), "//cdn.example/x");
}
