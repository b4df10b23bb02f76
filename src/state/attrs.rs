//! Externally settable attributes of the navigation bar.
//!
//! DESIGN
//! ======
//! Encoded attributes (`config`, `menus`, `searchquery`) are decoded once,
//! when written, and the decoded value is what gets stored. A write that
//! fails to decode is rejected as a whole: the previous value stays in place
//! and the error goes back to the caller.

#[cfg(test)]
#[path = "attrs_test.rs"]
mod attrs_test;

use navattrs::{Config, DecodeError, MenuDefinitions, MenuEntry};

pub const DEFAULT_BASE_HOST: &str = "https://archive.org";
pub const DEFAULT_PROFILE_IMAGE_PATH: &str = "/services/img/user/profile";
/// `secondidentityslotmode` value that enables the secondary logo slot.
pub const SECOND_IDENTITY_SLOT_ALLOW: &str = "allow";

/// DOM attribute names, lower-cased the way the browser reports them.
pub const OBSERVED_ATTRIBUTES: &[&str] = &[
    "basehost",
    "mediabasehost",
    "config",
    "menus",
    "searchquery",
    "hidesearch",
    "screenname",
    "username",
    "userprofileimagepath",
    "userprofilelastmodified",
    "secondidentityslotmode",
];

/// Error returned by [`TopNavAttrs::set_attribute`].
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("attribute {name} could not be decoded: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("unknown attribute: {0}")]
    Unknown(String),
}

/// Decoded attribute values supplied by the embedding page.
#[derive(Clone, Debug, PartialEq)]
pub struct TopNavAttrs {
    /// Base for navigation links; may be empty for relative links.
    pub base_host: String,
    /// Base for images such as the profile picture.
    pub media_base_host: String,
    pub config: Config,
    pub menus: MenuDefinitions,
    pub search_query: String,
    pub hide_search: bool,
    pub screen_name: String,
    pub username: String,
    pub user_profile_image_path: String,
    pub user_profile_last_modified: String,
    pub second_identity_slot_mode: String,
}

impl Default for TopNavAttrs {
    fn default() -> Self {
        Self {
            base_host: DEFAULT_BASE_HOST.to_owned(),
            media_base_host: DEFAULT_BASE_HOST.to_owned(),
            config: Config::default(),
            menus: MenuDefinitions::default(),
            search_query: String::new(),
            hide_search: false,
            screen_name: String::new(),
            username: String::new(),
            user_profile_image_path: DEFAULT_PROFILE_IMAGE_PATH.to_owned(),
            user_profile_last_modified: String::new(),
            second_identity_slot_mode: String::new(),
        }
    }
}

impl TopNavAttrs {
    /// Decode and store the `config` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Decode`]; `self.config` is left unchanged.
    pub fn set_config_encoded(&mut self, encoded: &str) -> Result<(), AttributeError> {
        self.config = navattrs::decode_base64_json(encoded).map_err(|source| AttributeError::Decode { name: "config", source })?;
        Ok(())
    }

    /// Decode and store the `menus` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Decode`]; `self.menus` is left unchanged.
    pub fn set_menus_encoded(&mut self, encoded: &str) -> Result<(), AttributeError> {
        self.menus = navattrs::decode_base64_json(encoded).map_err(|source| AttributeError::Decode { name: "menus", source })?;
        Ok(())
    }

    /// Decode and store the `searchquery` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Decode`]; `self.search_query` is left unchanged.
    pub fn set_search_query_encoded(&mut self, encoded: &str) -> Result<(), AttributeError> {
        self.search_query =
            navattrs::decode_base64_string(encoded).map_err(|source| AttributeError::Decode { name: "searchquery", source })?;
        Ok(())
    }

    /// Apply an attribute change from the host element.
    ///
    /// `value` is `None` when the attribute was removed, which restores the
    /// default. Names are matched case-insensitively, ignoring `-`, so
    /// `baseHost`, `base-host` and `basehost` are the same attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Unknown`] for names outside
    /// [`OBSERVED_ATTRIBUTES`] and [`AttributeError::Decode`] when an encoded
    /// value fails to decode. Nothing is modified on error.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        let defaults = Self::default();
        let key = normalize_attribute_name(name);
        match key.as_str() {
            "basehost" => self.base_host = value.map_or(defaults.base_host, str::to_owned),
            "mediabasehost" => self.media_base_host = value.map_or(defaults.media_base_host, str::to_owned),
            "config" => match value {
                Some(encoded) => self.set_config_encoded(encoded)?,
                None => self.config = defaults.config,
            },
            "menus" => match value {
                Some(encoded) => self.set_menus_encoded(encoded)?,
                None => self.menus = defaults.menus,
            },
            "searchquery" => match value {
                Some(encoded) => self.set_search_query_encoded(encoded)?,
                None => self.search_query = defaults.search_query,
            },
            "hidesearch" => self.hide_search = value.is_some(),
            "screenname" => self.screen_name = value.map_or(defaults.screen_name, str::to_owned),
            "username" => self.username = value.map_or(defaults.username, str::to_owned),
            "userprofileimagepath" => {
                self.user_profile_image_path = value.map_or(defaults.user_profile_image_path, str::to_owned);
            }
            "userprofilelastmodified" => {
                self.user_profile_last_modified = value.map_or(defaults.user_profile_last_modified, str::to_owned);
            }
            "secondidentityslotmode" => {
                self.second_identity_slot_mode = value.map_or(defaults.second_identity_slot_mode, str::to_owned);
            }
            _ => return Err(AttributeError::Unknown(name.to_owned())),
        }
        Ok(())
    }

    #[must_use]
    pub fn signed_out_menu_items(&self) -> &[MenuEntry] {
        &self.menus.signed_out
    }

    #[must_use]
    pub fn user_menu_items(&self) -> &[MenuEntry] {
        &self.menus.user
    }

    #[must_use]
    pub fn desktop_subnav_menu_items(&self) -> &[MenuEntry] {
        &self.menus.more
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.username.is_empty()
    }

    #[must_use]
    pub fn allow_secondary_identity_slot(&self) -> bool {
        self.second_identity_slot_mode == SECOND_IDENTITY_SLOT_ALLOW
    }

    /// Avatar URL: media host + profile path, cache-busted by last-modified.
    #[must_use]
    pub fn profile_image_url(&self) -> String {
        let base = format!("{}{}", self.media_base_host, self.user_profile_image_path);
        if self.user_profile_last_modified.is_empty() {
            base
        } else {
            format!("{base}?{}", self.user_profile_last_modified)
        }
    }

    /// Join a menu entry URL onto `base_host` unless it is already absolute.
    #[must_use]
    pub fn link(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
            url.to_owned()
        } else {
            format!("{}{url}", self.base_host)
        }
    }
}

fn normalize_attribute_name(name: &str) -> String {
    name.chars().filter(|c| *c != '-').flat_map(char::to_lowercase).collect()
}
