//! Attribute decode pipeline and menu models for the top navigation widget.
//!
//! The embedding page hands structured values to the widget as string
//! attributes: base64 for plain strings, base64-wrapped JSON for the config
//! and menu blobs. This crate owns that transport encoding so the component
//! crate only ever sees decoded, typed values.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard alphabet, lenient on padding and trailing bits like `atob`.
const ATTRIBUTE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Error returned by the attribute decoders.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The attribute value is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded payload is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The decoded text is not valid JSON for the requested type.
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Opaque feature/config flags supplied by the embedding page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(pub Map<String, Value>);

/// One link or action in a dropdown, sub-navigation, or slider list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Visible label. Older payloads call this `label`.
    #[serde(default, alias = "label")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Analytics action name reported when the entry is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_event: Option<String>,
    /// Any further metadata, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Menu definitions blob: the three named slices plus per-media-type
/// slider contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDefinitions {
    #[serde(default)]
    pub signed_out: Vec<MenuEntry>,
    #[serde(default)]
    pub user: Vec<MenuEntry>,
    #[serde(default)]
    pub more: Vec<MenuEntry>,
    /// Every other top-level key (`audio`, `video`, ...), kept verbatim.
    #[serde(flatten)]
    pub media: BTreeMap<String, Value>,
}

impl MenuDefinitions {
    /// Slider contents for `media_type`, if the blob carries any.
    #[must_use]
    pub fn media_slice(&self, media_type: &str) -> Option<&Value> {
        self.media.get(media_type)
    }
}

/// Decode a base64 attribute into a UTF-8 string.
///
/// ASCII whitespace is ignored and padding is optional.
///
/// # Errors
///
/// Returns [`DecodeError::Base64`] or [`DecodeError::Utf8`].
pub fn decode_base64_string(encoded: &str) -> Result<String, DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = ATTRIBUTE_ENGINE.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode a base64 attribute and parse the result as JSON.
///
/// # Errors
///
/// Returns any [`decode_base64_string`] error, or [`DecodeError::Json`]
/// when the decoded text does not parse as `T`.
pub fn decode_base64_json<T: DeserializeOwned>(encoded: &str) -> Result<T, DecodeError> {
    let text = decode_base64_string(encoded)?;
    Ok(serde_json::from_str(&text)?)
}

/// Encode a string the way the widget expects plain encoded attributes.
#[must_use]
pub fn encode_base64_string(value: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(value.as_bytes())
}

/// Encode a value as base64-wrapped JSON, for hosts rendering the widget.
///
/// # Errors
///
/// Returns the `serde_json` error if `value` cannot be serialized.
pub fn encode_base64_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let text = serde_json::to_string(value)?;
    Ok(encode_base64_string(&text))
}
