use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};
use std::borrow::Borrow;

pub const THUMBNAIL_MIME_TYPE: &str = "image/jpeg";
pub const THUMBNAIL_DIMENSIONS: &str = "480x480";

/// A token as returned by the objkt API.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub name: Option<String>,
    pub token_id: String,
    pub thumbnail_uri: Option<String>,
    /// The actual token asset (often a video).
    pub artifact_uri: Option<String>,
    /// Hi-res display asset, sometimes a video itself.
    pub display_uri: Option<String>,
    pub fa: Fa,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<TokenTag>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub extra: Vec<Extra>,
    pub mime: Option<String>,
}

/// The FA2 contract a token belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Fa {
    pub name: Option<String>,
    pub contract: String,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenTag {
    pub tag: Tag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// An alternative rendition of the token asset.
///
/// Malformed fields decode as `None`, the variant is then never picked as
/// a thumbnail.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Extra {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub uri: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Dimensions {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub value: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub unit: Option<String>,
}

impl Extra {
    fn is_thumbnail(&self) -> bool {
        self.uri.is_some()
            && self.mime_type.as_deref() == Some(THUMBNAIL_MIME_TYPE)
            && self.dimensions.as_ref().and_then(|d| d.value.as_deref())
                == Some(THUMBNAIL_DIMENSIONS)
    }
}

impl Token {
    /// The 480x480 JPEG variant if there is one, the display asset otherwise.
    pub fn thumbnail_source(&self) -> Option<&str> {
        self.extra
            .iter()
            .find(|extra| extra.is_thumbnail())
            .and_then(|extra| extra.uri.as_deref())
            .or(self.display_uri.as_deref())
    }

    pub fn belongs_to(&self, contract_name: &str) -> bool {
        self.fa.name.as_deref() == Some(contract_name)
    }
}

/// Keeps the tokens whose contract name is exactly `contract_name`.
pub fn filter_by_contract<T: Borrow<Token>>(tokens: Vec<T>, contract_name: &str) -> Vec<T> {
    tokens
        .into_iter()
        .filter(|token| token.borrow().belongs_to(contract_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(fa_name: &str, extra: serde_json::Value) -> Token {
        serde_json::from_value(json!({
            "name": "Study",
            "token_id": "1",
            "display_uri": "ipfs://QmDisplay",
            "fa": { "name": fa_name, "contract": "KT1abc", "path": "kt1abc" },
            "extra": extra,
        }))
        .unwrap()
    }

    #[test]
    fn test_thumbnail_source_prefers_480_jpeg() {
        let token = token(
            "X",
            json!([
                { "uri": "ipfs://QmVideo", "mime_type": "video/mp4", "dimensions": { "value": "480x480", "unit": "px" } },
                { "uri": "ipfs://Qm720", "mime_type": "image/jpeg", "dimensions": { "value": "720x720", "unit": "px" } },
                { "uri": "ipfs://Qm480", "mime_type": "image/jpeg", "dimensions": { "value": "480x480", "unit": "px" } },
                { "uri": "ipfs://Qm480b", "mime_type": "image/jpeg", "dimensions": { "value": "480x480", "unit": "px" } }
            ]),
        );
        assert_eq!(token.thumbnail_source(), Some("ipfs://Qm480"));
    }

    #[test]
    fn test_thumbnail_source_falls_back_to_display_uri() {
        let token = token(
            "X",
            json!([
                { "uri": "ipfs://QmVideo", "mime_type": "video/mp4", "dimensions": { "value": "960x960" } },
                { "uri": "ipfs://QmNoDims", "mime_type": "image/jpeg" }
            ]),
        );
        assert_eq!(token.thumbnail_source(), Some("ipfs://QmDisplay"));
    }

    #[test]
    fn test_thumbnail_source_without_extra() {
        let token = token("X", json!([]));
        assert_eq!(token.thumbnail_source(), Some("ipfs://QmDisplay"));
    }

    #[test]
    fn test_malformed_extra_entries_are_never_thumbnails() {
        let token = token(
            "X",
            json!([
                { "uri": null, "mime_type": "image/jpeg", "dimensions": { "value": "480x480" } },
                { "uri": "ipfs://QmBadDims", "mime_type": "image/jpeg", "dimensions": { "value": 480 } },
                { "uri": 7, "mime_type": "image/jpeg", "dimensions": "480x480" },
                { "uri": "ipfs://Qm480", "mime_type": "image/jpeg", "dimensions": { "value": "480x480" } }
            ]),
        );
        assert_eq!(token.extra.len(), 4);
        assert!(token.extra[1].dimensions.as_ref().unwrap().value.is_none());
        assert_eq!(token.thumbnail_source(), Some("ipfs://Qm480"));
    }

    #[test]
    fn test_filter_by_contract_is_exact() {
        let tokens = vec![
            token("X", json!([])),
            token("Y", json!([])),
            token("X", json!([])),
            token("x", json!([])),
        ];
        let filtered = filter_by_contract(tokens, "X");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.fa.name.as_deref() == Some("X")));
    }
}
