use serde::Deserialize;
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};

/// A generative token (project) as returned by the fxhash API.
///
/// Only the fields read by the tool are typed, exports use the raw JSON.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenToken {
    /// Project title.
    pub name: String,
    pub created_at: Option<String>,
    /// `null` when the project is a collaboration.
    pub author: Option<Author>,
    pub generative_uri: Option<String>,
    pub display_uri: Option<String>,
    pub thumbnail_uri: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub metadata: Option<CollectionMetadata>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub entire_collection: Vec<Iteration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
    pub artifact_uri: Option<String>,
    pub display_uri: Option<String>,
    pub generative_uri: Option<String>,
}

/// One minted instance of a generative token.
///
/// A malformed field decodes as `None` so a single bad entry cannot fail
/// the whole collection.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iteration {
    /// Iteration number only, starting from 1.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub iteration: Option<u32>,
    /// Project title + #iteration number.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub thumbnail_uri: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub metadata: Option<IterationMetadata>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub iteration_hash: Option<String>,
    pub generator_uri: Option<String>,
    /// Includes the fxhash url parameter unique to each iteration.
    pub artifact_uri: Option<String>,
    /// Full resolution image.
    pub display_uri: Option<String>,
    pub thumbnail_uri: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub attributes: Vec<Value>,
}

impl GenToken {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.name.as_deref())
    }
}

/// Inclusive range of iteration numbers, starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationWindow {
    pub from: u32,
    pub to: u32,
}

impl IterationWindow {
    pub fn contains(&self, iteration: u32) -> bool {
        (self.from..=self.to).contains(&iteration)
    }
}
