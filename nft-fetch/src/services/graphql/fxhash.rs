use super::GraphQlClient;
use crate::interfaces::error::FetchError;
use crate::interfaces::fxhash::GenToken;
use crate::interfaces::record::RawRecord;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

pub const API_NAME: &str = "fxhash";

const GET_COLLECTION_BY_ID: &str = r#"
query getCollectionById($generativeTokenId: Float) {
  generativeToken(id: $generativeTokenId) {
    name
    createdAt
    author {
      name
    }
    generativeUri
    metadata
    tags
    thumbnailUri
    entireCollection {
      metadata
      name
      iteration
      thumbnailUri
    }
    displayUri
  }
}
"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionVariables {
    generative_token_id: u64,
}

/// Fetches a generative token and its entire collection of iterations.
pub async fn get_token_data_by_id(
    client: &GraphQlClient,
    generative_token_id: u64,
) -> Result<RawRecord<GenToken>, FetchError> {
    let json: Value = client
        .query(
            GET_COLLECTION_BY_ID,
            CollectionVariables {
                generative_token_id,
            },
            "generativeToken",
        )
        .await?;

    let token = RawRecord::<GenToken>::decode(json).map_err(|source| {
        let e = FetchError::Decode {
            api: client.api(),
            source,
        };
        error!("{:?}", e);
        e
    })?;

    info!(
        "Fetched \"{}\" by {} ({} iterations) from {} API successfully",
        token.name,
        token.author_name().unwrap_or("a collaboration"),
        token.entire_collection.len(),
        client.api()
    );
    Ok(token)
}
