use super::GraphQlClient;
use crate::interfaces::error::FetchError;
use crate::interfaces::objkt::Token;
use crate::interfaces::record::RawRecord;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

pub const API_NAME: &str = "objkt";

const GET_TOKENS_BY_CREATOR: &str = r#"
query getToken($creatorAddress: String) {
  token(where: {creators: {creator_address: {_eq: $creatorAddress}}}) {
    name
    token_id
    thumbnail_uri
    artifact_uri
    display_uri
    fa {
      name
      contract
      path
    }
    description
    tags {
      tag {
        name
      }
    }
    extra
    mime
  }
}
"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatorVariables<'a> {
    creator_address: &'a str,
}

/// Fetches every token created by `creator_address`, across all contracts.
///
/// A token that does not decode is skipped with a warning.
pub async fn get_token_data_by_address(
    client: &GraphQlClient,
    creator_address: &str,
) -> Result<Vec<RawRecord<Token>>, FetchError> {
    let items: Vec<Value> = client
        .query(
            GET_TOKENS_BY_CREATOR,
            CreatorVariables { creator_address },
            "token",
        )
        .await?;

    let tokens = decode_tokens(items);

    info!(
        "Fetched {} tokens created by {} from {} API successfully",
        tokens.len(),
        creator_address,
        client.api()
    );
    Ok(tokens)
}

fn decode_tokens(items: Vec<Value>) -> Vec<RawRecord<Token>> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, json)| match RawRecord::<Token>::decode(json) {
            Ok(token) => Some(token),
            Err(e) => {
                warn!("Skipping token #{} from {} API: {}", index, API_NAME, e);
                None
            }
        })
        .collect()
}
