pub mod fxhash;
pub mod objkt;

use crate::interfaces::error::FetchError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error};

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// A client bound to one GraphQL endpoint.
pub struct GraphQlClient {
    client: Client,
    api: &'static str,
    endpoint: String,
    timeout: Duration,
}

impl GraphQlClient {
    pub fn new(client: Client, api: &'static str, endpoint: String, timeout: Duration) -> Self {
        Self {
            client,
            api,
            endpoint,
            timeout,
        }
    }

    pub fn api(&self) -> &'static str {
        self.api
    }

    /// POSTs `query` with `variables` and decodes `data.<field>` into `T`.
    pub async fn query<V, T>(
        &self,
        query: &str,
        variables: V,
        field: &'static str,
    ) -> Result<T, FetchError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!("Querying {} API at {}", self.api, self.endpoint);

        let body = self
            .send(&GraphQlRequest { query, variables })
            .await
            .map_err(|source| {
                error!("{} API request failed: {}", self.api, source);
                FetchError::Transport {
                    api: self.api,
                    source,
                }
            })?;

        decode_response(self.api, field, &body).map_err(|e| {
            error!("{:?}", e);
            e
        })
    }

    async fn send<V: Serialize>(
        &self,
        request: &GraphQlRequest<'_, V>,
    ) -> Result<Vec<u8>, reqwest::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Extracts `data.<field>` from a GraphQL response body.
pub fn decode_response<T: DeserializeOwned>(
    api: &'static str,
    field: &'static str,
    body: &[u8],
) -> Result<T, FetchError> {
    let response: GraphQlResponse =
        serde_json::from_slice(body).map_err(|source| FetchError::Decode { api, source })?;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::Api { api, messages });
    }

    let value = response
        .data
        .and_then(|mut data| data.remove(field))
        .filter(|value| !value.is_null())
        .ok_or(FetchError::MissingData { api, field })?;

    serde_json::from_value(value).map_err(|source| FetchError::Decode { api, source })
}
