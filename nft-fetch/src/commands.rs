use crate::helpers::naming::output_dir_for;
use crate::interfaces::cli::{FxhashRequest, ObjktRequest, Request};
use crate::interfaces::config::Config;
use crate::interfaces::fxhash::GenToken;
use crate::interfaces::objkt::{filter_by_contract, Token};
use crate::interfaces::record::RawRecord;
use crate::services::download::fxhash::iteration_items;
use crate::services::download::http::HttpImageFetcher;
use crate::services::download::objkt::token_items;
use crate::services::download::{download_items, ImageFetcher};
use crate::services::graphql::{self, GraphQlClient};
use crate::services::storage::file::export_json;

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything a command needs, built once from the configuration.
pub struct AppContext<F = HttpImageFetcher> {
    pub config: Config,
    pub fxhash: GraphQlClient,
    pub objkt: GraphQlClient,
    pub fetcher: F,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let client = Client::new();
        let timeout = config.fetch_timeout();

        Self {
            fxhash: GraphQlClient::new(
                client.clone(),
                graphql::fxhash::API_NAME,
                config.fxhash_api_url.clone(),
                timeout,
            ),
            objkt: GraphQlClient::new(
                client.clone(),
                graphql::objkt::API_NAME,
                config.objkt_api_url.clone(),
                timeout,
            ),
            fetcher: HttpImageFetcher::new(client, timeout),
            config,
        }
    }
}

/// Runs a validated command to completion.
pub async fn run<F>(request: Request, ctx: &AppContext<F>) -> Result<()>
where
    F: ImageFetcher + Sync,
{
    match request {
        Request::Fxhash(request) => {
            let token = graphql::fxhash::get_token_data_by_id(&ctx.fxhash, request.id)
                .await
                .with_context(|| format!("could not fetch fxhash project {}", request.id))?;
            save_fxhash_token(&token, &request, &ctx.config, &ctx.fetcher).await?;
        }
        Request::Objkt(request) => {
            let tokens =
                graphql::objkt::get_token_data_by_address(&ctx.objkt, &request.creator_address)
                    .await
                    .with_context(|| {
                        format!(
                            "could not fetch objkt tokens of {}",
                            request.creator_address
                        )
                    })?;
            save_objkt_tokens(tokens, &request, &ctx.config, &ctx.fetcher).await?;
        }
    }
    Ok(())
}

/// Writes the requested outputs of an fxhash project under its own directory.
pub async fn save_fxhash_token<F>(
    token: &RawRecord<GenToken>,
    request: &FxhashRequest,
    config: &Config,
    fetcher: &F,
) -> Result<PathBuf>
where
    F: ImageFetcher + Sync + ?Sized,
{
    let out_dir = output_dir_for(&config.output_dir, &token.name);

    if request.outputs.data {
        export_json(token, &out_dir).await?;
    }

    if request.outputs.images {
        if let Some(window) = request.window {
            if window.from > window.to {
                warn!(
                    "Start iteration {} is after end iteration {}, nothing to download",
                    window.from, window.to
                );
            }
        }
        let items = iteration_items(token, request.window, &config.ipfs_gateway_uri);
        info!("{} iterations to download", items.len());
        download_items(fetcher, &items, &out_dir).await?;
    }

    Ok(out_dir)
}

/// Keeps the tokens of the requested contract and writes the requested outputs.
pub async fn save_objkt_tokens<F>(
    tokens: Vec<RawRecord<Token>>,
    request: &ObjktRequest,
    config: &Config,
    fetcher: &F,
) -> Result<PathBuf>
where
    F: ImageFetcher + Sync + ?Sized,
{
    let total = tokens.len();
    let tokens = filter_by_contract(tokens, &request.contract);
    info!(
        "{} of {} tokens belong to contract \"{}\"",
        tokens.len(),
        total,
        request.contract
    );

    let out_dir = output_dir_for(&config.output_dir, &request.contract);

    if request.outputs.data {
        export_json(&tokens, &out_dir).await?;
    }

    if request.outputs.images {
        let items = token_items(tokens.iter().map(|t| &t.record), &config.ipfs_gateway_uri);
        download_items(fetcher, &items, &out_dir).await?;
    }

    Ok(out_dir)
}
