use crate::helpers::config::{
    default_fetch_timeout_in_sec, default_fxhash_api_url, default_ipfs_gateway_uri,
    default_objkt_api_url, default_output_dir,
};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "NFT_FETCH_";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_ipfs_gateway_uri")]
    pub ipfs_gateway_uri: String,
    #[serde(default = "default_fetch_timeout_in_sec")]
    pub fetch_timeout_in_sec: u64,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_fxhash_api_url")]
    pub fxhash_api_url: String,
    #[serde(default = "default_objkt_api_url")]
    pub objkt_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ipfs_gateway_uri: default_ipfs_gateway_uri(),
            fetch_timeout_in_sec: default_fetch_timeout_in_sec(),
            output_dir: default_output_dir(),
            fxhash_api_url: default_fxhash_api_url(),
            objkt_api_url: default_objkt_api_url(),
        }
    }
}

impl Config {
    /// Reads the `NFT_FETCH_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env::<Config>()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_in_sec)
    }
}
