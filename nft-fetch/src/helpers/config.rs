// DEFINE THE DEFAULT CONFIGURATION WHEN NO ENV FILE IS PASSED
const IPFS_GATEWAY_URI: &str = "https://ipfs.io/ipfs/";
const FETCH_TIMEOUT_IN_SEC: u64 = 20;
const OUTPUT_DIR: &str = "./output";

const FXHASH_API_URL: &str = "https://api.fxhash.xyz/graphql";
const OBJKT_API_URL: &str = "https://data.objkt.com/v3/graphql";

pub fn default_ipfs_gateway_uri() -> String {
    IPFS_GATEWAY_URI.to_owned()
}

pub fn default_fetch_timeout_in_sec() -> u64 {
    FETCH_TIMEOUT_IN_SEC
}

pub fn default_output_dir() -> String {
    OUTPUT_DIR.to_owned()
}

pub fn default_fxhash_api_url() -> String {
    FXHASH_API_URL.to_owned()
}

pub fn default_objkt_api_url() -> String {
    OBJKT_API_URL.to_owned()
}
