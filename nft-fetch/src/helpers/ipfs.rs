pub const IPFS_SCHEME: &str = "ipfs://";

/// Replaces the `ipfs://` prefix of `uri` with the given HTTP gateway base.
///
/// The first seven characters are dropped without being checked, so a URI
/// that does not use the scheme comes out malformed rather than failing.
pub fn ipfs_to_https(gateway_uri: &str, uri: &str) -> String {
    let cid_path = match uri.char_indices().nth(IPFS_SCHEME.len()) {
        Some((index, _)) => &uri[index..],
        None => "",
    };

    if gateway_uri.ends_with('/') {
        format!("{}{}", gateway_uri, cid_path)
    } else {
        format!("{}/{}", gateway_uri, cid_path)
    }
}
