pub mod download;
pub mod graphql;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_server;
