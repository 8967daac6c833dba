pub mod config;
pub mod ipfs;
pub mod naming;
