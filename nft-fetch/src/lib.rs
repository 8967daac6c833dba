//! Fetches collection data and thumbnails of Tezos NFTs from the fxhash and
//! objkt indexers and stores them under a local output directory.
//!
pub mod commands;
pub mod helpers;
pub mod interfaces;
pub mod services;
