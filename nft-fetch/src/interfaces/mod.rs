pub mod cli;
pub mod config;
pub mod error;
pub mod fxhash;
pub mod objkt;
pub mod record;
