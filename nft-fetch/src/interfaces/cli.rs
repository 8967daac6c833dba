use clap::{Args, Parser, Subcommand};

use super::error::ValidationError;
use super::fxhash::IterationWindow;

#[derive(Parser, Debug)]
#[command(name = "nft-fetch", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get fxhash token data using fxhash API
    Fxhash(FxhashArgs),
    /// Get token data using objkt API. Tokens from other platforms such as
    /// Versum and fxhash can be queried by providing their contract name
    Objkt(ObjktArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct FxhashArgs {
    /// Project ID
    #[arg(short, long)]
    pub id: Option<u64>,

    /// Start iteration (from 1)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub start: Option<u32>,

    /// End iteration (inclusive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub end: Option<u32>,

    /// Download JSON data
    #[arg(long)]
    pub data: bool,

    /// Download thumbnail images
    #[arg(long)]
    pub images: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ObjktArgs {
    /// FA contract name
    #[arg(short, long)]
    pub contract: Option<String>,

    /// Tezos creator address
    #[arg(short = 'a', long)]
    pub creator_address: Option<String>,

    /// Download JSON data
    #[arg(long)]
    pub data: bool,

    /// Download thumbnail images
    #[arg(long)]
    pub images: bool,
}

/// What to write to the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outputs {
    pub data: bool,
    pub images: bool,
}

impl Outputs {
    fn new(data: bool, images: bool) -> Result<Self, ValidationError> {
        if !data && !images {
            return Err(ValidationError::NothingToDownload);
        }
        Ok(Self { data, images })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxhashRequest {
    pub id: u64,
    pub window: Option<IterationWindow>,
    /// Only one of --start and --end was given.
    pub partial_window: bool,
    pub outputs: Outputs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjktRequest {
    pub contract: String,
    pub creator_address: String,
    pub outputs: Outputs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Fxhash(FxhashRequest),
    Objkt(ObjktRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Fxhash(_) => "fxhash",
            Command::Objkt(_) => "objkt",
        }
    }

    /// Checks the option combinations of the subcommand.
    pub fn into_request(self) -> Result<Request, ValidationError> {
        match self {
            Command::Fxhash(args) => args.into_request().map(Request::Fxhash),
            Command::Objkt(args) => args.into_request().map(Request::Objkt),
        }
    }
}

impl FxhashArgs {
    pub fn into_request(self) -> Result<FxhashRequest, ValidationError> {
        let id = self.id.ok_or(ValidationError::MissingOption("id"))?;
        let outputs = Outputs::new(self.data, self.images)?;

        // A window needs both ends, a lone --start or --end is ignored.
        let window = match (self.start, self.end) {
            (Some(from), Some(to)) => Some(IterationWindow { from, to }),
            _ => None,
        };

        Ok(FxhashRequest {
            id,
            window,
            partial_window: self.has_partial_window(),
            outputs,
        })
    }

    pub fn has_partial_window(&self) -> bool {
        self.start.is_some() != self.end.is_some()
    }
}

impl ObjktArgs {
    pub fn into_request(self) -> Result<ObjktRequest, ValidationError> {
        let contract = self
            .contract
            .ok_or(ValidationError::MissingOption("contract"))?;
        let creator_address = self
            .creator_address
            .ok_or(ValidationError::MissingOption("creator-address"))?;
        let outputs = Outputs::new(self.data, self.images)?;

        Ok(ObjktRequest {
            contract,
            creator_address,
            outputs,
        })
    }
}
