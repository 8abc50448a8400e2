//! CLI arguments for the `seaport-decoder` binary.

use {
    clap::{Parser, ValueEnum},
    std::path::PathBuf,
    url::Url,
};

/// Decode the orders and fulfillments of a Seaport `matchOrders` transaction.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "warn,seaport_decoder=info")]
    pub log: String,

    /// Emit logs as JSON.
    #[arg(long)]
    pub log_json: bool,

    /// Path to the configuration file. This file should be in TOML format.
    #[arg(long, env = "SEAPORT_DECODER_CONFIG")]
    pub config: Option<PathBuf>,

    /// The `cast` executable to fetch and decode calldata with. Takes
    /// precedence over `cast-path` of the configuration file.
    #[arg(long, env = "CAST")]
    pub cast: Option<PathBuf>,

    /// The Ethereum node to fetch transactions from. Takes precedence over
    /// `rpc-url` of the configuration file.
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<Url>,

    /// How to print the decoded records.
    #[arg(long, value_enum, default_value_t = Format::Pretty)]
    pub format: Format,

    /// Treat the target as selector prefixed calldata instead of a
    /// transaction hash.
    #[arg(long)]
    pub calldata: bool,

    /// Read the ABI decoder output from a file instead of running `cast`.
    #[arg(long, conflicts_with_all = ["target", "calldata"])]
    pub decoded: Option<PathBuf>,

    /// The hash of the transaction to decode.
    #[arg(required_unless_present = "decoded")]
    pub target: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Rust debug formatting.
    Pretty,
    /// A JSON object with `orders` and `fulfillments`.
    Json,
}
