//! Transaction → calldata → decoder output → generic trees → records.
//!
//! Every stage either succeeds completely or aborts the whole decode with the
//! error of the stage that failed. Nothing is retried since malformed input
//! stays malformed.

use {
    crate::domain::{
        seaport::{Fulfillment, Mapper, Order, Schema, mapping},
        text,
    },
    serde::Serialize,
    std::{
        fmt::{self, Display, Formatter},
        process::ExitStatus,
        string::FromUtf8Error,
    },
};

/// Provides a free text report about a transaction which contains its
/// calldata between an `input` and a `nonce` label.
#[cfg_attr(test, mockall::automock)]
pub trait CalldataSource {
    fn transaction(&self, id: &str) -> Result<String, ToolError>;
}

/// Decodes selector prefixed calldata into three lines: the function
/// signature, the `orders` argument and the `fulfillments` argument.
#[cfg_attr(test, mockall::automock)]
pub trait AbiDecoder {
    fn decode(&self, calldata: &str) -> Result<String, ToolError>;
}

/// Failure of an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("`{command}` printed invalid UTF-8")]
    Utf8 {
        command: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// The two arguments of `matchOrders`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    Orders,
    Fulfillments,
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Orders => f.write_str("orders"),
            Self::Fulfillments => f.write_str("fulfillments"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch transaction {id}")]
    CalldataSource {
        id: String,
        #[source]
        source: ToolError,
    },
    #[error("transaction report has no {missing:?} label")]
    CalldataExtraction { missing: &'static str },
    #[error("failed to decode calldata")]
    AbiDecoder(#[source] ToolError),
    #[error("decoder output has {lines} lines instead of 3")]
    MalformedDecoderOutput { lines: usize },
    #[error("failed to parse the {argument} argument")]
    Parse {
        argument: Argument,
        #[source]
        source: text::Error,
    },
    #[error("failed to map the {argument} argument")]
    Map {
        argument: Argument,
        #[source]
        source: mapping::Error,
    },
}

/// The result of a decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub orders: Vec<Order>,
    pub fulfillments: Vec<Fulfillment>,
}

/// Argument lines of the decoder output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedArguments<'a> {
    pub signature: &'a str,
    pub orders: &'a str,
    pub fulfillments: &'a str,
}

pub struct Pipeline<'a, S, D> {
    source: S,
    decoder: D,
    schema: &'a Schema,
}

impl<'a, S: CalldataSource, D: AbiDecoder> Pipeline<'a, S, D> {
    pub fn new(source: S, decoder: D, schema: &'a Schema) -> Self {
        Self {
            source,
            decoder,
            schema,
        }
    }

    pub fn decode_transaction(&self, id: &str) -> Result<Decoded, Error> {
        let report = self
            .source
            .transaction(id)
            .map_err(|source| Error::CalldataSource {
                id: id.to_owned(),
                source,
            })?;
        let calldata = extract_calldata(&report)?;
        tracing::debug!(id, len = calldata.len(), "extracted calldata");
        self.decode_calldata(calldata)
    }

    pub fn decode_calldata(&self, calldata: &str) -> Result<Decoded, Error> {
        let output = self.decoder.decode(calldata).map_err(Error::AbiDecoder)?;
        decode_arguments(&output, self.schema)
    }
}

/// Runs the stages that follow the ABI decoder on its `output`.
pub fn decode_arguments(output: &str, schema: &Schema) -> Result<Decoded, Error> {
    let arguments = split_decoder_output(output)?;
    tracing::debug!(signature = arguments.signature, "decoded arguments");

    let orders = parse(Argument::Orders, arguments.orders)?;
    let fulfillments = parse(Argument::Fulfillments, arguments.fulfillments)?;
    tracing::debug!(
        orders = orders.leaf_count(),
        fulfillments = fulfillments.leaf_count(),
        "parsed structures"
    );

    let mapper = Mapper::new(schema);
    let decoded = Decoded {
        orders: mapper.orders(&orders).map_err(|source| Error::Map {
            argument: Argument::Orders,
            source,
        })?,
        fulfillments: mapper
            .fulfillments(&fulfillments)
            .map_err(|source| Error::Map {
                argument: Argument::Fulfillments,
                source,
            })?,
    };
    tracing::info!(
        orders = decoded.orders.len(),
        fulfillments = decoded.fulfillments.len(),
        "decoded matchOrders"
    );
    Ok(decoded)
}

fn parse(argument: Argument, line: &str) -> Result<text::Value, Error> {
    text::parse_document(line).map_err(|source| Error::Parse { argument, source })
}

/// Returns the text strictly between the first `input` label and the `nonce`
/// label following it.
pub fn extract_calldata(report: &str) -> Result<&str, Error> {
    let (_, rest) = report
        .split_once("input")
        .ok_or(Error::CalldataExtraction { missing: "input" })?;
    let (calldata, _) = rest
        .split_once("nonce")
        .ok_or(Error::CalldataExtraction { missing: "nonce" })?;
    Ok(calldata.trim())
}

pub fn split_decoder_output(output: &str) -> Result<DecodedArguments<'_>, Error> {
    let lines = output.trim().lines().map(str::trim).collect::<Vec<_>>();
    match lines[..] {
        [signature, orders, fulfillments] => Ok(DecodedArguments {
            signature,
            orders,
            fulfillments,
        }),
        _ => Err(Error::MalformedDecoderOutput { lines: lines.len() }),
    }
}
