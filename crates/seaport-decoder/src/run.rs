use {
    crate::{
        domain::pipeline::{self, Decoded, Pipeline},
        infra::{
            cast::Cast,
            cli::{self, Format},
            config::{self, Config},
        },
    },
    anyhow::{Context, Result},
    clap::Parser,
    std::io::Write,
};

/// Entry point of the binary. Exits the process with a non-zero status when
/// decoding fails.
pub fn start(args: impl Iterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    observe::tracing::initialize(&observe::Config::new(&args.log, args.log_json));
    tracing::debug!("running seaport decoder with {args:#?}");

    let stdout = std::io::stdout();
    if let Err(err) = run(&args, &mut stdout.lock()) {
        tracing::debug!(?err, "decoding failed");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

/// Decodes what `args` point to and writes the records to `out`.
pub fn run(args: &cli::Args, out: &mut impl Write) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    let schema = config.schema()?;

    let decoded = if let Some(path) = &args.decoded {
        let output = std::fs::read_to_string(path)
            .with_context(|| format!("I/O error while reading {path:?}"))?;
        pipeline::decode_arguments(&output, &schema)?
    } else {
        let target = args.target.as_deref().context("missing transaction")?;
        let cast = Cast::new(
            args.cast
                .clone()
                .or(config.cast_path)
                .unwrap_or_else(|| "cast".into()),
            args.rpc_url.clone().or(config.rpc_url),
        );
        let decoder = Pipeline::new(cast.clone(), cast, &schema);
        if args.calldata {
            decoder.decode_calldata(target)?
        } else {
            decoder.decode_transaction(target)?
        }
    };

    print(&decoded, args.format, out)
}

fn print(decoded: &Decoded, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Pretty => {
            writeln!(out, "{:#?}", decoded.orders)?;
            writeln!(out, "{:#?}", decoded.fulfillments)?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, decoded)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
