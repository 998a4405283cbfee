use alloy_dyn_abi::JsonAbiExt;
use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use sigsniff::{
    config, format_value, guess_fragment, AlloyCodecProbe, CodecProbe, SignatureRegistry,
};

#[derive(Debug, Parser)]
#[command(
    name = "sigsniff",
    version,
    about = "Guess function signatures from raw Ethereum calldata"
)]
struct Args {
    /// Hex-encoded calldata, with or without 0x prefix
    calldata: String,

    /// Skip the local signature registry and always infer types
    #[arg(long)]
    raw: bool,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    selector: String,
    signature: String,
    source: String,
    params: Vec<ParamReport>,
}

#[derive(Debug, Serialize)]
struct ParamReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    kind: String,
    value: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let calldata = parse_calldata(&args.calldata)?;

    let mut registry = SignatureRegistry::new();
    if !args.raw {
        let config = config::load();
        for signature in &config.signatures {
            if let Err(err) = registry.register(signature) {
                tracing::warn!(%signature, error = %err, "skipping config signature");
            }
        }
    }

    let report = build_report(&registry, &calldata)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn parse_calldata(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let payload = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(payload).context("calldata is not valid hex")
}

fn build_report(registry: &SignatureRegistry, calldata: &[u8]) -> Result<Report> {
    if calldata.len() < 4 {
        bail!("calldata too short (need at least 4 bytes for selector)");
    }
    let selector: [u8; 4] = calldata[..4].try_into().unwrap();

    if let Some(function) = registry.lookup(selector) {
        match function.abi_decode_input(&calldata[4..]) {
            Ok(values) => {
                let params = function
                    .inputs
                    .iter()
                    .zip(&values)
                    .map(|(input, value)| ParamReport {
                        name: (!input.name.is_empty()).then(|| input.name.clone()),
                        kind: input.selector_type().to_string(),
                        value: format_value(value),
                    })
                    .collect();
                return Ok(Report {
                    selector: format!("0x{}", hex::encode(selector)),
                    signature: function.signature(),
                    source: "registry".to_string(),
                    params,
                });
            }
            Err(err) => tracing::warn!(
                signature = %function.signature(),
                error = %err,
                "registered signature does not decode this calldata, guessing instead"
            ),
        }
    }

    let Some(fragment) = guess_fragment(calldata) else {
        bail!("could not infer a signature for this calldata");
    };

    let values = AlloyCodecProbe
        .decode_tuple(&fragment.inputs, &calldata[4..])
        .unwrap_or_default();
    let params = fragment
        .inputs
        .iter()
        .enumerate()
        .map(|(idx, ty)| ParamReport {
            name: None,
            kind: ty.sol_type_name().into_owned(),
            value: values.get(idx).map(format_value).unwrap_or_default(),
        })
        .collect();

    Ok(Report {
        selector: fragment.selector_hex(),
        signature: fragment.signature(),
        source: "guessed".to_string(),
        params,
    })
}

fn print_report(report: &Report) {
    println!("selector:  {}", report.selector);
    println!("signature: {} [{}]", report.signature, report.source);
    if report.params.is_empty() {
        return;
    }
    println!("args:");
    for param in &report.params {
        match &param.name {
            Some(name) => println!("  {} {} = {}", param.kind, name, param.value),
            None => println!("  {} = {}", param.kind, param.value),
        }
    }
}
