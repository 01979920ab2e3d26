use std::io::Read;

use tracing_subscriber::EnvFilter;

use fieldtriage::{assess, config, CasualtyReportDraft, Protocol};

/// Diagnostic runner: reads a casualty-report JSON from stdin, runs the
/// selected protocol, and prints the assessment JSON to stdout.
///
/// Usage: fieldtriage [--protocol civilian|military] < report.json
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(err) = run() {
        tracing::error!(%err, "Assessment failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let protocol = parse_protocol_arg()?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let draft: CasualtyReportDraft = serde_json::from_str(&input)?;
    let assessment = assess(&draft, protocol)?;

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}

fn parse_protocol_arg() -> Result<Protocol, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--protocol") => {
            let value = args.next().ok_or("--protocol requires a value")?;
            Ok(value.parse()?)
        }
        Some(other) => Err(format!("unrecognized argument: {other}").into()),
        None => Ok(Protocol::Civilian),
    }
}
