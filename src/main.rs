use fprinter::command_line::{binary, counting, list_patterns, rest_api_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = clap::Command::new("fprinter")
        .about("Substructure fingerprints for small molecules")
        .subcommand_required(true)
        .subcommand(binary::command())
        .subcommand(counting::command())
        .subcommand(list_patterns::command())
        .subcommand(rest_api_server::command());

    let matches = app.get_matches();

    match matches.subcommand() {
        Some((binary::NAME, args)) => binary::action(args)?,
        Some((counting::NAME, args)) => counting::action(args)?,
        Some((list_patterns::NAME, args)) => list_patterns::action(args)?,
        Some((rest_api_server::NAME, args)) => rest_api_server::action(args).await?,
        Some((other, _args)) => Err(eyre::eyre!("can't handle {}", other))?,
        None => Err(eyre::eyre!("no subcommand given"))?,
    }

    Ok(())
}
