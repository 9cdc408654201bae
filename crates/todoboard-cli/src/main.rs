mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use todoboard_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODOBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON responses
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "todoboard", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let dir = cli
        .dir
        .or_else(|| config.effective_data_dir())
        .ok_or_else(|| anyhow::anyhow!("No data directory available; pass --dir"))?;
    let mut ctx = CliContext::open(&dir, &config);

    match cli.command {
        Commands::Board(board_cmd) => handlers::board::handle(&mut ctx, board_cmd.action)?,
        Commands::List(list_cmd) => handlers::list::handle(&mut ctx, list_cmd.action)?,
        Commands::Card(card_cmd) => handlers::card::handle(&mut ctx, card_cmd.action)?,
        Commands::Drag(args) => handlers::drag::handle(&mut ctx, args)?,
        Commands::Reset => handlers::state::reset(&mut ctx)?,
        Commands::Seed => handlers::state::seed(&mut ctx)?,
        Commands::Completions { .. } => {}
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}
