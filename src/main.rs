use clap::Parser;

use prodview::cli::{run_list, Cli, Command};
use prodview::logging::init_tracing;
use prodview::shutdown::{listen_for_signals, ShutdownHandle};
use prodview::ui::runtime;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "Exiting with error");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Some(Command::List(args)) => rt.block_on(run_list(&config, args)),
        None => {
            let shutdown = ShutdownHandle::new();
            rt.spawn(listen_for_signals(shutdown.clone()));
            runtime::run(config, rt.handle(), shutdown)
        }
    }
}
