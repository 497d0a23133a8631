use tinyserve::config::{verbose_flag, Config};
use tinyserve::server::Server;
use tracing::Level;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let verbose = match verbose_flag(std::env::args().skip(1)) {
        Ok(verbose) => verbose,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut cfg = Config::load()?;
    if verbose {
        cfg = cfg.with_verbose(true);
    }

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if cfg.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if cfg.verbose {
        tracing::debug!(?cfg, "Verbose output enabled");
    }

    let server = Server::bind(cfg).await?;

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
