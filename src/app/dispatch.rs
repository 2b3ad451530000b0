use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::Config;
use crate::cli::{Cli, Commands};
use crate::storage::LocalStore;
use crate::viewer::ResponseViewer;
use crate::wizard::load_saved_answers;

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Ask { gateway_url } => {
            crate::wizard::run_wizard(&config, gateway_url).await?;
            Ok(())
        }

        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.gateway.port);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            if port == 0 {
                info!("Starting Rendezvous gateway on {host} (random port)");
            } else {
                info!("Starting Rendezvous gateway on {host}:{port}");
            }
            crate::transport::gateway::run_gateway(&host, port, Arc::clone(&config)).await
        }

        Commands::View { file } => {
            let viewer = match file {
                Some(path) => view_file(&path),
                None => view_saved(&config),
            };
            print!("{}", viewer.render());
            Ok(())
        }
    }
}

fn view_file(path: &Path) -> ResponseViewer {
    let mut viewer = ResponseViewer::new();
    viewer.load_file(path);
    viewer
}

/// Unreadable saved answers are logged and the viewer stays empty.
fn view_saved(config: &Config) -> ResponseViewer {
    let store = LocalStore::open(config.storage_path());
    let mut viewer = ResponseViewer::new();
    match load_saved_answers(&store) {
        Ok(Some(record)) => viewer.load_record(record),
        Ok(None) => {}
        Err(e) => {
            tracing::error!(path = %store.path().display(), error = %e, "Error reading saved answers");
        }
    }
    viewer
}
