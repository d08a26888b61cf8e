//! Command-line interface.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use salute_console_adapter_http_reqwest::HttpDeviceApi;
use salute_console_app::services::console_service::{Action, ConsoleService};
use salute_console_domain::command::Command as BridgeCommand;
use salute_console_domain::feature::Feature;
use salute_console_domain::request::FeatureUpdateRequest;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::terminal::TerminalView;

#[derive(Debug, Parser)]
#[command(name = "salute-console", version, about = "Administrative console for the salute device bridge")]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct App {
    /// Path to the config file (defaults to `./salute-console.toml` if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Bridge base URL, overriding the config file and environment.
    #[arg(short, long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Fetch the device list and print it as a table.
    Devices,
    /// Enable or disable the device shown at a table row.
    Enable {
        /// Row index as printed in the `#` column.
        row: usize,
        /// New state.
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Switch a device feature on or off.
    Feature {
        /// Entity id of the device (without the category prefix).
        entity_id: String,
        /// Feature name, e.g. `brightness`.
        feature: Feature,
        /// New state.
        #[arg(action = ArgAction::Set)]
        state: bool,
    },
    /// Send an administrative command (`DB_delete`, `exit`, …).
    Command {
        /// Command name.
        name: BridgeCommand,
    },
}

impl App {
    pub fn run(self) -> Result<()> {
        let mut config = Config::load(self.config.as_deref()).context("failed to load config")?;
        if let Some(url) = &self.url {
            config.bridge.base_url.clone_from(url);
        }
        init_logger(&config.logging.filter);

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(self.cmd.run(config))
    }
}

impl Cmd {
    async fn run(self, config: Config) -> Result<()> {
        let api = HttpDeviceApi::new(&config.bridge).context("failed to build bridge client")?;
        tracing::debug!(base_url = %api.base_url(), "using bridge");
        let service = Arc::new(ConsoleService::new(api, TerminalView::stdout()));

        let action = match self {
            Self::Devices => {
                service
                    .load_devices()
                    .await
                    .context("failed to load device list")?;
                return Ok(());
            }
            Self::Enable { row, enabled } => Action::SetEnabled { row, enabled },
            Self::Feature {
                entity_id,
                feature,
                state,
            } => Action::SetFeature(FeatureUpdateRequest::new(entity_id, feature, state)),
            Self::Command { name } => Action::Command(name),
        };

        service
            .dispatch(action)
            .await
            .context("request task panicked")?
            .context("bridge rejected the request")?;
        Ok(())
    }
}

fn init_logger(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}; falling back to `info`");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
