use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::bootstrap::{AppRuntime, CONFIG_ENV};
use crate::commands::{
    device, CommandError, CommandOutput, CreateDeviceInput, UpdateDeviceInput,
};

#[derive(Debug, Parser)]
#[command(name = "devicehub")]
#[command(about = "Register, update, query and retire devices", long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new device
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        brand: String,
        /// available, in-use or inactive
        #[arg(long)]
        state: String,
    },
    /// Change name, brand or state of a device
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        state: Option<String>,
    },
    /// Remove a device that is not in use
    Delete { id: String },
    /// Show one device
    Get { id: String },
    /// List all devices
    List,
    /// List devices of one brand (exact match)
    ByBrand { brand: String },
    /// List devices in one state
    ByState { state: String },
}

impl Commands {
    pub async fn run(self, runtime: &AppRuntime) -> Result<CommandOutput, CommandError> {
        match self {
            Commands::Create { name, brand, state } => {
                let input = CreateDeviceInput { name, brand, state };
                device::create_device(runtime, input)
                    .await
                    .map(CommandOutput::Created)
            }
            Commands::Update {
                id,
                name,
                brand,
                state,
            } => {
                let input = UpdateDeviceInput { name, brand, state };
                device::update_device(runtime, &id, input).await?;
                Ok(CommandOutput::NoContent)
            }
            Commands::Delete { id } => {
                device::delete_device(runtime, &id).await?;
                Ok(CommandOutput::NoContent)
            }
            Commands::Get { id } => device::get_device(runtime, &id)
                .await
                .map(CommandOutput::Device),
            Commands::List => device::list_devices(runtime)
                .await
                .map(CommandOutput::Devices),
            Commands::ByBrand { brand } => device::list_devices_by_brand(runtime, &brand)
                .await
                .map(CommandOutput::Devices),
            Commands::ByState { state } => device::list_devices_by_state(runtime, &state)
                .await
                .map(CommandOutput::Devices),
        }
    }
}
