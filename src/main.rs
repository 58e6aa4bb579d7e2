mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use mb_app::app_paths::AppPaths;
use mb_core::ports::AppDirsPort;
use mb_core::UserId;
use mb_platform::app_dirs::DirsAppDirsAdapter;
use mb_shell::bootstrap::{self, wire_dependencies, Runtime};
use mb_shell::commands::account::{check_account, AccountCheck};
use mb_shell::commands::register::{load_script, run_script};
use mb_shell::commands::{session, vehicles};

use cli::{Cli, Command};

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

async fn run(runtime: &Runtime, command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Register { script } => {
            let commands = load_script(&script)?;
            match run_script(runtime, Default::default(), &commands).await {
                Ok(snapshot) => {
                    print_json(&snapshot)?;
                    Ok(if snapshot.vehicle_id.is_some() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(2)
                    })
                }
                Err(err) => {
                    error!(error = %err, "registration script failed");
                    eprintln!("{}", err.user_message());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Vehicles => {
            let vehicles = vehicles::list_vehicles(runtime).await?;
            print_json(&vehicles)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckAccount {
            email,
            password,
            confirm,
            workshop,
            vat,
        } => {
            let report = check_account(
                runtime,
                AccountCheck {
                    email,
                    password,
                    confirm_password: confirm,
                    workshop,
                    vat_number: vat,
                },
            );
            print_json(&report)?;
            Ok(if report.result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
        Command::SignIn { user } => {
            session::sign_in(runtime, UserId::from(user)).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::SignOut => {
            session::sign_out(runtime).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    bootstrap::tracing::init_tracing_subscriber(Some(&paths.logs_dir))
        .context("Failed to initialize tracing")?;

    let config_path = cli.config.unwrap_or_else(|| paths.config_path.clone());
    let config = bootstrap::load_config_or_default(&config_path)?;
    let runtime = wire_dependencies(&config, &paths)?;

    run(&runtime, cli.command).await
}
