use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "motorbook", version, about = "Register vehicles and browse your garage")]
pub struct Cli {
    /// Config file; defaults to `config.toml` in the data directory.
    #[arg(long, global = true, env = "MOTORBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay a JSON wizard script and store the resulting vehicle.
    Register {
        #[arg(long)]
        script: PathBuf,
    },
    /// List the signed-in user's vehicles as JSON.
    Vehicles,
    /// Validate login (or, with --confirm, sign-up) form values.
    CheckAccount {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: Option<String>,
        #[arg(long, requires = "confirm")]
        workshop: bool,
        #[arg(long, requires = "workshop")]
        vat: Option<String>,
    },
    /// Remember a user id as the signed-in account.
    SignIn { user: String },
    SignOut,
}
