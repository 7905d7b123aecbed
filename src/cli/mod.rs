//! CLI module for gainloss
//!
//! One subcommand per screen of the journal: account commands (signup,
//! login, logout, profile) and trade commands (add, dashboard, history,
//! edit, delete). Uses clap for argument parsing and a structured command
//! pattern for all operations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod args;
pub mod commands;

pub use args::{parse_date, parse_money, parse_outcome, parse_sort_field};

use crate::context::AppContext;
use crate::data_paths::{default_data_dir, DataPaths};
use crate::logging::{init_logging, LoggingConfig};
use crate::store::JsonStore;

use commands::add::{AddArgs, AddCommand};
use commands::dashboard::{DashboardArgs, DashboardCommand};
use commands::delete::{DeleteArgs, DeleteCommand};
use commands::edit::{EditArgs, EditCommand};
use commands::history::{HistoryArgs, HistoryCommand};
use commands::login::{LoginArgs, LoginCommand};
use commands::logout::{LogoutArgs, LogoutCommand};
use commands::profile::{ProfileArgs, ProfileCommand};
use commands::signup::{SignupArgs, SignupCommand};

#[derive(Parser)]
#[command(name = "gainloss")]
#[command(version)]
#[command(about = "Track per-trade profit/loss from your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: $GAINLOSS_DATA_DIR, then the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and start a session
    Signup(SignupArgs),

    /// Log in to an existing account
    Login(LoginArgs),

    /// End the current session
    Logout(LogoutArgs),

    /// Show or edit the current profile
    Profile(ProfileArgs),

    /// Record a trade result
    Add(AddArgs),

    /// Performance overview and recent trades
    Dashboard(DashboardArgs),

    /// Browse, search, and sort the full trade history
    History(HistoryArgs),

    /// Edit a recorded trade
    Edit(EditArgs),

    /// Delete a recorded trade
    Delete(DeleteArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(self.data_dir.clone().unwrap_or_else(default_data_dir));

        // Ensure all directories exist before logging or storage touch them
        data_paths.ensure_directories()?;
        init_logging(LoggingConfig::new(data_paths.clone(), self.verbose))?;

        let store = JsonStore::open(&data_paths)?;
        let mut ctx = AppContext::load(store)?;

        match self.command {
            Commands::Signup(args) => SignupCommand::new(args).execute(&mut ctx),
            Commands::Login(args) => LoginCommand::new(args).execute(&mut ctx),
            Commands::Logout(args) => LogoutCommand::new(args).execute(&mut ctx),
            Commands::Profile(args) => ProfileCommand::new(args).execute(&mut ctx),
            Commands::Add(args) => AddCommand::new(args).execute(&mut ctx),
            Commands::Dashboard(args) => DashboardCommand::new(args).execute(&mut ctx),
            Commands::History(args) => HistoryCommand::new(args).execute(&mut ctx),
            Commands::Edit(args) => EditCommand::new(args).execute(&mut ctx),
            Commands::Delete(args) => DeleteCommand::new(args).execute(&mut ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
