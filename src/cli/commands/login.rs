use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::commands::resolve_secret;
use crate::context::AppContext;

#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password (prompted interactively when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

pub struct LoginCommand {
    args: LoginArgs,
}

impl LoginCommand {
    pub fn new(args: LoginArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let secret = resolve_secret(&self.args.password, "Password: ")?;

        let account = ctx.login(self.args.email.trim(), &secret)?;
        let trades = ctx.journal.trades().len();

        println!(
            "\n{} Welcome back, {}!",
            "✅".bright_green(),
            account.name.bright_white()
        );
        println!(
            "   {} {}",
            "Trades on record:".bright_black(),
            trades.to_string().bright_cyan()
        );
        Ok(())
    }
}
