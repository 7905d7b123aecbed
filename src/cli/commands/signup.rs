use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::commands::resolve_secret;
use crate::context::AppContext;

#[derive(Args)]
pub struct SignupArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unused)
    #[arg(long)]
    pub email: String,

    /// Password (prompted interactively when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

pub struct SignupCommand {
    args: SignupArgs,
}

impl SignupCommand {
    pub fn new(args: SignupArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let secret = resolve_secret(&self.args.password, "Choose a password: ")?;

        let account = ctx.signup(
            self.args.name.trim(),
            self.args.email.trim(),
            &secret,
        )?;

        println!(
            "\n{} Welcome, {}! Your account is ready.",
            "✅".bright_green(),
            account.name.bright_white()
        );
        println!(
            "   {} {}",
            "Signed in as:".bright_black(),
            account.email.bright_cyan()
        );
        println!("\n💡 Record your first trade with 'gainloss add'");
        Ok(())
    }
}
