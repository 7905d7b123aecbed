use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::commands::confirm;
use crate::context::AppContext;

#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the trade to delete (see 'gainloss history')
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub struct DeleteCommand {
    args: DeleteArgs,
}

impl DeleteCommand {
    pub fn new(args: DeleteArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.require_session()?;

        let Some(record) = ctx.journal.get_trade(&self.args.id) else {
            println!(
                "{}",
                format!("No trade with id {} in your history", self.args.id).bright_black()
            );
            return Ok(());
        };
        let asset = record.asset.clone();

        // There is no undo
        if !self.args.yes
            && !confirm(&format!("Delete the {} trade?", asset))?
        {
            println!("{}", "Cancelled".bright_black());
            return Ok(());
        }

        ctx.journal.delete_trade(&self.args.id)?;
        println!(
            "{} {} trade removed from your history",
            "🗑".bright_red(),
            asset.bright_white()
        );
        Ok(())
    }
}
