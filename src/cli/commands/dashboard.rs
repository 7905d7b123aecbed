use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::journal::display::{HistoryFormatter, StatsFormatter};

/// Number of records shown in the recent-trades section
const RECENT_LIMIT: usize = 5;

#[derive(Args)]
pub struct DashboardArgs {}

pub struct DashboardCommand {
    #[allow(dead_code)]
    args: DashboardArgs,
}

impl DashboardCommand {
    pub fn new(args: DashboardArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let account = ctx.require_session()?;

        println!("{}", "═".repeat(60).bright_blue());
        println!(
            "{}",
            format!("📒 Welcome back, {}!", account.name)
                .bright_white()
                .bold()
        );
        println!("{}", "═".repeat(60).bright_blue());
        println!();

        let stats = ctx.journal.stats();
        print!("{}", StatsFormatter::new(&stats).format_block());

        println!();
        println!("{}", "RECENT TRADES".bright_yellow());
        println!("{}", "─".repeat(50).bright_black());
        let recent = ctx.journal.recent(RECENT_LIMIT);
        print!("{}", HistoryFormatter::new(&recent).format_recent_list());

        if stats.total_trades > RECENT_LIMIT {
            println!();
            println!("💡 See everything with 'gainloss history'");
        } else if stats.total_trades == 0 {
            println!();
            println!("💡 Record your first trade with 'gainloss add'");
        }
        Ok(())
    }
}
