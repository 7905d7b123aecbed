use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::cli::{parse_date, parse_money, parse_outcome};
use crate::context::AppContext;
use crate::journal::display::format_signed;
use crate::journal::{Outcome, TradeUpdate};

#[derive(Args)]
pub struct EditArgs {
    /// Id of the trade to edit (see 'gainloss history')
    pub id: String,

    /// New trade date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// New asset/instrument label
    #[arg(long)]
    pub asset: Option<String>,

    /// New trade amount in dollars
    #[arg(long, value_parser = parse_money)]
    pub amount: Option<Decimal>,

    /// New outcome (profit|loss); the stored value is re-signed to match
    #[arg(long, value_parser = parse_outcome)]
    pub outcome: Option<Outcome>,

    /// New profit/loss value in dollars (absolute)
    #[arg(long, value_parser = parse_money)]
    pub value: Option<Decimal>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,
}

pub struct EditCommand {
    args: EditArgs,
}

impl EditCommand {
    pub fn new(args: EditArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.require_session()?;

        let update = TradeUpdate {
            date: self.args.date,
            asset: self.args.asset.clone(),
            amount: self.args.amount,
            outcome: self.args.outcome,
            value: self.args.value,
            notes: self.args.notes.clone(),
        };

        if update.is_empty() {
            return Err(anyhow!(
                "Nothing to change. Pass at least one of --date, --asset, --amount, --outcome, --value, --notes"
            ));
        }

        match ctx.journal.update_trade(&self.args.id, update)? {
            Some(record) => {
                println!(
                    "\n{} Updated {} trade: {} on {}",
                    "✅".bright_green(),
                    record.asset.bright_white(),
                    format_signed(record.value),
                    record.date.format("%Y-%m-%d")
                );
            }
            None => {
                println!(
                    "{}",
                    format!("No trade with id {} in your history", self.args.id).bright_black()
                );
            }
        }
        Ok(())
    }
}
