use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::cli::{parse_date, parse_money, parse_outcome};
use crate::context::AppContext;
use crate::journal::{Outcome, TradeDraft};

#[derive(Args)]
pub struct AddArgs {
    /// Date of the trade (YYYY-MM-DD, default: today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Asset/instrument label, e.g. "EUR/USD" or "Gold"
    #[arg(long)]
    pub asset: String,

    /// Trade amount in dollars
    #[arg(long, value_parser = parse_money)]
    pub amount: Decimal,

    /// Trade outcome (profit|loss)
    #[arg(long, value_parser = parse_outcome)]
    pub outcome: Outcome,

    /// Profit/loss value in dollars; enter the absolute value, the sign is
    /// handled automatically
    #[arg(long, value_parser = parse_money)]
    pub value: Decimal,

    /// Optional notes about the trade
    #[arg(long)]
    pub notes: Option<String>,
}

pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.require_session()?;

        let draft = TradeDraft {
            date: self.args.date.unwrap_or_else(|| Local::now().date_naive()),
            asset: self.args.asset.trim().to_string(),
            amount: self.args.amount,
            outcome: self.args.outcome,
            value: self.args.value,
            notes: self.args.notes.as_ref().map(|n| n.trim().to_string()),
        };

        let record = ctx
            .journal
            .add_trade(draft)?
            .ok_or_else(|| anyhow!("No active session"))?;

        let label = match record.outcome {
            Outcome::Profit => "Profit".bright_green().to_string(),
            Outcome::Loss => "Loss".bright_red().to_string(),
        };
        println!(
            "\n{} Trade added: {} of ${:.2} recorded for {}",
            "✅".bright_green(),
            label,
            record.value.abs(),
            record.asset.bright_white()
        );
        println!("   {} {}", "Id:".bright_black(), record.id.bright_black());
        Ok(())
    }
}
