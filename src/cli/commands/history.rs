use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::cli::parse_sort_field;
use crate::context::AppContext;
use crate::journal::display::{export_trades_to_csv, format_signed, HistoryFormatter};
use crate::journal::{SortField, TradeQuery};

#[derive(Args)]
pub struct HistoryArgs {
    /// Filter by asset or notes (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort column (date|asset|value)
    #[arg(long, default_value = "date", value_parser = parse_sort_field)]
    pub sort: SortField,

    /// Sort ascending (default: descending)
    #[arg(long)]
    pub asc: bool,

    /// Show at most this many rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Export the filtered rows to CSV
    #[arg(long)]
    pub export: bool,

    /// CSV export filename
    #[arg(long, default_value = "trades.csv")]
    pub output: PathBuf,
}

pub struct HistoryCommand {
    args: HistoryArgs,
}

impl HistoryCommand {
    pub fn new(args: HistoryArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.require_session()?;

        let query = TradeQuery {
            search: self.args.search.clone(),
            sort_by: self.args.sort,
            ascending: self.args.asc,
            limit: self.args.limit,
        };
        let trades = ctx.journal.query(&query);

        println!("\n{}\n", "📈 Trade History".bright_white().bold());

        if trades.is_empty() && self.args.search.is_some() {
            println!("{}", "No trades match your search".bright_black().italic());
            return Ok(());
        }

        // Running total over the filtered set, like the history screen header
        let total_pl: Decimal = trades.iter().map(|t| t.value).sum();
        let total_display = if total_pl >= Decimal::ZERO {
            format_signed(total_pl).bright_green().to_string()
        } else {
            format_signed(total_pl).bright_red().to_string()
        };
        println!(
            "{} {} {}",
            "Running Total P&L:".bright_yellow(),
            total_display,
            format!("from {} trades", trades.len()).bright_black()
        );
        println!();

        print!("{}", HistoryFormatter::new(&trades).format_table());

        if self.args.export {
            export_trades_to_csv(&trades, &self.args.output)?;
            println!(
                "\n{} Exported {} trades to {}",
                "✅".bright_green(),
                trades.len(),
                self.args.output.display()
            );
        }

        println!();
        println!("💡 Use --search, --sort and --asc to slice the table");
        println!("💡 Use --export to save the current view to CSV");
        Ok(())
    }
}
