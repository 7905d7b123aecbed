//! Formatting for journal data: dashboard stats, history tables, CSV export

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use std::path::Path;

use crate::journal::types::{JournalStats, Outcome, TradeRecord};

/// Signed dollar string, e.g. `+$50.00` / `-$30.00`
pub fn format_signed(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+${:.2}", value)
    } else {
        format!("-${:.2}", value.abs())
    }
}

fn colored_signed(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format_signed(value).bright_green().to_string()
    } else {
        format_signed(value).bright_red().to_string()
    }
}

/// Format aggregate stats for the dashboard
pub struct StatsFormatter<'a> {
    stats: &'a JournalStats,
}

impl<'a> StatsFormatter<'a> {
    pub fn new(stats: &'a JournalStats) -> Self {
        Self { stats }
    }

    pub fn format_block(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "PERFORMANCE OVERVIEW".bright_yellow()));
        output.push_str(&format!("{}\n", "─".repeat(50).bright_black()));
        output.push_str(&format!(
            "🎯 Total Trades: {}\n",
            self.stats.total_trades.to_string().bright_white()
        ));
        output.push_str(&format!(
            "📈 Total Profit: {}\n",
            format!("${:.2}", self.stats.total_profit).bright_green()
        ));
        output.push_str(&format!(
            "📉 Total Loss:   {}\n",
            format!("${:.2}", self.stats.total_loss).bright_red()
        ));
        output.push_str(&format!("💰 Net P&L:      {}\n", colored_signed(self.stats.net_pl)));

        output
    }
}

/// Format trade records as a history table
pub struct HistoryFormatter<'a> {
    trades: &'a [TradeRecord],
}

impl<'a> HistoryFormatter<'a> {
    pub fn new(trades: &'a [TradeRecord]) -> Self {
        Self { trades }
    }

    pub fn format_table(&self) -> String {
        if self.trades.is_empty() {
            return format!("{}\n", "No trades recorded yet".bright_black().italic());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "Date", "Asset", "Amount", "Outcome", "P&L", "Notes"]);

        for trade in self.trades {
            let id_short = if trade.id.len() > 8 {
                format!("{}…", &trade.id[..8])
            } else {
                trade.id.clone()
            };

            let outcome_display = match trade.outcome {
                Outcome::Profit => "PROFIT".bright_green().to_string(),
                Outcome::Loss => "LOSS".bright_red().to_string(),
            };

            table.add_row(vec![
                id_short,
                trade.date.format("%Y-%m-%d").to_string(),
                trade.asset.clone(),
                format!("${:.2}", trade.amount),
                outcome_display,
                colored_signed(trade.value),
                trade.notes.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }

        format!("{table}\n")
    }

    /// Compact one-line-per-trade view for the dashboard's recent list
    pub fn format_recent_list(&self) -> String {
        if self.trades.is_empty() {
            return format!("{}\n", "No trades recorded yet".bright_black().italic());
        }

        let mut output = String::new();
        for trade in self.trades {
            let marker = match trade.outcome {
                Outcome::Profit => "●".bright_green().to_string(),
                Outcome::Loss => "●".bright_red().to_string(),
            };
            output.push_str(&format!(
                "{} {:<20} {}  {} (${:.2})\n",
                marker,
                trade.asset,
                trade.date.format("%Y-%m-%d").to_string().bright_black(),
                colored_signed(trade.value),
                trade.amount
            ));
        }
        output
    }
}

/// Export trade records to a CSV file
pub fn export_trades_to_csv(trades: &[TradeRecord], path: &Path) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(path)?;

    writeln!(file, "ID,Date,Asset,Amount,Outcome,Value,Notes,Created At")?;

    for trade in trades {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{}",
            trade.id,
            trade.date.format("%Y-%m-%d"),
            trade.asset,
            trade.amount,
            trade.outcome,
            trade.value,
            trade.notes.as_deref().unwrap_or("").replace(',', ";"),
            trade.created_at.format("%Y-%m-%d %H:%M:%S")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::signed_value;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn record(asset: &str, outcome: Outcome, magnitude: Decimal) -> TradeRecord {
        TradeRecord {
            id: "0123456789abcdef".to_string(),
            account_id: "acct-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            asset: asset.to_string(),
            amount: dec!(100),
            outcome,
            value: signed_value(outcome, magnitude),
            notes: Some("note, with comma".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(dec!(50)), "+$50.00");
        assert_eq!(format_signed(dec!(-30)), "-$30.00");
        assert_eq!(format_signed(Decimal::ZERO), "+$0.00");
    }

    #[test]
    fn test_history_table_contains_the_records() {
        let trades = vec![
            record("Gold", Outcome::Profit, dec!(50)),
            record("Oil", Outcome::Loss, dec!(30)),
        ];

        let table = HistoryFormatter::new(&trades).format_table();
        assert!(table.contains("Gold"));
        assert!(table.contains("Oil"));
        assert!(table.contains("2024-01-01"));
    }

    #[test]
    fn test_empty_history_has_a_placeholder() {
        let table = HistoryFormatter::new(&[]).format_table();
        assert!(table.contains("No trades recorded yet"));
    }

    #[test]
    fn test_csv_export_escapes_commas() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trades.csv");
        let trades = vec![record("Gold", Outcome::Loss, dec!(30))];

        export_trades_to_csv(&trades, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Asset,Amount,Outcome,Value,Notes,Created At"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("Gold"));
        assert!(row.contains("-30"));
        assert!(row.contains("note; with comma"));
    }
}
