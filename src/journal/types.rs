//! Type definitions for the trade journal

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome tag of a logged trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Profit,
    Loss,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Profit => write!(f, "profit"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "profit" => Ok(Outcome::Profit),
            "loss" => Ok(Outcome::Loss),
            other => Err(format!("'{}' is not a valid outcome (profit|loss)", other)),
        }
    }
}

/// Signed monetary value for an outcome and an entered magnitude.
/// Negative iff the outcome is a loss; the magnitude is always the
/// absolute entered value.
pub fn signed_value(outcome: Outcome, magnitude: Decimal) -> Decimal {
    match outcome {
        Outcome::Profit => magnitude.abs(),
        Outcome::Loss => -magnitude.abs(),
    }
}

/// A single logged profit/loss event tied to one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Opaque identifier (UUID v4)
    pub id: String,

    /// Owning account identifier
    pub account_id: String,

    /// Calendar date of the trade
    pub date: NaiveDate,

    /// Free-text asset/instrument label
    pub asset: String,

    /// Trade stake, positive
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub outcome: Outcome,

    /// Signed P&L; sign always agrees with `outcome`
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the record was logged
    pub created_at: DateTime<Utc>,
}

impl TradeRecord {
    /// Check if the record matches a free-text search term
    /// (case-insensitive substring over asset label and notes)
    pub fn matches_search(&self, term: &str) -> bool {
        let term_lower = term.to_lowercase();

        if self.asset.to_lowercase().contains(&term_lower) {
            return true;
        }

        if let Some(notes) = &self.notes {
            if notes.to_lowercase().contains(&term_lower) {
                return true;
            }
        }

        false
    }
}

/// Input validation errors for trade forms
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Asset/instrument is required")]
    MissingAsset,

    #[error("Trade amount must be a positive number")]
    NonPositiveAmount,

    #[error("Profit/loss value must be a positive number")]
    NonPositiveValue,
}

/// New-trade form input. The value is entered as a magnitude; the sign is
/// derived from the outcome.
#[derive(Debug, Clone)]
pub struct TradeDraft {
    pub date: NaiveDate,
    pub asset: String,
    pub amount: Decimal,
    pub outcome: Outcome,
    pub value: Decimal,
    pub notes: Option<String>,
}

impl TradeDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.asset.trim().is_empty() {
            return Err(ValidationError::MissingAsset);
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue);
        }
        Ok(())
    }
}

/// Partial trade edit; `None` fields are left untouched. `value` is a
/// magnitude, like the add form.
#[derive(Debug, Clone, Default)]
pub struct TradeUpdate {
    pub date: Option<NaiveDate>,
    pub asset: Option<String>,
    pub amount: Option<Decimal>,
    pub outcome: Option<Outcome>,
    pub value: Option<Decimal>,
    pub notes: Option<String>,
}

impl TradeUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.asset.is_none()
            && self.amount.is_none()
            && self.outcome.is_none()
            && self.value.is_none()
            && self.notes.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(asset) = &self.asset {
            if asset.trim().is_empty() {
                return Err(ValidationError::MissingAsset);
            }
        }
        if let Some(amount) = self.amount {
            if amount <= Decimal::ZERO {
                return Err(ValidationError::NonPositiveAmount);
            }
        }
        if let Some(value) = self.value {
            if value <= Decimal::ZERO {
                return Err(ValidationError::NonPositiveValue);
            }
        }
        Ok(())
    }

    /// Merge into an existing record. The signed value is re-derived when
    /// either outcome or value changes, so the sign invariant holds.
    pub fn apply(&self, record: &mut TradeRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(asset) = &self.asset {
            record.asset = asset.clone();
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(notes) = &self.notes {
            record.notes = Some(notes.clone());
        }

        if self.outcome.is_some() || self.value.is_some() {
            let outcome = self.outcome.unwrap_or(record.outcome);
            let magnitude = self.value.unwrap_or_else(|| record.value.abs());
            record.outcome = outcome;
            record.value = signed_value(outcome, magnitude);
        }
    }
}

/// Fields to sort trade listings by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Asset,
    Value,
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "asset" => Ok(SortField::Asset),
            "value" => Ok(SortField::Value),
            other => Err(format!(
                "'{}' is not a valid sort field (date|asset|value)",
                other
            )),
        }
    }
}

/// Query parameters for trade listings
#[derive(Debug, Clone)]
pub struct TradeQuery {
    /// Free-text filter over asset label and notes
    pub search: Option<String>,

    pub sort_by: SortField,

    pub ascending: bool,

    /// Limit results
    pub limit: Option<usize>,
}

impl Default for TradeQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: SortField::Date,
            // The history view opens newest-first
            ascending: false,
            limit: None,
        }
    }
}

impl TradeQuery {
    /// Filter and sort a record list. The sort is stable, so equal keys keep
    /// their original order in both directions.
    pub fn apply(&self, trades: &[TradeRecord]) -> Vec<TradeRecord> {
        let mut results: Vec<TradeRecord> = trades
            .iter()
            .filter(|t| match &self.search {
                Some(term) => t.matches_search(term),
                None => true,
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| {
            let cmp = match self.sort_by {
                SortField::Date => a.date.cmp(&b.date),
                SortField::Asset => a.asset.cmp(&b.asset),
                SortField::Value => a.value.cmp(&b.value),
            };

            if self.ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}

/// Aggregate performance numbers, recomputed from the current record list on
/// every read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalStats {
    pub total_trades: usize,
    pub total_profit: Decimal,
    pub total_loss: Decimal,
    pub net_pl: Decimal,
}

impl JournalStats {
    pub fn compute(trades: &[TradeRecord]) -> Self {
        let total_profit: Decimal = trades
            .iter()
            .filter(|t| t.value > Decimal::ZERO)
            .map(|t| t.value)
            .sum();

        let total_loss: Decimal = trades
            .iter()
            .filter(|t| t.value < Decimal::ZERO)
            .map(|t| t.value)
            .sum::<Decimal>()
            .abs();

        Self {
            total_trades: trades.len(),
            total_profit,
            total_loss,
            net_pl: total_profit - total_loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    pub(crate) fn record(asset: &str, outcome: Outcome, magnitude: Decimal) -> TradeRecord {
        TradeRecord {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: "acct-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            asset: asset.to_string(),
            amount: dec!(100),
            outcome,
            value: signed_value(outcome, magnitude),
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_signed_value_derivation() {
        assert_eq!(signed_value(Outcome::Profit, dec!(50)), dec!(50));
        assert_eq!(signed_value(Outcome::Loss, dec!(30)), dec!(-30));
        // Magnitude is taken as absolute, whatever the caller passed
        assert_eq!(signed_value(Outcome::Loss, dec!(-30)), dec!(-30));
        assert_eq!(signed_value(Outcome::Profit, dec!(-50)), dec!(50));
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = TradeDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            asset: "Gold".to_string(),
            amount: dec!(100),
            outcome: Outcome::Profit,
            value: dec!(50),
            notes: None,
        };
        assert!(draft.validate().is_ok());

        draft.asset = "   ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingAsset));

        draft.asset = "Gold".to_string();
        draft.amount = Decimal::ZERO;
        assert_eq!(draft.validate(), Err(ValidationError::NonPositiveAmount));

        draft.amount = dec!(100);
        draft.value = dec!(-1);
        assert_eq!(draft.validate(), Err(ValidationError::NonPositiveValue));
    }

    #[test]
    fn test_search_matches_asset_and_notes() {
        let mut rec = record("EUR/USD", Outcome::Profit, dec!(10));
        rec.notes = Some("Breakout play".to_string());

        assert!(rec.matches_search("eur"));
        assert!(rec.matches_search("BREAKOUT"));
        assert!(!rec.matches_search("gold"));
    }

    #[test]
    fn test_update_rederives_signed_value() {
        let mut rec = record("Gold", Outcome::Profit, dec!(50));

        // Flipping the outcome alone re-signs the stored value
        TradeUpdate {
            outcome: Some(Outcome::Loss),
            ..Default::default()
        }
        .apply(&mut rec);
        assert_eq!(rec.value, dec!(-50));

        // Changing the magnitude keeps the loss sign
        TradeUpdate {
            value: Some(dec!(70)),
            ..Default::default()
        }
        .apply(&mut rec);
        assert_eq!(rec.value, dec!(-70));
        assert_eq!(rec.outcome, Outcome::Loss);
    }

    #[test]
    fn test_query_sort_reversal_is_exact_for_distinct_values() {
        let trades = vec![
            record("A", Outcome::Profit, dec!(10)),
            record("B", Outcome::Loss, dec!(5)),
            record("C", Outcome::Profit, dec!(99)),
        ];

        let asc = TradeQuery {
            sort_by: SortField::Value,
            ascending: true,
            ..Default::default()
        }
        .apply(&trades);

        let desc = TradeQuery {
            sort_by: SortField::Value,
            ascending: false,
            ..Default::default()
        }
        .apply(&trades);

        let asc_ids: Vec<_> = asc.iter().map(|t| t.id.clone()).collect();
        let mut desc_ids: Vec<_> = desc.iter().map(|t| t.id.clone()).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);

        assert_eq!(asc[0].value, dec!(-5));
        assert_eq!(asc[2].value, dec!(99));
    }

    #[test]
    fn test_query_equal_keys_keep_insertion_order() {
        let trades = vec![
            record("First", Outcome::Profit, dec!(10)),
            record("Second", Outcome::Profit, dec!(10)),
            record("Third", Outcome::Profit, dec!(10)),
        ];

        for ascending in [true, false] {
            let sorted = TradeQuery {
                sort_by: SortField::Value,
                ascending,
                ..Default::default()
            }
            .apply(&trades);

            let assets: Vec<_> = sorted.iter().map(|t| t.asset.as_str()).collect();
            assert_eq!(assets, vec!["First", "Second", "Third"]);
        }
    }

    #[test]
    fn test_query_filter_and_limit() {
        let mut trades = vec![
            record("Gold", Outcome::Profit, dec!(10)),
            record("Silver", Outcome::Loss, dec!(5)),
            record("Gold futures", Outcome::Profit, dec!(20)),
        ];
        trades[1].notes = Some("gold hedge".to_string());

        let query = TradeQuery {
            search: Some("gold".to_string()),
            sort_by: SortField::Asset,
            ascending: true,
            limit: Some(2),
        };

        let results = query.apply(&trades);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].asset, "Gold");
        assert_eq!(results[1].asset, "Gold futures");
    }

    #[test]
    fn test_stats_compute() {
        let trades = vec![
            record("Gold", Outcome::Profit, dec!(50)),
            record("Oil", Outcome::Loss, dec!(30)),
            record("BTC", Outcome::Profit, dec!(20)),
        ];

        let stats = JournalStats::compute(&trades);
        assert_eq!(stats.total_trades, 3);
        assert_eq!(stats.total_profit, dec!(70));
        assert_eq!(stats.total_loss, dec!(30));
        assert_eq!(stats.net_pl, dec!(40));
    }

    #[test]
    fn test_record_serializes_money_as_json_numbers() {
        let rec = record("Gold", Outcome::Loss, dec!(30));
        let json = serde_json::to_value(&rec).unwrap();

        assert!(json["value"].is_number());
        assert!(json["amount"].is_number());
        assert_eq!(json["outcome"], "loss");
        assert_eq!(json["date"], "2024-01-01");
    }
}
