//! Journal entry records and their enumerations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market state at the time of the trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarketCondition {
    #[default]
    Sideways,
    Uptrend,
    Downtrend,
}

impl MarketCondition {
    pub fn label(&self) -> &'static str {
        match self {
            MarketCondition::Sideways => "Sideways",
            MarketCondition::Uptrend => "Uptrend",
            MarketCondition::Downtrend => "Downtrend",
        }
    }
}

impl FromStr for MarketCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sideways" | "range" => Ok(MarketCondition::Sideways),
            "up" | "uptrend" => Ok(MarketCondition::Uptrend),
            "down" | "downtrend" => Ok(MarketCondition::Downtrend),
            _ => Err(format!(
                "Invalid market condition: '{}'. Valid values are: sideways, uptrend, downtrend",
                s
            )),
        }
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TradeSide {
    #[default]
    #[serde(rename = "BUY-Long")]
    Long,
    #[serde(rename = "SELL-Short")]
    Short,
}

impl TradeSide {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Long => "BUY-Long",
            TradeSide::Short => "SELL-Short",
        }
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" | "buy-long" => Ok(TradeSide::Long),
            "short" | "sell" | "sell-short" => Ok(TradeSide::Short),
            _ => Err(format!(
                "Invalid side: '{}'. Valid values are: long, short",
                s
            )),
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a trade's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResultType {
    #[default]
    Profit,
    Loss,
    #[serde(rename = "Break Even")]
    BreakEven,
}

impl ResultType {
    pub fn label(&self) -> &'static str {
        match self {
            ResultType::Profit => "Profit",
            ResultType::Loss => "Loss",
            ResultType::BreakEven => "Break Even",
        }
    }
}

impl FromStr for ResultType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profit" | "win" => Ok(ResultType::Profit),
            "loss" | "lose" => Ok(ResultType::Loss),
            "be" | "breakeven" | "break-even" | "break even" => Ok(ResultType::BreakEven),
            _ => Err(format!(
                "Invalid result: '{}'. Valid values are: profit, loss, breakeven",
                s
            )),
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every field of an entry except its identity.
///
/// This is what the store accepts on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub plan_no: String,
    pub date: String,
    pub symbol: String,

    pub entry_time: String,
    pub exit_time: String,
    pub market_condition: MarketCondition,
    pub emotion: String,
    pub confidence: u8,

    pub side: TradeSide,
    pub entry_price: f64,
    pub lot_size: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub actual_close_price: f64,
    pub result_type: ResultType,
    pub pnl_amount: f64,
    pub pnl_percent: f64,

    pub logic: String,

    pub followed_plan: bool,
    pub followed_plan_reason: String,
    #[serde(rename = "movedSLTP")]
    pub moved_sltp: bool,
    #[serde(rename = "movedSLTPReason")]
    pub moved_sltp_reason: String,
    pub mistakes: String,
    pub key_learning: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_string"
    )]
    pub ai_feedback: Option<String>,
}

/// One recorded trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub record: TradeRecord,
}

impl JournalEntry {
    pub fn new(id: String, timestamp: DateTime<Utc>, record: TradeRecord) -> Self {
        JournalEntry {
            id,
            timestamp,
            record,
        }
    }

    /// P&L with its sign taken from the result type.
    ///
    /// Profit counts as gained, loss as lost whatever sign was stored.
    /// Break-even keeps the stored amount as is.
    pub fn signed_pnl(&self) -> f64 {
        let amount = self.record.pnl_amount;
        match self.record.result_type {
            ResultType::Profit => amount,
            ResultType::Loss => -amount.abs(),
            ResultType::BreakEven => amount,
        }
    }

    /// First eight characters of the id, for listings
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(idx, _)| idx)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(result_type: ResultType, pnl_amount: f64) -> JournalEntry {
        JournalEntry::new(
            "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            TradeRecord {
                result_type,
                pnl_amount,
                ..TradeRecord::default()
            },
        )
    }

    #[test]
    fn test_signed_pnl_profit_keeps_sign() {
        assert_eq!(entry(ResultType::Profit, 100.0).signed_pnl(), 100.0);
    }

    #[test]
    fn test_signed_pnl_loss_is_always_negative() {
        assert_eq!(entry(ResultType::Loss, 50.0).signed_pnl(), -50.0);
        assert_eq!(entry(ResultType::Loss, -50.0).signed_pnl(), -50.0);
    }

    #[test]
    fn test_signed_pnl_break_even_is_raw() {
        assert_eq!(entry(ResultType::BreakEven, -20.0).signed_pnl(), -20.0);
        assert_eq!(entry(ResultType::BreakEven, 5.0).signed_pnl(), 5.0);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(entry(ResultType::Profit, 0.0).short_id(), "0f8fad5b");

        let mut short = entry(ResultType::Profit, 0.0);
        short.id = "abc".to_string();
        assert_eq!(short.short_id(), "abc");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("BUY".parse::<TradeSide>().unwrap(), TradeSide::Long);
        assert_eq!("short".parse::<TradeSide>().unwrap(), TradeSide::Short);
        assert_eq!("be".parse::<ResultType>().unwrap(), ResultType::BreakEven);
        assert_eq!("Win".parse::<ResultType>().unwrap(), ResultType::Profit);
        assert_eq!(
            "up".parse::<MarketCondition>().unwrap(),
            MarketCondition::Uptrend
        );
        assert!("sideways-ish".parse::<MarketCondition>().is_err());
    }

    #[test]
    fn test_serializes_with_camel_case_keys_and_labels() {
        let mut e = entry(ResultType::BreakEven, 0.0);
        e.record.side = TradeSide::Short;
        e.record.moved_sltp = true;

        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
        assert_eq!(json["resultType"], "Break Even");
        assert_eq!(json["side"], "SELL-Short");
        assert_eq!(json["marketCondition"], "Sideways");
        assert_eq!(json["movedSLTP"], true);
        assert!(json.get("planNo").is_some());
        assert!(json.get("aiFeedback").is_none());
    }

    #[test]
    fn test_empty_ai_feedback_reads_as_absent() {
        let mut json = serde_json::to_value(entry(ResultType::Profit, 1.0)).unwrap();
        json["aiFeedback"] = serde_json::Value::String(String::new());

        let parsed: JournalEntry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.record.ai_feedback, None);
    }
}
