//! Entry drafts: unvalidated input that becomes a `TradeRecord`

use crate::domain::entry::{MarketCondition, ResultType, TradeRecord, TradeSide};
use crate::error::{ProtradeError, Result};
use chrono::{NaiveDate, NaiveTime};

/// Entry fields as they arrive from the input surface.
///
/// Every field can be left unset. A fresh draft behaves like a blank form:
/// unset fields fall back to the values a new trade starts with. A draft
/// seeded from an existing record falls back to that record's values instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub plan_no: Option<String>,
    pub date: Option<String>,
    pub symbol: Option<String>,
    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub market_condition: Option<MarketCondition>,
    pub emotion: Option<String>,
    pub confidence: Option<i64>,
    pub side: Option<TradeSide>,
    pub entry_price: Option<f64>,
    pub lot_size: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub actual_close_price: Option<f64>,
    pub result_type: Option<ResultType>,
    pub pnl_amount: Option<f64>,
    pub pnl_percent: Option<f64>,
    pub logic: Option<String>,
    pub followed_plan: Option<bool>,
    pub followed_plan_reason: Option<String>,
    pub moved_sltp: Option<bool>,
    pub moved_sltp_reason: Option<String>,
    pub mistakes: Option<String>,
    pub key_learning: Option<String>,
    pub ai_feedback: Option<String>,
}

const DEFAULT_CONFIDENCE: i64 = 50;

impl EntryDraft {
    pub fn new() -> Self {
        EntryDraft::default()
    }

    /// Seed a draft with every field of an existing record
    pub fn from_record(record: &TradeRecord) -> Self {
        EntryDraft {
            plan_no: Some(record.plan_no.clone()),
            date: Some(record.date.clone()),
            symbol: Some(record.symbol.clone()),
            entry_time: Some(record.entry_time.clone()),
            exit_time: Some(record.exit_time.clone()),
            market_condition: Some(record.market_condition),
            emotion: Some(record.emotion.clone()),
            confidence: Some(i64::from(record.confidence)),
            side: Some(record.side),
            entry_price: Some(record.entry_price),
            lot_size: Some(record.lot_size),
            stop_loss: Some(record.stop_loss),
            take_profit: Some(record.take_profit),
            actual_close_price: Some(record.actual_close_price),
            result_type: Some(record.result_type),
            pnl_amount: Some(record.pnl_amount),
            pnl_percent: Some(record.pnl_percent),
            logic: Some(record.logic.clone()),
            followed_plan: Some(record.followed_plan),
            followed_plan_reason: Some(record.followed_plan_reason.clone()),
            moved_sltp: Some(record.moved_sltp),
            moved_sltp_reason: Some(record.moved_sltp_reason.clone()),
            mistakes: Some(record.mistakes.clone()),
            key_learning: Some(record.key_learning.clone()),
            ai_feedback: record.ai_feedback.clone(),
        }
    }

    /// Overlay every field that is set in `other` onto this draft
    pub fn merge(mut self, other: EntryDraft) -> Self {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        overlay!(
            plan_no,
            date,
            symbol,
            entry_time,
            exit_time,
            market_condition,
            emotion,
            confidence,
            side,
            entry_price,
            lot_size,
            stop_loss,
            take_profit,
            actual_close_price,
            result_type,
            pnl_amount,
            pnl_percent,
            logic,
            followed_plan,
            followed_plan_reason,
            moved_sltp,
            moved_sltp_reason,
            mistakes,
            key_learning,
            ai_feedback,
        );
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn plan_no(mut self, plan_no: impl Into<String>) -> Self {
        self.plan_no = Some(plan_no.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn logic(mut self, logic: impl Into<String>) -> Self {
        self.logic = Some(logic.into());
        self
    }

    pub fn result(mut self, result_type: ResultType, pnl_amount: f64) -> Self {
        self.result_type = Some(result_type);
        self.pnl_amount = Some(pnl_amount);
        self
    }

    /// Check required fields and formats, producing a record for the store.
    ///
    /// `today` fills in the date when none was given.
    pub fn validate(self, today: NaiveDate) -> Result<TradeRecord> {
        let plan_no = required(self.plan_no, "plan number")?;
        let symbol = required(self.symbol, "symbol")?.to_uppercase();
        let logic = required(self.logic, "logic")?;

        let date = match self.date {
            Some(date) => {
                let date = date.trim().to_string();
                if date.is_empty() {
                    return Err(invalid("date is required"));
                }
                NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
                    invalid(&format!("date '{}' must be formatted YYYY-MM-DD", date))
                })?;
                date
            }
            None => today.format("%Y-%m-%d").to_string(),
        };

        let entry_time = optional_time(self.entry_time, "entry time")?;
        let exit_time = optional_time(self.exit_time, "exit time")?;

        let confidence = self.confidence.unwrap_or(DEFAULT_CONFIDENCE);
        let confidence = u8::try_from(confidence)
            .ok()
            .filter(|c| *c <= 100)
            .ok_or_else(|| {
                invalid(&format!(
                    "confidence must be between 0 and 100, got {}",
                    confidence
                ))
            })?;

        Ok(TradeRecord {
            plan_no,
            date,
            symbol,
            entry_time,
            exit_time,
            market_condition: self.market_condition.unwrap_or_default(),
            emotion: text(self.emotion),
            confidence,
            side: self.side.unwrap_or_default(),
            entry_price: finite(self.entry_price, "entry price")?,
            lot_size: finite(self.lot_size, "lot size")?,
            stop_loss: finite(self.stop_loss, "stop loss")?,
            take_profit: finite(self.take_profit, "take profit")?,
            actual_close_price: finite(self.actual_close_price, "close price")?,
            result_type: self.result_type.unwrap_or_default(),
            pnl_amount: finite(self.pnl_amount, "P&L amount")?,
            pnl_percent: finite(self.pnl_percent, "P&L percent")?,
            logic,
            followed_plan: self.followed_plan.unwrap_or(true),
            followed_plan_reason: text(self.followed_plan_reason),
            moved_sltp: self.moved_sltp.unwrap_or(false),
            moved_sltp_reason: text(self.moved_sltp_reason),
            mistakes: text(self.mistakes),
            key_learning: text(self.key_learning),
            ai_feedback: self.ai_feedback.filter(|s| !s.trim().is_empty()),
        })
    }
}

fn invalid(msg: &str) -> ProtradeError {
    ProtradeError::InvalidEntry(msg.to_string())
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| invalid(&format!("{} is required", name)))
}

fn optional_time(value: Option<String>, name: &str) -> Result<String> {
    let value = text(value).trim().to_string();
    if !value.is_empty() && NaiveTime::parse_from_str(&value, "%H:%M").is_err() {
        return Err(invalid(&format!(
            "{} '{}' must be formatted HH:MM",
            name, value
        )));
    }
    Ok(value)
}

/// Unset numbers start at zero. NaN and infinity have no JSON form.
fn finite(value: Option<f64>, name: &str) -> Result<f64> {
    let value = value.unwrap_or(0.0);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(&format!("{} must be a finite number, got {}", name, value)))
    }
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}
