//! Dashboard statistics derived from the entry collection

use crate::domain::entry::{JournalEntry, ResultType};

/// Number of trades shown in the trailing performance chart
pub const RECENT_TRADE_COUNT: usize = 10;

/// One bar of the trailing performance chart
#[derive(Debug, Clone, PartialEq)]
pub struct RecentTrade {
    pub symbol: String,
    pub signed_pnl: f64,
    pub result_type: ResultType,
}

/// Aggregate metrics over a non-empty collection
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub break_evens: usize,
    /// Percentage of trades that are profits
    pub win_rate: f64,
    pub total_pnl: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    /// Up to the last ten trades by timestamp, oldest first
    pub recent_trades: Vec<RecentTrade>,
}

impl DashboardStats {
    /// Win rate rounded to one decimal place
    pub fn win_rate_display(&self) -> String {
        format!("{:.1}%", self.win_rate)
    }
}

/// Compute dashboard statistics.
///
/// Returns `None` when there are no entries, so callers can show a
/// "no data" state instead of a zero win rate.
pub fn compute_stats(entries: &[JournalEntry]) -> Option<DashboardStats> {
    if entries.is_empty() {
        return None;
    }

    let total_trades = entries.len();
    let count = |result: ResultType| {
        entries
            .iter()
            .filter(|e| e.record.result_type == result)
            .count()
    };
    let wins = count(ResultType::Profit);
    let losses = count(ResultType::Loss);
    let break_evens = count(ResultType::BreakEven);

    let win_rate = wins as f64 / total_trades as f64 * 100.0;
    let total_pnl: f64 = entries.iter().map(JournalEntry::signed_pnl).sum();

    let best_trade = entries
        .iter()
        .map(JournalEntry::signed_pnl)
        .fold(f64::NEG_INFINITY, f64::max);
    let worst_trade = entries
        .iter()
        .map(JournalEntry::signed_pnl)
        .fold(f64::INFINITY, f64::min);

    // Display order is newest first; the chart needs time order.
    let mut chronological: Vec<&JournalEntry> = entries.iter().collect();
    chronological.sort_by_key(|e| e.timestamp);
    let skip = chronological.len().saturating_sub(RECENT_TRADE_COUNT);
    let recent_trades = chronological
        .into_iter()
        .skip(skip)
        .map(|e| RecentTrade {
            symbol: e.record.symbol.clone(),
            signed_pnl: e.signed_pnl(),
            result_type: e.record.result_type,
        })
        .collect();

    Some(DashboardStats {
        total_trades,
        wins,
        losses,
        break_evens,
        win_rate,
        total_pnl,
        best_trade,
        worst_trade,
        recent_trades,
    })
}
