//! Output formatting utilities

use crate::domain::{DashboardStats, JournalEntry, ResultType};

/// Format entries for the history listing
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No trades recorded yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let r = &entry.record;
        output.push_str(&format!(
            "{}  {}  {:<5} {:<10} {:<10} {:>12}  {}\n",
            entry.short_id(),
            r.date,
            r.entry_time,
            r.symbol,
            r.side.label(),
            format_amount(r.result_type, r.pnl_amount),
            r.result_type.label(),
        ));
    }
    output
}

/// P&L as the history list shows it: profits carry a leading plus
fn format_amount(result_type: ResultType, amount: f64) -> String {
    if result_type == ResultType::Profit {
        format!("+{}", amount)
    } else {
        format!("{}", amount)
    }
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format every field of one entry
pub fn format_entry_detail(entry: &JournalEntry) -> String {
    let r = &entry.record;
    let mut out = String::new();

    out.push_str(&format!("Entry {}\n", entry.id));
    out.push_str(&format!(
        "Recorded {}\n\n",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push_str(&format!("Plan No:     {}\n", r.plan_no));
    out.push_str(&format!("Date:        {}\n", r.date));
    out.push_str(&format!("Symbol:      {}\n", r.symbol));
    out.push_str(&format!("Time:        {} - {}\n", r.entry_time, r.exit_time));
    out.push_str(&format!("Market:      {}\n", r.market_condition));
    out.push_str(&format!("Emotion:     {}\n", r.emotion));
    out.push_str(&format!("Confidence:  {}%\n\n", r.confidence));

    out.push_str(&format!("Side:        {}\n", r.side));
    out.push_str(&format!("Entry:       {}\n", r.entry_price));
    out.push_str(&format!("Lot size:    {}\n", r.lot_size));
    out.push_str(&format!("Stop loss:   {}\n", r.stop_loss));
    out.push_str(&format!("Take profit: {}\n", r.take_profit));
    out.push_str(&format!("Closed at:   {}\n", r.actual_close_price));
    out.push_str(&format!(
        "Result:      {} {} ({}%)\n\n",
        r.result_type,
        format_amount(r.result_type, r.pnl_amount),
        r.pnl_percent
    ));

    out.push_str(&format!("Logic:       {}\n", r.logic));
    out.push_str(&format!(
        "Followed plan: {}{}\n",
        yes_no(r.followed_plan),
        reason(&r.followed_plan_reason)
    ));
    out.push_str(&format!(
        "Moved SL/TP:   {}{}\n",
        yes_no(r.moved_sltp),
        reason(&r.moved_sltp_reason)
    ));
    out.push_str(&format!("Mistakes:    {}\n", r.mistakes));
    out.push_str(&format!("Key learning: {}\n", r.key_learning));

    if let Some(feedback) = &r.ai_feedback {
        out.push_str("\nAI feedback:\n");
        out.push_str(feedback);
        out.push('\n');
    }

    out
}

fn reason(text: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        format!(" ({})", text)
    }
}

const BAR_WIDTH: usize = 20;

/// Format the dashboard, or a "no data" message
pub fn format_stats(stats: Option<&DashboardStats>) -> String {
    let Some(stats) = stats else {
        return "No trades recorded yet\nRecord your first trade with 'protrade add' to see statistics"
            .to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("Total trades:  {}\n", stats.total_trades));
    out.push_str(&format!(
        "Win rate:      {} (wins {} / losses {})\n",
        stats.win_rate_display(),
        stats.wins,
        stats.losses
    ));
    out.push_str(&format!("Net P&L:       {}\n", signed(stats.total_pnl)));
    out.push_str(&format!("Best trade:    {}\n", signed(stats.best_trade)));
    out.push_str(&format!("Worst trade:   {}\n", signed(stats.worst_trade)));

    out.push_str(&format!(
        "\nLast {} trades:\n",
        stats.recent_trades.len()
    ));
    let scale = stats
        .recent_trades
        .iter()
        .map(|t| t.signed_pnl.abs())
        .fold(0.0_f64, f64::max);
    for trade in &stats.recent_trades {
        let len = if scale > 0.0 {
            ((trade.signed_pnl.abs() / scale) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let mark = if trade.signed_pnl >= 0.0 { '+' } else { '-' };
        out.push_str(&format!(
            "{:<10} {:>12}  {}\n",
            trade.symbol,
            signed(trade.signed_pnl),
            mark.to_string().repeat(len)
        ));
    }

    out
}
