//! Coaching feedback capability and prompt

use crate::domain::entry::TradeRecord;
use crate::error::Result;

/// Something that turns a prompt into free-text coaching feedback
pub trait TradeCoach {
    fn request(&self, prompt: &str) -> Result<String>;
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Build the coaching prompt for one trade
pub fn build_prompt(record: &TradeRecord) -> String {
    format!(
        "Role: Professional Trading Coach.\n\
         Task: Analyze this trading journal entry and provide short, constructive feedback.\n\
         \n\
         Trade Data:\n\
         - Symbol: {symbol} ({side})\n\
         - Context: Market {market}, Emotion: {emotion}, Confidence: {confidence}%\n\
         - Setup: Entry {entry}, SL {sl}, TP {tp}\n\
         - Result: {result} ({pnl})\n\
         - Logic: {logic}\n\
         - Mistakes: {mistakes}\n\
         - Review: Followed Plan? {followed}. Moved SL/TP? {moved}.\n\
         \n\
         Please provide feedback on:\n\
         1. Risk Management (R:R ratio based on Entry, SL, TP).\n\
         2. Psychology (Connection between emotion and result).\n\
         3. Technical Execution (Based on logic and mistakes).\n\
         4. Actionable Advice for next trade.\n",
        symbol = record.symbol,
        side = record.side,
        market = record.market_condition,
        emotion = record.emotion,
        confidence = record.confidence,
        entry = record.entry_price,
        sl = record.stop_loss,
        tp = record.take_profit,
        result = record.result_type,
        pnl = record.pnl_amount,
        logic = record.logic,
        mistakes = record.mistakes,
        followed = yes_no(record.followed_plan),
        moved = yes_no(record.moved_sltp),
    )
}
