//! CLI command definitions

use crate::domain::{EntryDraft, MarketCondition, ResultType, TradeSide};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "protrade")]
#[command(about = "Terminal trading journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a new trade
    Add {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Change fields of an existing trade
    Edit {
        /// Entry id or unique prefix
        id: String,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete a trade
    Delete {
        /// Entry id or unique prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List trades, newest first
    List {
        /// Show at most this many trades
        #[arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,
    },

    /// Show every field of a trade
    Show {
        /// Entry id or unique prefix
        id: String,
    },

    /// Show win rate, P&L and recent performance
    Stats,

    /// Export all trades to CSV
    Export {
        /// Directory to write into (default: journal root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask the AI coach for feedback on a trade and save it
    Analyze {
        /// Entry id or unique prefix
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Trade fields shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct EntryArgs {
    /// Plan number (e.g., 001)
    #[arg(long = "plan")]
    pub plan_no: Option<String>,

    /// Trade date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Symbol (e.g., XAUUSD, BTCUSD)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Entry time, HH:MM
    #[arg(long)]
    pub entry_time: Option<String>,

    /// Exit time, HH:MM
    #[arg(long)]
    pub exit_time: Option<String>,

    /// Market condition (sideways, uptrend, downtrend)
    #[arg(long)]
    pub market: Option<MarketCondition>,

    /// How you felt (e.g., fear, greed, confident)
    #[arg(long)]
    pub emotion: Option<String>,

    /// Confidence, 0-100
    #[arg(long, allow_negative_numbers = true)]
    pub confidence: Option<i64>,

    /// Side (long, short)
    #[arg(long)]
    pub side: Option<TradeSide>,

    #[arg(long, allow_negative_numbers = true)]
    pub entry_price: Option<f64>,

    #[arg(long = "lot", allow_negative_numbers = true)]
    pub lot_size: Option<f64>,

    #[arg(long = "sl", allow_negative_numbers = true)]
    pub stop_loss: Option<f64>,

    #[arg(long = "tp", allow_negative_numbers = true)]
    pub take_profit: Option<f64>,

    /// Price the position was actually closed at
    #[arg(long = "close", allow_negative_numbers = true)]
    pub actual_close_price: Option<f64>,

    /// Result (profit, loss, breakeven)
    #[arg(short = 'r', long = "result")]
    pub result_type: Option<ResultType>,

    /// P&L amount
    #[arg(long = "pnl", allow_negative_numbers = true)]
    pub pnl_amount: Option<f64>,

    /// P&L percent
    #[arg(long = "pnl-pct", allow_negative_numbers = true)]
    pub pnl_percent: Option<f64>,

    /// Why you took the trade
    #[arg(short, long)]
    pub logic: Option<String>,

    /// Whether the trade followed the plan (true/false)
    #[arg(long)]
    pub followed_plan: Option<bool>,

    #[arg(long)]
    pub followed_plan_reason: Option<String>,

    /// Whether SL/TP was moved after entry (true/false)
    #[arg(long = "moved-sltp")]
    pub moved_sltp: Option<bool>,

    #[arg(long = "moved-sltp-reason")]
    pub moved_sltp_reason: Option<String>,

    #[arg(long)]
    pub mistakes: Option<String>,

    /// Key learning from the trade
    #[arg(long = "learning")]
    pub key_learning: Option<String>,
}

impl From<EntryArgs> for EntryDraft {
    fn from(args: EntryArgs) -> Self {
        EntryDraft {
            plan_no: args.plan_no,
            date: args.date,
            symbol: args.symbol,
            entry_time: args.entry_time,
            exit_time: args.exit_time,
            market_condition: args.market,
            emotion: args.emotion,
            confidence: args.confidence,
            side: args.side,
            entry_price: args.entry_price,
            lot_size: args.lot_size,
            stop_loss: args.stop_loss,
            take_profit: args.take_profit,
            actual_close_price: args.actual_close_price,
            result_type: args.result_type,
            pnl_amount: args.pnl_amount,
            pnl_percent: args.pnl_percent,
            logic: args.logic,
            followed_plan: args.followed_plan,
            followed_plan_reason: args.followed_plan_reason,
            moved_sltp: args.moved_sltp,
            moved_sltp_reason: args.moved_sltp_reason,
            mistakes: args.mistakes,
            key_learning: args.key_learning,
            ai_feedback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "protrade", "add", "--plan", "001", "-s", "xauusd", "--side", "short", "-r",
            "loss", "--pnl", "-50", "--logic", "Double top",
        ])
        .unwrap();

        match cli.command {
            Commands::Add { entry } => {
                let draft = EntryDraft::from(entry);
                assert_eq!(draft.symbol.as_deref(), Some("xauusd"));
                assert_eq!(draft.side, Some(TradeSide::Short));
                assert_eq!(draft.result_type, Some(ResultType::Loss));
                assert_eq!(draft.pnl_amount, Some(-50.0));
                assert_eq!(draft.logic.as_deref(), Some("Double top"));
                assert_eq!(draft.date, None);
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_edit_only_sets_given_fields() {
        let cli = Cli::try_parse_from(["protrade", "edit", "abc", "--moved-sltp", "true"]).unwrap();

        match cli.command {
            Commands::Edit { id, entry } => {
                assert_eq!(id, "abc");
                let draft = EntryDraft::from(entry);
                assert_eq!(draft.moved_sltp, Some(true));
                assert_eq!(draft.symbol, None);
            }
            other => panic!("Expected Edit, got {:?}", other),
        }
    }

    #[test]
    fn test_list_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["protrade", "list", "--limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["protrade", "list", "-n", "3"]).unwrap();
        match cli.command {
            Commands::List { limit } => assert_eq!(limit, Some(3)),
            other => panic!("Expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_enum_value_is_rejected() {
        let result = Cli::try_parse_from(["protrade", "add", "--side", "sideways"]);
        assert!(result.is_err());
    }
}
