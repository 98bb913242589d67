//! CSV export of the entry collection

use crate::domain::entry::JournalEntry;
use chrono::NaiveDate;

/// Byte-order mark so spreadsheet tools read the file as UTF-8
pub const BOM: char = '\u{FEFF}';

const HEADERS: [&str; 15] = [
    "Plan No",
    "Date",
    "Time",
    "Symbol",
    "Side",
    "Result",
    "PnL Amount",
    "PnL %",
    "Entry Price",
    "Exit Price",
    "Lot Size",
    "Market",
    "Emotion",
    "Mistakes",
    "Logic",
];

/// Serialize entries, in the order given, to CSV text with a leading BOM
pub fn export_csv(entries: &[JournalEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADERS.join(","));

    for entry in entries {
        let r = &entry.record;
        let row = [
            r.plan_no.clone(),
            r.date.clone(),
            r.entry_time.clone(),
            r.symbol.clone(),
            r.side.label().to_string(),
            r.result_type.label().to_string(),
            r.pnl_amount.to_string(),
            r.pnl_percent.to_string(),
            r.entry_price.to_string(),
            r.actual_close_price.to_string(),
            r.lot_size.to_string(),
            r.market_condition.label().to_string(),
            r.emotion.clone(),
            quote(&r.mistakes),
            quote(&r.logic),
        ];
        lines.push(row.join(","));
    }

    format!("{}{}", BOM, lines.join("\n"))
}

/// Wrap free text in double quotes, doubling any quotes inside it
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Export filename for the given day
pub fn export_filename(date: NaiveDate) -> String {
    format!("protrade_export_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{ResultType, TradeRecord, TradeSide};
    use chrono::{TimeZone, Utc};

    fn sample() -> JournalEntry {
        JournalEntry::new(
            "id-1".to_string(),
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            TradeRecord {
                plan_no: "007".to_string(),
                date: "2025-01-17".to_string(),
                symbol: "XAUUSD".to_string(),
                entry_time: "09:30".to_string(),
                side: TradeSide::Short,
                result_type: ResultType::Loss,
                pnl_amount: -12.5,
                pnl_percent: -1.25,
                entry_price: 2031.4,
                actual_close_price: 2035.0,
                lot_size: 0.1,
                emotion: "Fear".to_string(),
                mistakes: "He said \"stop\"".to_string(),
                logic: "Rejection, then break".to_string(),
                ..TradeRecord::default()
            },
        )
    }

    #[test]
    fn test_quote_doubles_inner_quotes() {
        assert_eq!(quote("He said \"stop\""), "\"He said \"\"stop\"\"\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_output_starts_with_bom_and_header() {
        let csv = export_csv(&[]);
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(
            csv.trim_start_matches(BOM),
            "Plan No,Date,Time,Symbol,Side,Result,PnL Amount,PnL %,Entry Price,\
             Exit Price,Lot Size,Market,Emotion,Mistakes,Logic"
        );
    }

    #[test]
    fn test_row_layout() {
        let csv = export_csv(&[sample()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "007,2025-01-17,09:30,XAUUSD,SELL-Short,Loss,-12.5,-1.25,2031.4,2035,0.1,\
             Sideways,Fear,\"He said \"\"stop\"\"\",\"Rejection, then break\""
        );
    }

    #[test]
    fn test_rows_follow_given_order() {
        let mut second = sample();
        second.record.plan_no = "008".to_string();

        let csv = export_csv(&[second, sample()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("008,"));
        assert!(lines[2].starts_with("007,"));
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(export_filename(date), "protrade_export_2025-01-07.csv");
    }
}
