#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn protrade_cmd() -> Command {
    let mut cmd = Command::cargo_bin("protrade").unwrap();
    cmd.env_remove("PROTRADE_ROOT");
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a journal in `root`
pub fn init_journal(root: &Path) {
    protrade_cmd().arg("init").arg(root).assert().success();
}

/// Record a trade with the required fields plus `extra` flags
pub fn add_trade(root: &Path, symbol: &str, extra: &[&str]) {
    protrade_cmd()
        .current_dir(root)
        .args(["add", "--plan", "001", "--symbol", symbol, "--logic", "Breakout retest"])
        .args(extra)
        .assert()
        .success();
}

/// Stored entries as raw JSON, in display order
pub fn stored_entries(root: &Path) -> Vec<Value> {
    let contents = fs::read_to_string(root.join(".protrade/entries.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}
