//! Coaching feedback use case

use crate::domain::{build_prompt, TradeCoach, TradeRecord};
use crate::error::Result;

pub const MISSING_KEY_FEEDBACK: &str =
    "API key not found. Set the configured API key variable to use AI analysis.";
pub const EMPTY_FEEDBACK: &str = "Unable to analyze this trade right now.";
pub const ERROR_FEEDBACK: &str = "An error occurred while connecting to the AI service.";

/// Outcome of a feedback request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Text written by the coach
    Coach(String),
    /// Fixed message shown when the coach could not answer
    Fallback(&'static str),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Coach(text) => text,
            Feedback::Fallback(text) => text,
        }
    }
}

/// Asks a coach for feedback and never fails.
///
/// A missing coach, a coach that could not be set up, a failed request and an
/// empty answer each turn into a fixed message the user can read.
pub struct AnalyzeService<C: TradeCoach> {
    coach: CoachSlot<C>,
}

enum CoachSlot<C> {
    Ready(C),
    Missing,
    Broken,
}

impl<C: TradeCoach> AnalyzeService<C> {
    /// `coach` is `None` when no credentials are configured
    pub fn new(coach: Option<C>) -> Self {
        let coach = match coach {
            Some(coach) => CoachSlot::Ready(coach),
            None => CoachSlot::Missing,
        };
        AnalyzeService { coach }
    }

    /// Take the result of building a coach. A build error is logged and
    /// answered with the connection fallback.
    pub fn from_setup(setup: Result<Option<C>>) -> Self {
        match setup {
            Ok(coach) => AnalyzeService::new(coach),
            Err(e) => {
                log::error!("AI client setup failed: {}", e);
                AnalyzeService {
                    coach: CoachSlot::Broken,
                }
            }
        }
    }

    /// Symbol and logic must be filled in before feedback is worth asking for
    pub fn is_ready(record: &TradeRecord) -> bool {
        !record.symbol.trim().is_empty() && !record.logic.trim().is_empty()
    }

    pub fn feedback(&self, record: &TradeRecord) -> Feedback {
        let coach = match &self.coach {
            CoachSlot::Ready(coach) => coach,
            CoachSlot::Missing => return Feedback::Fallback(MISSING_KEY_FEEDBACK),
            CoachSlot::Broken => return Feedback::Fallback(ERROR_FEEDBACK),
        };

        match coach.request(&build_prompt(record)) {
            Ok(text) if text.trim().is_empty() => Feedback::Fallback(EMPTY_FEEDBACK),
            Ok(text) => Feedback::Coach(text.trim().to_string()),
            Err(e) => {
                log::error!("AI analysis failed: {}", e);
                Feedback::Fallback(ERROR_FEEDBACK)
            }
        }
    }
}
