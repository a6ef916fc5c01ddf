use crate::error::Result;

/// Operator answer to a proposed course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Replace,
    Skip,
}

impl Decision {
    /// Parse an answer. Empty input accepts; unknown input is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => Some(Decision::Accept),
            "n" | "no" | "r" | "replace" => Some(Decision::Replace),
            "x" | "skip" => Some(Decision::Skip),
            _ => None,
        }
    }
}

/// Asks the operator about one proposed course during interactive planning.
///
/// Implementations block until they have a recognized answer.
pub trait SelectionPrompt {
    /// `day` is 1-based.
    fn decide(&mut self, day: u32, category: &str, proposal: &str) -> Result<Decision>;

    /// Called when a replacement was requested but nothing else is left.
    fn no_alternatives(&mut self, _category: &str) {}
}

/// Accepts every proposal. Used when planning is not interactive.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl SelectionPrompt for AcceptAll {
    fn decide(&mut self, _day: u32, _category: &str, _proposal: &str) -> Result<Decision> {
        Ok(Decision::Accept)
    }
}
