use dialoguer::Input;

use crate::error::Result;
use crate::planner::{Decision, SelectionPrompt};

/// Terminal prompt for interactive planning.
///
/// Blocks on stdin until the answer is one of y/yes/n/no/r/replace/x/skip
/// (empty accepts).
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl SelectionPrompt for TerminalPrompt {
    fn decide(&mut self, day: u32, category: &str, proposal: &str) -> Result<Decision> {
        loop {
            let input: String = Input::new()
                .with_prompt(format!(
                    "Day {} {}: {}. Accept? [Y/n/r=replace/x=skip]",
                    day, category, proposal
                ))
                .allow_empty(true)
                .interact_text()?;

            match Decision::parse(&input) {
                Some(decision) => return Ok(decision),
                None => println!("Please enter Y/n/r/x"),
            }
        }
    }

    fn no_alternatives(&mut self, category: &str) {
        println!("No other {} courses available.", category);
    }
}
