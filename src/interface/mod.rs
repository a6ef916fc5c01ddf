pub mod prompts;
pub mod render;

pub use prompts::TerminalPrompt;
pub use render::{
    display_course_list, display_macro_summary, format_course_list, format_macro_summary,
};
