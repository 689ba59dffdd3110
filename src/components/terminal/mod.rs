mod input;
mod output;
mod terminal;

pub use input::{Input, focus_input};
pub use output::{Output, TypingOutput};
pub use terminal::Terminal;
