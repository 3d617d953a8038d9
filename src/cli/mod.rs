//! Interactive terminal adapter around the converter

pub mod prompt;
pub mod session;

pub use prompt::{Prompter, EXTENSION_PROMPT, FINISH_PROMPT, PATH_PROMPT};
pub use session::{exit_code, run_session};
