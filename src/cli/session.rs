//! One run of the tool: read a path, convert, report

use crate::cli::prompt::{Prompter, EXTENSION_PROMPT, PATH_PROMPT};
use crate::codec::IconCodec;
use crate::converter::{Converter, DispatchOutcome};
use crate::utils::error::{ErrorKind, IcoForgeError};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Process exit status for scripted runs.
///
/// 0 clean, 1 conversion failures, 2 bad input or settings,
/// 3 result folder could not be created.
pub fn exit_code(result: &Result<DispatchOutcome, IcoForgeError>) -> u8 {
    match result {
        Ok(outcome) if outcome.is_clean() => 0,
        Ok(_) => 1,
        Err(e) => match e.kind() {
            ErrorKind::Conversion => 1,
            ErrorKind::Input | ErrorKind::Config => 2,
            ErrorKind::DirectoryAllocation => 3,
        },
    }
}

/// Convert whatever `path` names, asking for missing answers on the prompter.
///
/// Every outcome, including errors, is written to the prompter's output.
/// Returns the exit status from [`exit_code`].
pub async fn run_session<C, R, W>(
    converter: &Converter<C>,
    prompter: &mut Prompter<R, W>,
    path: Option<String>,
    extension: Option<String>,
) -> io::Result<u8>
where
    C: IconCodec + 'static,
    R: BufRead,
    W: Write,
{
    let raw = match path {
        Some(path) => path,
        None => prompter.ask(PATH_PROMPT)?,
    };

    let shared = RefCell::new(prompter);
    let result = converter
        .dispatch(
            &raw,
            || match extension {
                Some(ext) => ext,
                None => shared
                    .borrow_mut()
                    .ask(EXTENSION_PROMPT)
                    .unwrap_or_else(|e| {
                        warn!("Failed to read extension: {}", e);
                        String::new()
                    }),
            },
            |outcome| {
                if let Err(e) = shared.borrow_mut().say(outcome) {
                    warn!("Failed to print status line: {}", e);
                }
            },
        )
        .await;

    let prompter = shared.into_inner();
    match &result {
        Ok(DispatchOutcome::Single(outcome)) => prompter.say(outcome)?,
        Ok(DispatchOutcome::Batch(summary)) => prompter.say(summary)?,
        Err(e) => prompter.say(e)?,
    }

    Ok(exit_code(&result))
}
