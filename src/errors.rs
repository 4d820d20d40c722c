use cron_expander_parser::InvalidExpression;
use thiserror::Error;

/// Errors that can occur while expanding a cron line.
///
/// The first two variants are raised before the cron expression itself is looked at,
/// when the command line does not have the expected shape.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CronExpanderError {
    /// The program expects exactly one argument, got this many
    #[error("Incorrect number of arguments. Please provide a single argument with a cron expression and a command.")]
    WrongArgumentCount(usize),

    /// The argument should be 5 cron fields and a command, got this many tokens
    #[error("Invalid cron expression. It should have 5 fields and a command.")]
    WrongTokenCount(usize),

    /// One of the cron fields could not be expanded
    #[error(transparent)]
    InvalidExpression(#[from] InvalidExpression),
}

/// A Result type alias for CronExpanderError.
pub type Result<T> = core::result::Result<T, CronExpanderError>;
