use cron_expander_types::split_trimmed;
use getset::Getters;

use crate::errors::{CronExpanderError, Result};

const TOKEN_SEPARATOR: char = ' ';
const CRON_FIELD_SEPARATOR: &str = " ";
const CRON_FIELD_COUNT: usize = 5;

/// A command line split into its cron expression and its command
#[derive(Debug, PartialEq, Eq, Clone, Getters)]
#[getset(get = "pub")]
pub struct Invocation {
    /// The five cron fields, separated by single spaces
    cron_expression: String,
    command: String,
}

impl Invocation {
    /// Build an invocation from the program arguments (without the program name)
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [line] => Self::parse(line),
            _ => Err(CronExpanderError::WrongArgumentCount(args.len())),
        }
    }

    /// Split `"<minute> <hour> <day of month> <month> <day of week> <command>"`
    ///
    /// Trailing spaces are ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens = split_trimmed(line, TOKEN_SEPARATOR);
        if tokens.len() != CRON_FIELD_COUNT + 1 {
            return Err(CronExpanderError::WrongTokenCount(tokens.len()));
        }

        Ok(Self {
            cron_expression: tokens[..CRON_FIELD_COUNT].join(CRON_FIELD_SEPARATOR),
            command: tokens[CRON_FIELD_COUNT].to_string(),
        })
    }
}
