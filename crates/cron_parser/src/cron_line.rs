use cron_expander_types::{split_trimmed, CronField, ParsedCron};

use crate::{evaluate, InvalidExpression};

const FIELD_SEPARATOR: char = ' ';

/// Split a cron expression into its five field tokens, in [`CronField::ALL`] order
fn cron_parts(expression: &str) -> Result<[&str; 5], InvalidExpression> {
    let parts = split_trimmed(expression, FIELD_SEPARATOR);
    let count = parts.len();

    parts.try_into().map_err(|_| {
        InvalidExpression::new(
            format!("expected 5 parts, but got {count}"),
            expression,
        )
    })
}

pub(crate) fn cron_line(expression: &str) -> Result<ParsedCron, InvalidExpression> {
    let parts = cron_parts(expression)?;

    ParsedCron::try_from_fn(|field: CronField| evaluate(&field.domain(), parts[field as usize]))
}
