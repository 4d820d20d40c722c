//! Expand a cron expression into the explicit values of each of its fields.
//!
//! ```rust
//! use cron_expander::{render_report, Invocation};
//!
//! let invocation = Invocation::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! let report = render_report(&invocation).unwrap();
//! assert_eq!(
//!     report,
//!     "minute        0 15 30 45\n\
//!      hour          0\n\
//!      day of month  1 15\n\
//!      month         1 2 3 4 5 6 7 8 9 10 11 12\n\
//!      day of week   1 2 3 4 5\n\
//!      command       /usr/bin/find"
//! );
//! ```

use tracing::debug;

pub mod errors;
pub mod formatter;
pub mod invocation;
pub mod logging;

pub use cron_expander_parser::{evaluate, parse_cron_expression, InvalidExpression};
pub use cron_expander_types::{CronField, FieldDomain, ParsedCron};
pub use errors::{CronExpanderError, Result};
pub use invocation::Invocation;

use formatter::{format_rows, format_single_row, COMMAND_COLUMN_NAME};

/// Expand the cron expression of an invocation and render the report, command row included
///
/// The report has no trailing line break.
#[tracing::instrument(skip_all, err(level = "debug"), fields(cron_expression = %invocation.cron_expression()))]
pub fn render_report(invocation: &Invocation) -> Result<String> {
    let parsed = parse_cron_expression(invocation.cron_expression())?;
    for (field, values) in parsed.iter() {
        debug!(field, values, "Expanded field");
    }

    Ok(format!(
        "{}\n{}",
        format_rows(parsed.iter()),
        format_single_row(COMMAND_COLUMN_NAME, invocation.command())
    ))
}
