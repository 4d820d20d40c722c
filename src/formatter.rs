/// Width of the name column of the report
pub const COLUMN_WIDTH: usize = 14;

/// Name of the row holding the command
pub const COMMAND_COLUMN_NAME: &str = "command";

const LINE_BREAK: &str = "\n";

/// Format one report row: `key` left justified in a [`COLUMN_WIDTH`] wide column, then `value`
///
/// Keys longer than the column are kept whole.
///
/// ```rust
/// use cron_expander::formatter::format_single_row;
///
/// assert_eq!("hour          0 12", format_single_row("hour", "0 12"));
/// ```
pub fn format_single_row(key: &str, value: &str) -> String {
    format!("{key:<width$}{value}", width = COLUMN_WIDTH)
}

/// Format every `(key, value)` pair as a row, one per line, without a trailing line break
pub fn format_rows<'k, 'v>(rows: impl IntoIterator<Item = (&'k str, &'v str)>) -> String {
    rows.into_iter()
        .map(|(key, value)| format_single_row(key, value))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
