pub use cron_expander_types::{CronField, FieldDomain, FieldExpression, ParsedCron, StepAnchor};
use thiserror::Error;

mod cron_line;
mod nom_field_expression;

/// A cron expression, or one of its fields, could not be expanded
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Invalid expression `{input}`: {msg}")]
pub struct InvalidExpression {
    pub msg: String,
    pub input: String,
}

impl InvalidExpression {
    pub fn new(msg: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            input: input.into(),
        }
    }
}

impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for InvalidExpression {
    fn from(e: nom::Err<nom::error::Error<&'a str>>) -> Self {
        match e {
            // Should not happen (only for streams)
            nom::Err::Incomplete(_) => InvalidExpression::new("incomplete input", ""),
            nom::Err::Error(e) | nom::Err::Failure(e) => InvalidExpression::new(
                format!("{} at `{}`", e.code.description(), e.input),
                e.input,
            ),
        }
    }
}

/// Expand a single field expression against the domain of legal values of its field
///
/// The token is tagged with the first shape it matches, in this order:
///
/// 1. list (`a,b,c`): contains a `,`; items are echoed back as written, they are **not** expanded,
///    so `1-2,3` gives `1-2 3`. Trailing empty items are dropped (`1,2,` gives `1 2`)
/// 2. step (`*/n` or `k/n`): contains a `/`; every value `v` of the domain with `v >= k` and
///    `(v - k) % n == 0`. For `*`, `k` is the first legal value of the domain (0 or 1). `n` must be
///    a positive integer
/// 3. range (`a-b`): contains a `-`; every value of the domain between `a` and `b` inclusive.
///    Bounds outside of the domain simply yield fewer (or no) values
/// 4. wildcard (`*`): every value of the domain
/// 5. single (`15`): one or more digits, echoed back unchanged without any bound check
///
/// Shapes cannot be combined: `1-5/2` is routed to the step rule and rejected.
///
/// ```rust
/// use cron_expander_parser::{evaluate, CronField};
///
/// let minutes = CronField::Minute.domain();
/// assert_eq!("0 15 30 45", evaluate(&minutes, "*/15").unwrap());
/// assert_eq!("58 59", evaluate(&minutes, "58-70").unwrap());
/// assert_eq!("1 2 3", evaluate(&minutes, "1,2,3").unwrap());
/// assert!(evaluate(&minutes, "*/0").is_err());
/// ```
pub fn evaluate(domain: &FieldDomain, token: &str) -> Result<String, InvalidExpression> {
    let expression = nom_field_expression::field_expression(token)?;
    Ok(expression.expand(domain))
}

/// Parse a five fields cron expression into the expanded values of each field
///
/// ```crontab
/// ┌───────────── minute (0 - 59)
/// │ ┌───────────── hour (0 - 23)
/// │ │ ┌───────────── day of the month (1 - 31)
/// │ │ │ ┌───────────── month (1 - 12)
/// │ │ │ │ ┌───────────── day of the week (1 - 7)
/// │ │ │ │ │
/// * * * * *
/// ```
///
/// Fields are separated by exactly one space, trailing spaces are ignored. Parsing stops at the first field that cannot be
/// expanded (see [`evaluate`] for the supported syntax).
///
/// Names (`JAN`, `MON`, ...) and a year field are not supported.
pub fn parse_cron_expression(expression: &str) -> Result<ParsedCron, InvalidExpression> {
    cron_line::cron_line(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(values: impl IntoIterator<Item = u32>) -> String {
        values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_wildcard_yields_whole_domain() {
        for field in CronField::ALL {
            let domain = field.domain();
            let expanded = evaluate(&domain, "*").unwrap();
            assert_eq!(joined(domain.values().iter().copied()), expanded);
            assert_eq!(domain.values().len(), expanded.split(' ').count());
        }
    }

    #[test]
    fn test_range_is_filtered_by_domain() {
        let days = CronField::DayOfMonth.domain();
        assert_eq!("1 2", evaluate(&days, "0-2").unwrap());
        assert_eq!("", evaluate(&days, "32-40").unwrap());
        assert_eq!("", evaluate(&days, "5-3").unwrap());
    }

    #[test]
    fn test_list_is_verbatim() {
        let months = CronField::Month.domain();
        assert_eq!("0 13 99", evaluate(&months, "0,13,99").unwrap());
        assert_eq!("1-2 3", evaluate(&months, "1-2,3").unwrap());
    }

    #[test]
    fn test_list_trailing_commas() {
        let minutes = CronField::Minute.domain();
        assert_eq!("1 2", evaluate(&minutes, "1,2,").unwrap());
        assert_eq!("", evaluate(&minutes, ",").unwrap());
        assert_eq!("1  2", evaluate(&minutes, "1,,2").unwrap());
    }

    #[test]
    fn test_single_is_not_bound_checked() {
        assert_eq!("99", evaluate(&CronField::Minute.domain(), "99").unwrap());
    }

    #[test]
    fn test_step_shift_follows_domain_start() {
        assert_eq!("0 6 12 18", evaluate(&CronField::Hour.domain(), "*/6").unwrap());
        assert_eq!("1 6 11", evaluate(&CronField::Month.domain(), "*/5").unwrap());
        assert_eq!("5 25 45", evaluate(&CronField::Minute.domain(), "5/20").unwrap());
        assert_eq!("", evaluate(&CronField::DayOfWeek.domain(), "8/2").unwrap());
    }

    #[test]
    fn test_err_unsupported_character() {
        let err = evaluate(&CronField::Minute.domain(), "&").unwrap_err();
        assert_eq!("Invalid expression `&`: unsupported expression", err.to_string());
    }

    #[test]
    fn test_parse_cron_expression() {
        let parsed = parse_cron_expression("15 12 10 6 5").unwrap();
        assert_eq!(Some("15"), parsed.get("minute"));
        assert_eq!(Some("12"), parsed.get("hour"));
        assert_eq!(Some("10"), parsed.get("day of month"));
        assert_eq!(Some("6"), parsed.get("month"));
        assert_eq!(Some("5"), parsed.get("day of week"));
    }
}
