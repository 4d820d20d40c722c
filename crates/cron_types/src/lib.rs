use std::num::NonZeroU32;

use getset::{CopyGetters, Getters};

/// Separator used between expanded values
pub const VALUE_SEPARATOR: &str = " ";

/// Split `input` on `separator`, dropping trailing empty pieces
///
/// Interior empty pieces are kept.
///
/// ```rust
/// use cron_expander_types::split_trimmed;
///
/// assert_eq!(vec!["1", "2"], split_trimmed("1,2,,", ','));
/// assert_eq!(vec!["1", "", "2"], split_trimmed("1,,2", ','));
/// assert!(split_trimmed(",", ',').is_empty());
/// ```
pub fn split_trimmed(input: &str, separator: char) -> Vec<&str> {
    let mut pieces: Vec<&str> = input.split(separator).collect();
    while pieces.last() == Some(&"") {
        pieces.pop();
    }
    pieces
}

/// One of the five positional fields of a cron expression
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CronField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl CronField {
    /// Every field, in the order they appear in a cron expression
    pub const ALL: [CronField; 5] = [
        CronField::Minute,
        CronField::Hour,
        CronField::DayOfMonth,
        CronField::Month,
        CronField::DayOfWeek,
    ];

    /// Name of the field as printed in the report
    pub fn name(&self) -> &'static str {
        match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::DayOfMonth => "day of month",
            CronField::Month => "month",
            CronField::DayOfWeek => "day of week",
        }
    }

    /// Inclusive lower and upper bounds of the field
    pub fn boundaries(&self) -> (u32, u32) {
        match self {
            CronField::Minute => (0, 59),
            CronField::Hour => (0, 23),
            CronField::DayOfMonth => (1, 31),
            CronField::Month => (1, 12),
            CronField::DayOfWeek => (1, 7),
        }
    }

    /// Build the domain of legal values for this field
    pub fn domain(&self) -> FieldDomain {
        let (lower_bound, upper_bound) = self.boundaries();
        FieldDomain::between(lower_bound, upper_bound)
    }
}

/// The ordered list of legal values for a field
#[derive(Debug, PartialEq, Eq, Clone, Getters, CopyGetters)]
pub struct FieldDomain {
    #[getset(get_copy = "pub")]
    lower_bound: u32,
    #[getset(get_copy = "pub")]
    upper_bound: u32,
    #[getset(get = "pub")]
    values: Vec<u32>,
}

impl FieldDomain {
    /// Construct the domain holding every value from `lower_bound` to `upper_bound` inclusive
    ///
    /// ```rust
    /// use cron_expander_types::FieldDomain;
    ///
    /// let domain = FieldDomain::between(1, 7);
    /// assert_eq!(&vec![1, 2, 3, 4, 5, 6, 7], domain.values());
    /// ```
    pub fn between(lower_bound: u32, upper_bound: u32) -> Self {
        Self {
            lower_bound,
            upper_bound,
            values: (lower_bound..=upper_bound).collect(),
        }
    }

    /// Whether the first legal value is 0 (minutes and hours)
    pub fn starts_at_zero(&self) -> bool {
        self.values.first() == Some(&0)
    }

    /// Every value of the domain satisfying `predicate`, space joined
    pub fn join_matching(&self, predicate: impl Fn(u32) -> bool) -> String {
        self.values
            .iter()
            .copied()
            .filter(|v| predicate(*v))
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(VALUE_SEPARATOR)
    }
}

/// What precedes the `/` of a step expression
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepAnchor {
    /// `*/n`, starts from the first legal value of the domain
    Wildcard,
    /// `k/n`
    Value(u32),
}

/// A field expression, tagged by its syntactic shape
///
/// Single values and list items borrow the raw token since they are echoed back unchanged.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FieldExpression<'a> {
    List(Vec<&'a str>),
    Step(StepAnchor, NonZeroU32),
    Range(u32, u32),
    Wildcard,
    Single(&'a str),
}

impl StepAnchor {
    /// Offset subtracted from a value before testing divisibility
    pub fn shift(&self, domain: &FieldDomain) -> u32 {
        match self {
            StepAnchor::Wildcard if domain.starts_at_zero() => 0,
            StepAnchor::Wildcard => 1,
            StepAnchor::Value(v) => *v,
        }
    }
}

impl FieldExpression<'_> {
    /// Expand the expression against a domain into the space-joined values it denotes
    ///
    /// ```rust
    /// use std::num::NonZeroU32;
    /// use cron_expander_types::{CronField, FieldExpression, StepAnchor};
    ///
    /// let hours = CronField::Hour.domain();
    /// assert_eq!("12 13 14", FieldExpression::Range(12, 14).expand(&hours));
    ///
    /// let days = CronField::DayOfMonth.domain();
    /// let every_15 = FieldExpression::Step(StepAnchor::Wildcard, NonZeroU32::new(15).unwrap());
    /// assert_eq!("1 16 31", every_15.expand(&days));
    /// ```
    pub fn expand(&self, domain: &FieldDomain) -> String {
        match self {
            FieldExpression::List(items) => items.join(VALUE_SEPARATOR),
            FieldExpression::Step(anchor, increment) => {
                let shift = anchor.shift(domain);
                domain.join_matching(|v| v >= shift && (v - shift) % increment.get() == 0)
            }
            FieldExpression::Range(low, high) => domain.join_matching(|v| v >= *low && v <= *high),
            FieldExpression::Wildcard => domain.join_matching(|_| true),
            FieldExpression::Single(value) => value.to_string(),
        }
    }
}

/// Expanded values of the five fields of one cron expression
#[derive(Debug, PartialEq, Eq, Clone, Getters)]
#[getset(get = "pub")]
pub struct ParsedCron {
    minute: String,
    hour: String,
    day_of_month: String,
    month: String,
    day_of_week: String,
}

impl ParsedCron {
    /// Build a parsed cron from the expanded values, given in [`CronField::ALL`] order
    pub fn new(values: [String; 5]) -> Self {
        let [minute, hour, day_of_month, month, day_of_week] = values;
        Self {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
        }
    }

    /// Build a parsed cron by expanding each field in [`CronField::ALL`] order, stopping at the first error
    pub fn try_from_fn<E>(mut expand: impl FnMut(CronField) -> Result<String, E>) -> Result<Self, E> {
        Ok(Self {
            minute: expand(CronField::Minute)?,
            hour: expand(CronField::Hour)?,
            day_of_month: expand(CronField::DayOfMonth)?,
            month: expand(CronField::Month)?,
            day_of_week: expand(CronField::DayOfWeek)?,
        })
    }

    /// Expanded value of a field
    pub fn value(&self, field: CronField) -> &str {
        match field {
            CronField::Minute => &self.minute,
            CronField::Hour => &self.hour,
            CronField::DayOfMonth => &self.day_of_month,
            CronField::Month => &self.month,
            CronField::DayOfWeek => &self.day_of_week,
        }
    }

    /// Look a field up by its report name (`"day of month"`, ...)
    pub fn get(&self, name: &str) -> Option<&str> {
        CronField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .map(|field| self.value(field))
    }

    /// `(name, value)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        CronField::ALL
            .into_iter()
            .map(move |field| (field.name(), self.value(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    fn step(anchor: StepAnchor, increment: u32) -> Result<FieldExpression<'static>> {
        let increment = NonZeroU32::new(increment).context("zero increment")?;
        Ok(FieldExpression::Step(anchor, increment))
    }

    #[test]
    pub fn split_trimmed_drops_trailing_empty_pieces() {
        assert_eq!(vec!["15", "12"], split_trimmed("15 12  ", ' '));
        assert_eq!(vec!["", "1"], split_trimmed(" 1", ' '));
        assert!(split_trimmed("", ' ').is_empty());
    }

    #[test]
    pub fn field_domains_match_boundaries() {
        for field in CronField::ALL {
            let (low, high) = field.boundaries();
            let domain = field.domain();
            assert_eq!(low, domain.lower_bound());
            assert_eq!(high, domain.upper_bound());
            assert_eq!((high - low + 1) as usize, domain.values().len());
            assert!(domain.values().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    pub fn field_domain_starts_at_zero() {
        assert!(CronField::Minute.domain().starts_at_zero());
        assert!(CronField::Hour.domain().starts_at_zero());
        assert!(!CronField::DayOfMonth.domain().starts_at_zero());
        assert!(!CronField::Month.domain().starts_at_zero());
        assert!(!CronField::DayOfWeek.domain().starts_at_zero());
    }

    #[test]
    pub fn step_anchor_shift() {
        assert_eq!(0, StepAnchor::Wildcard.shift(&CronField::Minute.domain()));
        assert_eq!(1, StepAnchor::Wildcard.shift(&CronField::Month.domain()));
        assert_eq!(10, StepAnchor::Value(10).shift(&CronField::Minute.domain()));
    }

    #[test]
    pub fn expand_wildcard() {
        assert_eq!("1 2 3 4 5 6 7", FieldExpression::Wildcard.expand(&CronField::DayOfWeek.domain()));
    }

    #[test]
    pub fn expand_range_out_of_domain() {
        let months = CronField::Month.domain();
        assert_eq!("11 12", FieldExpression::Range(11, 40).expand(&months));
        assert_eq!("", FieldExpression::Range(13, 40).expand(&months));
        assert_eq!("", FieldExpression::Range(5, 2).expand(&months));
    }

    #[test]
    pub fn expand_step() -> Result<()> {
        let minutes = CronField::Minute.domain();
        assert_eq!("0 30", step(StepAnchor::Wildcard, 30)?.expand(&minutes));
        assert_eq!("10 40", step(StepAnchor::Value(10), 30)?.expand(&minutes));
        assert_eq!("", step(StepAnchor::Value(75), 5)?.expand(&minutes));

        let dows = CronField::DayOfWeek.domain();
        assert_eq!("1 4 7", step(StepAnchor::Wildcard, 3)?.expand(&dows));
        Ok(())
    }

    #[test]
    pub fn expand_list_and_single_are_verbatim() {
        let hours = CronField::Hour.domain();
        assert_eq!("1-2 3", FieldExpression::List(vec!["1-2", "3"]).expand(&hours));
        assert_eq!("99", FieldExpression::Single("99").expand(&hours));
    }

    #[test]
    pub fn parsed_cron_try_from_fn_stops_at_first_error() {
        let mut visited = Vec::new();
        let result = ParsedCron::try_from_fn(|field| {
            visited.push(field);
            match field {
                CronField::DayOfMonth => Err("boom"),
                _ => Ok(String::new()),
            }
        });

        assert_eq!(Err("boom"), result);
        assert_eq!(
            vec![CronField::Minute, CronField::Hour, CronField::DayOfMonth],
            visited
        );
    }

    #[test]
    pub fn parsed_cron_lookup() {
        let parsed = ParsedCron::new([
            "15".to_string(),
            "12".to_string(),
            "10".to_string(),
            "6".to_string(),
            "5".to_string(),
        ]);

        assert_eq!(Some("10"), parsed.get("day of month"));
        assert_eq!(None, parsed.get("year"));
        assert_eq!("5", parsed.day_of_week());
        assert_eq!(
            vec![
                ("minute", "15"),
                ("hour", "12"),
                ("day of month", "10"),
                ("month", "6"),
                ("day of week", "5"),
            ],
            parsed.iter().collect::<Vec<_>>()
        );
    }
}
