use std::num::NonZeroU32;

use nom::{
    branch::alt,
    character::complete::{self, char, digit1},
    combinator::{all_consuming, map, value},
    sequence::separated_pair,
    IResult,
};

use cron_expander_types::{split_trimmed, FieldExpression, StepAnchor};

use crate::InvalidExpression;

/// A shape matcher returns `None` when the token does not have its shape, so the next one is tried.
/// Once a matcher claims a token, its result is final.
type ShapeMatcher = for<'a> fn(&'a str) -> Option<Result<FieldExpression<'a>, InvalidExpression>>;

/// Shape matchers, in precedence order
const SHAPE_MATCHERS: [ShapeMatcher; 5] = [
    list_expression,
    step_expression,
    range_expression,
    wildcard_expression,
    single_expression,
];

fn malformed<'a>(
    shape: &'static str,
    token: &'a str,
) -> impl FnOnce(nom::Err<nom::error::Error<&'a str>>) -> InvalidExpression + 'a {
    move |e| {
        let cause = InvalidExpression::from(e);
        InvalidExpression::new(format!("malformed {shape} expression, {}", cause.msg), token)
    }
}

fn step_anchor(input: &str) -> IResult<&str, StepAnchor> {
    alt((
        value(StepAnchor::Wildcard, char('*')),
        map(complete::u32, StepAnchor::Value),
    ))(input)
}

fn nom_step(input: &str) -> IResult<&str, (StepAnchor, u32)> {
    all_consuming(separated_pair(step_anchor, char('/'), complete::u32))(input)
}

fn nom_range(input: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(separated_pair(complete::u32, char('-'), complete::u32))(input)
}

fn nom_wildcard(input: &str) -> IResult<&str, char> {
    all_consuming(char('*'))(input)
}

fn nom_single(input: &str) -> IResult<&str, &str> {
    all_consuming(digit1)(input)
}

/// `a,b,c`: items are echoed back as written, without being expanded. Trailing empty items are dropped
fn list_expression(token: &str) -> Option<Result<FieldExpression<'_>, InvalidExpression>> {
    token
        .contains(',')
        .then(|| Ok(FieldExpression::List(split_trimmed(token, ','))))
}

/// `*/n` or `k/n`
fn step_expression(token: &str) -> Option<Result<FieldExpression<'_>, InvalidExpression>> {
    if !token.contains('/') {
        return None;
    }

    let result = nom_step(token)
        .map_err(malformed("step", token))
        .and_then(|(_, (anchor, increment))| {
            let increment = NonZeroU32::new(increment).ok_or_else(|| {
                InvalidExpression::new("step increment must be a positive integer", token)
            })?;
            Ok(FieldExpression::Step(anchor, increment))
        });
    Some(result)
}

/// `a-b`
fn range_expression(token: &str) -> Option<Result<FieldExpression<'_>, InvalidExpression>> {
    if !token.contains('-') {
        return None;
    }

    let result = nom_range(token)
        .map_err(malformed("range", token))
        .map(|(_, (low, high))| FieldExpression::Range(low, high));
    Some(result)
}

fn wildcard_expression(token: &str) -> Option<Result<FieldExpression<'_>, InvalidExpression>> {
    nom_wildcard(token).ok().map(|_| Ok(FieldExpression::Wildcard))
}

fn single_expression(token: &str) -> Option<Result<FieldExpression<'_>, InvalidExpression>> {
    nom_single(token)
        .ok()
        .map(|(_, digits)| Ok(FieldExpression::Single(digits)))
}

/// Tag a raw field token with its shape, the first matching shape wins
pub(crate) fn field_expression(token: &str) -> Result<FieldExpression<'_>, InvalidExpression> {
    SHAPE_MATCHERS
        .iter()
        .find_map(|matcher| matcher(token))
        .unwrap_or_else(|| Err(InvalidExpression::new("unsupported expression", token)))
}
