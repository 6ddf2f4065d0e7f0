use nom::{
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// `digits ([.,] digits)? %?`
///
/// Only one separator is accepted, so `3.14.15` or `1,000,000` are not
/// numeric literals.
fn numeric_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        digit1,
        opt(pair(one_of(".,"), digit1)),
        opt(char('%')),
    )))(input)
}

/// True when the whole token is a numeric literal (ASCII digits only).
pub fn is_numeric(token: &str) -> bool {
    all_consuming(numeric_literal)(token).is_ok()
}
