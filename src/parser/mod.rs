mod list_parser;
mod matrix_parser;

pub use list_parser::parse_integer_list;
pub use matrix_parser::parse_matrix_input;

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

/// Decimal integer with an optional leading minus.
fn parse_integer(input: Input<'_>) -> ParseResult<'_, i64> {
    use nom::{
        character::complete::{char, digit1},
        combinator::{map_res, opt, recognize},
        sequence::pair,
    };

    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i64>)(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(Ok(("", 17)), parse_integer("17"));
        assert_eq!(Ok((" 4", -3)), parse_integer("-3 4"));
        assert_eq!(Ok(("x", 0)), parse_integer("0x"));

        assert!(parse_integer("-").is_err());
        assert!(parse_integer("+1").is_err());
        assert!(parse_integer("one").is_err());
        // Out of range for i64.
        assert!(parse_integer("99999999999999999999").is_err());
    }
}
