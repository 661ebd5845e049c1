//! Parser for whitespace separated integer lists
//! such as the vertices of a clique candidate.

use std::io::Read;

use crate::{parse_single_line, Error};

use super::{parse_integer, Input, ParseResult};

fn parse_integers(input: Input<'_>) -> ParseResult<'_, Vec<i64>> {
    use nom::{
        character::complete::{multispace0, multispace1},
        error::context,
        multi::separated_list0,
        sequence::delimited,
    };

    context(
        "Whitespace separated integers",
        delimited(
            multispace0,
            separated_list0(multispace1, parse_integer),
            multispace0,
        ),
    )(input)
}

/// Numbers may be spread over any number of lines.
pub fn parse_integer_list<R: Read>(mut input: R) -> Result<Vec<i64>, Error> {
    use nom::combinator::eof;

    let mut content = String::new();
    input.read_to_string(&mut content)?;

    parse_single_line!(integers, parse_integers(&content));
    Ok(integers)
}

#[cfg(test)]
mod test {
    use crate::Error;

    use super::*;

    #[test]
    fn test_parse_integers() -> Result<(), Error> {
        let (rest, parsed) = parse_integers("\n 3 -1\n  17\t4\n\n")?;
        assert!(rest.is_empty());
        assert_eq!(vec![3, -1, 17, 4], parsed);

        Ok(())
    }

    #[test]
    fn test_parse_integer_list() -> Result<(), Error> {
        assert_eq!(vec![0, 2, 5], parse_integer_list("0 2\n5\n".as_bytes())?);
        assert!(parse_integer_list("".as_bytes())?.is_empty());

        Ok(())
    }

    #[test]
    fn test_parse_integer_list_garbage() {
        let parsed = parse_integer_list("1 2 three".as_bytes());
        assert!(matches!(parsed, Err(Error::ParseError(_))));
    }
}
