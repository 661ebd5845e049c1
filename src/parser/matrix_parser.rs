//! Parser for adjacency matrices given as
//! one row per line with whitespace separated
//! 0/1 entries.

use std::io::BufRead;

use crate::{
    graph::{AdjacencyMatrix, GraphError},
    parse_single_line, Error,
};

use super::{parse_integer, Input, ParseResult};

fn parse_matrix_row(input: Input<'_>) -> ParseResult<'_, Vec<i64>> {
    use nom::{
        character::complete::{space0, space1},
        error::context,
        multi::separated_list1,
        sequence::delimited,
    };

    context(
        "Row of the adjacency matrix",
        delimited(space0, separated_list1(space1, parse_integer), space0),
    )(input)
}

/// Blank lines are skipped, every other line is a row of the matrix.
pub fn parse_matrix_input<B: BufRead>(input: B) -> Result<AdjacencyMatrix, Error> {
    use nom::combinator::eof;

    let mut rows = Vec::new();

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        parse_single_line!(row, parse_matrix_row(line));
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(GraphError::Empty.into());
    }

    AdjacencyMatrix::from_rows(rows).map_err(Error::from)
}

#[cfg(test)]
mod test {
    use std::io::BufReader;

    use crate::Error;

    use super::*;

    #[test]
    fn test_parse_matrix_row() -> Result<(), Error> {
        let (_, parsed) = parse_matrix_row("  0 1\t1   0 ")?;
        assert_eq!(vec![0, 1, 1, 0], parsed);

        assert!(parse_matrix_row("x 1").is_err());

        Ok(())
    }

    #[test]
    fn test_parse_matrix_input() -> Result<(), Error> {
        let txt = "0 1 1 0
1 0 1 0

1 1 0 0\r
0 0 0 0
";
        let parsed = parse_matrix_input(BufReader::new(txt.as_bytes()))?;

        let mut graph = AdjacencyMatrix::new_empty(4);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 2);

        assert_eq!(graph, parsed);

        Ok(())
    }

    #[test]
    fn test_parse_matrix_input_garbage() {
        let txt = "0 1\n1 zero\n";
        let parsed = parse_matrix_input(BufReader::new(txt.as_bytes()));
        assert!(matches!(parsed, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_parse_matrix_input_not_square() {
        let txt = "0 1 1\n1 0 1\n";
        let parsed = parse_matrix_input(BufReader::new(txt.as_bytes()));
        assert!(matches!(
            parsed,
            Err(Error::GraphError(GraphError::NotSquare { .. }))
        ));
    }

    #[test]
    fn test_parse_matrix_input_empty() {
        let parsed = parse_matrix_input(BufReader::new("\n  \n".as_bytes()));
        assert!(matches!(parsed, Err(Error::GraphError(GraphError::Empty))));
    }
}
