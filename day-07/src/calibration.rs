use miette::{Diagnostic, SourceSpan};
use nom::{
    bytes::complete::tag,
    character::complete::{space1, u64},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[error("Failed to parse line: {line}")]
#[diagnostic(code(day07::parse_line), help("expected `<test value>: <operand> <operand> ...`"))]
pub(crate) struct ParseLineError {
    line: String,
    #[source_code]
    src: String,
    #[label("here")]
    span: SourceSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    /// `None` when the result does not fit in a `u64`.
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Concatenate => {
                let shift = 10u64.checked_pow(rhs.checked_ilog10().unwrap_or(0) + 1)?;
                lhs.checked_mul(shift)?.checked_add(rhs)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Equation {
    pub test_value: u64,
    pub operands: Vec<u64>,
}

impl Equation {
    /// Can the operands, combined strictly left to right with `operators`,
    /// produce the test value?
    pub fn is_solvable(&self, operators: &[Operator]) -> bool {
        match self.operands.split_first() {
            Some((first, rest)) => self.search(*first, rest, operators),
            None => false,
        }
    }

    fn search(&self, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
        let Some((next, rest)) = rest.split_first() else {
            return acc == self.test_value;
        };

        operators.iter().any(|operator| {
            operator
                .apply(acc, *next)
                .is_some_and(|value| self.search(value, rest, operators))
        })
    }
}

pub(crate) fn parse_equations(input: &str) -> Result<Vec<Equation>, ParseLineError> {
    input
        .lines()
        .map(|line| {
            let start = line.as_ptr() as usize - input.as_ptr() as usize;
            all_consuming(equation)(line)
                .map(|(_, equation)| equation)
                .map_err(|_| ParseLineError {
                    line: line.to_string(),
                    src: input.to_string(),
                    span: (start, line.len()).into(),
                })
        })
        .collect()
}

// region: parser
fn equation(input: &str) -> IResult<&str, Equation> {
    let (input, (test_value, operands)) =
        separated_pair(u64, tag(": "), separated_list1(space1, u64))(input)?;

    Ok((
        input,
        Equation {
            test_value,
            operands,
        },
    ))
}
// endregion

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operator::Add, 12, 345, Some(357))]
    #[case(Operator::Multiply, 12, 345, Some(4140))]
    #[case(Operator::Concatenate, 12, 345, Some(12345))]
    #[case(Operator::Concatenate, 15, 6, Some(156))]
    #[case(Operator::Concatenate, 7, 0, Some(70))]
    #[case(Operator::Multiply, u64::MAX, 2, None)]
    fn test_apply(
        #[case] operator: Operator,
        #[case] lhs: u64,
        #[case] rhs: u64,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(expected, operator.apply(lhs, rhs));
    }

    #[test]
    fn test_parse_equations() -> miette::Result<()> {
        let equations = parse_equations("190: 10 19\n83: 17 5")?;
        assert_eq!(
            vec![
                Equation {
                    test_value: 190,
                    operands: vec![10, 19]
                },
                Equation {
                    test_value: 83,
                    operands: vec![17, 5]
                },
            ],
            equations
        );
        Ok(())
    }

    #[test]
    fn test_parse_bad_line() {
        let err = parse_equations("190: 10 19\n83 17 5").unwrap_err();
        assert_eq!(11, err.span.offset());
        assert_eq!("83 17 5", err.line);
    }

    #[test]
    fn test_parse_bad_line_crlf() {
        let err = parse_equations("190: 10 19\r\n3267: 81 40 27\r\n83 17 5").unwrap_err();
        assert_eq!(28, err.span.offset());
        assert_eq!(7, err.span.len());
    }

    #[test]
    fn test_single_operand() {
        let equation = Equation {
            test_value: 5,
            operands: vec![5],
        };
        assert!(equation.is_solvable(&[Operator::Add]));
    }
}
