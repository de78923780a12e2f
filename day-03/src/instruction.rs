use miette::miette;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, digit1},
    combinator::{all_consuming, map, map_res, value, verify},
    multi::many0,
    sequence::{delimited, preceded, separated_pair},
    IResult, Parser,
};

const MAX_NUMBER_LENGTH: usize = 3;

/// An uncorrupted instruction found in the program memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

/// Scans corrupted memory for instructions, skipping everything else.
pub(crate) fn parse_instructions(input: &str) -> miette::Result<Vec<Instruction>> {
    let (_, found) = all_consuming(many0(alt((
        instruction.map(Some),
        value(None, anychar),
    ))))(input)
    .map_err(|e| miette!("Failed to scan memory: {}", e))?;

    Ok(found.into_iter().flatten().collect())
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    alt((
        mul,
        value(Instruction::Do, tag("do()")),
        value(Instruction::Dont, tag("don't()")),
    ))(input)
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(
        verify(digit1, |digits: &str| digits.len() <= MAX_NUMBER_LENGTH),
        str::parse,
    )(input)
}

fn mul(input: &str) -> IResult<&str, Instruction> {
    map(
        preceded(
            tag("mul"),
            delimited(char('('), separated_pair(number, char(','), number), char(')')),
        ),
        |(x, y)| Instruction::Mul(x, y),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mul(2,4)", Instruction::Mul(2, 4))]
    #[case("mul(123,456)", Instruction::Mul(123, 456))]
    #[case("do()", Instruction::Do)]
    #[case("don't()", Instruction::Dont)]
    fn test_instruction(#[case] input: &str, #[case] expected: Instruction) {
        assert_eq!(Ok(("", expected)), instruction(input));
    }

    #[rstest]
    #[case("mul(1234,456)")]
    #[case("mul(123,4567)")]
    #[case("mul( 123,456)")]
    #[case("mul(123, 456)")]
    #[case("mul[3,7]")]
    #[case("mul(4*")]
    fn test_instruction_rejects(#[case] input: &str) {
        assert!(instruction(input).is_err());
    }

    #[test]
    fn test_parse_instructions() -> miette::Result<()> {
        let found = parse_instructions(
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
        )?;
        assert_eq!(
            vec![
                Instruction::Mul(2, 4),
                Instruction::Dont,
                Instruction::Mul(5, 5),
                Instruction::Mul(11, 8),
                Instruction::Do,
                Instruction::Mul(8, 5),
            ],
            found
        );
        Ok(())
    }
}
