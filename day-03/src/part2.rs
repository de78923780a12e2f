use crate::instruction::{parse_instructions, Instruction};

/// Sums products of `mul` instructions that are enabled: `do()` turns them
/// on, `don't()` turns them off, and they start enabled.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let (_, total) = parse_instructions(input)?.into_iter().fold(
        (true, 0u32),
        |(enabled, total), instruction| match instruction {
            Instruction::Do => (true, total),
            Instruction::Dont => (false, total),
            Instruction::Mul(x, y) if enabled => (enabled, total + x * y),
            Instruction::Mul(..) => (enabled, total),
        },
    );

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mul(2,4)", "8")]
    #[case("xmul(2,4)mul(3,3)", "17")]
    #[case("do()mul(2,4)", "8")]
    #[case("don't()mul(2,4)", "0")]
    #[case("don't()mul(2,4)do()mul(3,3)", "9")]
    #[case(
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
        "48"
    )]
    fn test_process_cases(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
