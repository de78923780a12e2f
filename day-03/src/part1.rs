use crate::instruction::{parse_instructions, Instruction};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let total: u32 = parse_instructions(input)?
        .into_iter()
        .map(|instruction| match instruction {
            Instruction::Mul(x, y) => x * y,
            Instruction::Do | Instruction::Dont => 0,
        })
        .sum();

    Ok(total.to_string())
}
