use crate::claw::{parse_machines, total_tokens};

pub const MAX_PRESSES: i64 = 100;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let machines = parse_machines(input)?;
    Ok(total_tokens(&machines, Some(MAX_PRESSES)).to_string())
}
