use crate::claw::{parse_machines, total_tokens};

pub const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let machines = parse_machines(input)?
        .into_iter()
        .map(|machine| machine.with_prize_offset(PRIZE_OFFSET))
        .collect::<miette::Result<Vec<_>>>()?;

    Ok(total_tokens(&machines, None).to_string())
}
