use crate::stones::{parse_stones, Stone};

pub const BLINKS: usize = 25;

/// Number of stones after `blinks` blinks, simulating the whole line.
#[tracing::instrument(skip(input))]
pub fn process(input: &str, blinks: usize) -> miette::Result<String> {
    let mut line = parse_stones(input)?;

    for blink in 1..=blinks {
        line = line
            .into_iter()
            .map(Stone::blink)
            .collect::<miette::Result<Vec<_>>>()?
            .into_iter()
            .flat_map(|next| next.stones())
            .collect();
        tracing::trace!(blink, stones = line.len());
    }

    Ok(line.len().to_string())
}
