use crate::word_search::{WordSearch, DIRECTIONS};

const WORD: &[u8] = b"XMAS";

/// Counts every occurrence of `XMAS`, in any of the eight directions.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let search = WordSearch::parse(input)?;

    let count = search
        .positions()
        .map(|start| {
            DIRECTIONS
                .iter()
                .filter(|direction| search.reads(WORD, start, **direction))
                .count()
        })
        .sum::<usize>();

    Ok(count.to_string())
}
