use crate::word_search::WordSearch;

/// Counts `A`s sitting in the middle of two crossing `MAS`es, each of which
/// may be written either way round.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let search = WordSearch::parse(input)?;

    let count = search
        .positions()
        .filter(|position| is_x_mas(&search, *position))
        .count();

    Ok(count.to_string())
}

fn is_x_mas(search: &WordSearch, (x, y): (isize, isize)) -> bool {
    if search.get(x, y) != Some(b'A') {
        return false;
    }

    let diagonal = |(dx, dy): (isize, isize)| {
        matches!(
            (search.get(x - dx, y - dy), search.get(x + dx, y + dy)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };

    diagonal((1, 1)) && diagonal((1, -1))
}
