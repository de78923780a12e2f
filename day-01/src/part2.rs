use itertools::Itertools;

use crate::lists::parse_lists;

/// Similarity score: every left id weighted by how often it occurs on the right.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_lists(input)?;
    let occurrences = lists.right.iter().counts();

    let score: usize = lists
        .left
        .iter()
        .map(|id| *id as usize * occurrences.get(id).copied().unwrap_or_default())
        .sum();

    Ok(score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        assert_eq!("31", process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_no_matches() -> miette::Result<()> {
        assert_eq!("0", process("1   2\n3   4")?);
        Ok(())
    }
}
