use itertools::Itertools;
use tracing::debug;

use crate::lists::parse_lists;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_lists(input)?;
    debug!(len = lists.left.len(), "parsed location lists");

    // pair the smallest with the smallest, and so on up both lists
    let distance: u32 = lists
        .left
        .iter()
        .sorted()
        .zip(lists.right.iter().sorted())
        .map(|(a, b)| a.abs_diff(*b))
        .sum();

    Ok(distance.to_string())
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
        assert_eq!("11", process(input)?);
        Ok(())
    }
}
