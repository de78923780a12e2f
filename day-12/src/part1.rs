use miette::Result;
use tracing::info;

use crate::garden::{Grid, Pricing};

/// Total fencing price when every fence segment is paid for:
/// the sum over all regions of `area * perimeter`.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    info!(width = grid.width(), height = grid.height(), "parsed garden map");

    let price = grid.classify().total_price(Pricing::Perimeter);
    Ok(price.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";
        assert_eq!("1930", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("AAAA\nBBCD\nBBCC\nEEEC", "140")]
    #[case("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", "772")]
    #[case("A", "4")]
    fn test_process_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test_log::test]
    fn test_process_rejects_ragged_map() {
        assert!(process("AAAA\nBBC\nBBCC").is_err());
    }
}
