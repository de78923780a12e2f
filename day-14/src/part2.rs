use miette::miette;

use crate::robots::{parse_robots, Space};

pub use crate::part1::{HEIGHT, WIDTH};

/// First second at which no two robots share a tile. Positions repeat
/// after `width * height` seconds, so the search stops there.
#[tracing::instrument(skip(input))]
pub fn process(input: &str, width: i32, height: i32) -> miette::Result<String> {
    let robots = parse_robots(input)?;
    let space = Space::new(width, height)?;
    let period = i32::try_from(space.area()).map_err(|_| miette!("space is too large"))?;

    let (second, floor) = (0..period)
        .map(|second| (second, space.floor_after(&robots, second)))
        .find(|(_, floor)| floor.is_spread_out())
        .ok_or_else(|| miette!("robots never spread out within {period} seconds"))?;

    tracing::info!("picture after {second} seconds:\n{}", floor.picture());
    Ok(second.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::SAMPLE_INPUT;

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("1", process(SAMPLE_INPUT, 11, 7)?);
        Ok(())
    }

    #[test]
    fn test_never_spread_out() {
        assert!(process("p=1,1 v=1,0\np=1,1 v=1,0", 5, 5).is_err());
    }
}
