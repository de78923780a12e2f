use crate::robots::{parse_robots, Space};

pub const WIDTH: i32 = 101;
pub const HEIGHT: i32 = 103;
pub const SECONDS: i32 = 100;

#[tracing::instrument(skip(input))]
pub fn process(input: &str, width: i32, height: i32, seconds: i32) -> miette::Result<String> {
    let robots = parse_robots(input)?;
    let floor = Space::new(width, height)?.floor_after(&robots, seconds);
    tracing::debug!("floor after {seconds} seconds:\n{floor}");

    Ok(floor.safety_factor().to_string())
}
