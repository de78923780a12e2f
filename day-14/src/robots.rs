use std::{collections::HashMap, fmt};

use glam::IVec2;
use miette::{Diagnostic, SourceSpan};
use nom::{
    bytes::complete::tag,
    character::complete::{i32, line_ending, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, separated_pair},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse robot list")]
#[diagnostic(code(day14::parse_error), help("each line must look like `p=x,y v=dx,dy`"))]
pub(crate) struct RobotParseError {
    #[source_code]
    src: String,
    #[label("parsing stopped here")]
    span: SourceSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Robot {
    pub position: IVec2,
    pub velocity: IVec2,
}

/// The wrapping floor the robots patrol, `size.x` wide and `size.y` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Space {
    size: IVec2,
}

impl Space {
    pub fn new(width: i32, height: i32) -> miette::Result<Self> {
        if width <= 0 || height <= 0 {
            miette::bail!("space must have a positive size, got {width}x{height}");
        }
        Ok(Space {
            size: IVec2::new(width, height),
        })
    }

    pub fn area(&self) -> usize {
        (self.size.x * self.size.y) as usize
    }

    pub fn position_after(&self, robot: &Robot, seconds: i32) -> IVec2 {
        (robot.position + robot.velocity * seconds).rem_euclid(self.size)
    }

    pub fn floor_after(&self, robots: &[Robot], seconds: i32) -> Floor {
        let mut counts = HashMap::new();
        for robot in robots {
            *counts.entry(self.position_after(robot, seconds)).or_insert(0) += 1;
        }
        Floor {
            space: *self,
            counts,
        }
    }
}

/// Robot counts per occupied tile at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Floor {
    space: Space,
    counts: HashMap<IVec2, usize>,
}

impl Floor {
    /// Product of the robot counts in the four quadrants. Robots on the
    /// middle row or column belong to no quadrant.
    pub fn safety_factor(&self) -> usize {
        let middle = self.space.size / 2;
        let mut quadrants = [0; 4];

        for (position, count) in &self.counts {
            if position.x == middle.x || position.y == middle.y {
                continue;
            }
            let index = usize::from(position.x > middle.x) + 2 * usize::from(position.y > middle.y);
            quadrants[index] += count;
        }

        tracing::debug!(?quadrants);
        quadrants.iter().product()
    }

    /// No tile holds more than one robot.
    pub fn is_spread_out(&self) -> bool {
        self.counts.values().all(|count| *count == 1)
    }

    /// `#` for occupied tiles, `.` for empty ones.
    pub fn picture(&self) -> String {
        self.render(|count| if count == 0 { '.' } else { '#' })
    }

    fn render(&self, tile: impl Fn(usize) -> char) -> String {
        let IVec2 { x: width, y: height } = self.space.size;
        let mut out = String::with_capacity(((width + 1) * height) as usize);
        for y in 0..height {
            if y > 0 {
                out.push('\n');
            }
            out.extend((0..width).map(|x| {
                tile(self.counts.get(&IVec2::new(x, y)).copied().unwrap_or(0))
            }));
        }
        out
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.render(|count| match count {
            0 => '.',
            count => char::from_digit(count.min(9) as u32, 10).unwrap_or('+'),
        });
        f.write_str(&map)
    }
}

pub(crate) fn parse_robots(input: &str) -> Result<Vec<Robot>, RobotParseError> {
    all_consuming(robots)(input)
        .map(|(_, robots)| robots)
        .map_err(|err| {
            let offset = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
                nom::Err::Incomplete(_) => input.len(),
            };
            RobotParseError {
                src: input.to_string(),
                span: (offset, 0).into(),
            }
        })
}

// region: nom parser
fn vector(input: &str) -> IResult<&str, IVec2> {
    map(separated_pair(i32, tag(","), i32), |(x, y)| IVec2::new(x, y))(input)
}

fn robot(input: &str) -> IResult<&str, Robot> {
    map(
        separated_pair(
            preceded(tag("p="), vector),
            space1,
            preceded(tag("v="), vector),
        ),
        |(position, velocity)| Robot { position, velocity },
    )(input)
}

fn robots(input: &str) -> IResult<&str, Vec<Robot>> {
    separated_list1(line_ending, robot)(input)
}
// endregion

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3";
