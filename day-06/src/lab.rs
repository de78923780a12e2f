use std::collections::HashSet;

use miette::Diagnostic;
use thiserror::Error;

const OBSTACLE: char = '#';
const FLOOR: char = '.';
const START_POS: char = '^';

#[derive(Debug, Error, Diagnostic)]
pub(crate) enum LabParseError {
    #[error("no guard (`^`) found on the map")]
    #[diagnostic(code(day06::no_guard))]
    NoGuard,
    #[error("unexpected tile {found:?} at line {line}, column {column}")]
    #[diagnostic(code(day06::unexpected_tile), help("the map may only contain `.`, `#` and one `^`"))]
    UnexpectedTile {
        found: char,
        line: usize,
        column: usize,
    },
    #[error("line {line} is {found} tiles wide, expected {expected}")]
    #[diagnostic(code(day06::ragged_map))]
    Ragged {
        line: usize,
        found: usize,
        expected: usize,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub(crate) enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub(crate) struct Location {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct Guard {
    location: Location,
    direction: Direction,
}

/// How a patrol ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Patrol {
    /// The guard walked off the map, having visited these locations.
    Exits(HashSet<Location>),
    /// The guard came back to a location facing the same way as before.
    Loops,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lab {
    width: usize,
    height: usize,
    obstacles: HashSet<Location>,
    start: Location,
}

impl Lab {
    pub fn parse(input: &str) -> Result<Self, LabParseError> {
        let width = input.lines().next().map_or(0, str::len);
        let mut obstacles = HashSet::new();
        let mut start = None;
        let mut height = 0;

        for (y, line) in input.lines().enumerate() {
            if line.len() != width {
                return Err(LabParseError::Ragged {
                    line: y + 1,
                    found: line.len(),
                    expected: width,
                });
            }
            for (x, tile) in line.chars().enumerate() {
                match tile {
                    OBSTACLE => {
                        obstacles.insert(Location { x, y });
                    }
                    START_POS => start = Some(Location { x, y }),
                    FLOOR => {}
                    found => {
                        return Err(LabParseError::UnexpectedTile {
                            found,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                }
            }
            height += 1;
        }

        Ok(Self {
            width,
            height,
            obstacles,
            start: start.ok_or(LabParseError::NoGuard)?,
        })
    }

    pub fn start(&self) -> Location {
        self.start
    }

    /// The tile in front of the guard, or `None` when that is off the map.
    fn ahead(&self, guard: &Guard) -> Option<Location> {
        let Location { x, y } = guard.location;
        let next = match guard.direction {
            Direction::North => Location { x, y: y.checked_sub(1)? },
            Direction::South => Location { x, y: y + 1 },
            Direction::East => Location { x: x + 1, y },
            Direction::West => Location { x: x.checked_sub(1)?, y },
        };
        (next.x < self.width && next.y < self.height).then_some(next)
    }

    /// Follows the guard from the start, optionally with one extra obstacle.
    pub fn patrol(&self, extra_obstacle: Option<Location>) -> Patrol {
        let mut guard = Guard {
            location: self.start,
            direction: Direction::North,
        };
        let mut seen = HashSet::from([guard]);

        while let Some(next) = self.ahead(&guard) {
            if self.obstacles.contains(&next) || extra_obstacle == Some(next) {
                guard.direction = guard.direction.turn_right();
            } else {
                guard.location = next;
            }

            if !seen.insert(guard) {
                return Patrol::Loops;
            }
        }

        Patrol::Exits(seen.into_iter().map(|guard| guard.location).collect())
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";
