use itertools::Itertools;
use miette::miette;
use nom::{
    character::complete::{i32, line_ending, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    IResult,
};

#[derive(Debug, PartialEq, Clone, Copy)]
enum Slope {
    Increasing,
    Decreasing,
    Unsafe,
}

impl Slope {
    fn between(start: i32, end: i32) -> Self {
        match end.checked_sub(start) {
            Some(1..=3) => Slope::Increasing,
            Some(-3..=-1) => Slope::Decreasing,
            _ => Slope::Unsafe,
        }
    }
}

/// One line of levels from the reactor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report(pub Vec<i32>);

impl Report {
    /// Levels move in one direction only, by 1 to 3 per step.
    pub fn is_safe(&self) -> bool {
        levels_are_safe(self.0.iter().copied())
    }

    /// Safe as-is, or safe once any single level is dropped.
    pub fn is_safe_dampened(&self) -> bool {
        self.is_safe()
            || (0..self.0.len()).any(|skip| {
                levels_are_safe(
                    self.0
                        .iter()
                        .enumerate()
                        .filter(|(idx, _)| *idx != skip)
                        .map(|(_, level)| *level),
                )
            })
    }
}

fn levels_are_safe(levels: impl Iterator<Item = i32>) -> bool {
    let slopes = levels
        .tuple_windows()
        .map(|(a, b)| Slope::between(a, b))
        .collect::<Vec<_>>();

    match slopes.first() {
        None => true,
        Some(Slope::Unsafe) => false,
        Some(first) => slopes.iter().all(|slope| slope == first),
    }
}

pub(crate) fn parse_reports(input: &str) -> miette::Result<Vec<Report>> {
    let (_, reports) = all_consuming(reports)(input)
        .map_err(|e| miette!("Failed to parse reports: {}", e))?;
    Ok(reports)
}

fn reports(input: &str) -> IResult<&str, Vec<Report>> {
    separated_list1(
        line_ending,
        map(separated_list1(space1, i32), Report),
    )(input)
}
