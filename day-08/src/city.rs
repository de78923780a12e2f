use std::collections::{HashMap, HashSet};

use glam::IVec2;
use itertools::Itertools;
use miette::{Diagnostic, SourceSpan};
use nom::{
    character::complete::{line_ending, satisfy},
    combinator::all_consuming,
    multi::{many1, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub(crate) enum CityParseError {
    #[error("Failed to parse antenna map")]
    #[diagnostic(
        code(day08::unexpected_character),
        help("the map may only contain dots (.), digits and letters")
    )]
    UnexpectedCharacter {
        #[source_code]
        src: String,
        #[label("unexpected here")]
        span: SourceSpan,
    },
    #[error("Row {row} has {found} cells, expected {expected}")]
    #[diagnostic(code(day08::ragged_row))]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Antenna positions grouped by frequency, inside a `bounds.x` by `bounds.y` map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct City {
    bounds: IVec2,
    antennas: HashMap<char, Vec<IVec2>>,
}

impl City {
    pub fn parse(input: &str) -> Result<Self, CityParseError> {
        let (_, rows) = all_consuming(map_rows)(Span::new(input)).map_err(|err| {
            let offset = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => e.input.location_offset(),
                nom::Err::Incomplete(_) => input.len(),
            };
            CityParseError::UnexpectedCharacter {
                src: input.to_string(),
                span: (offset, 1).into(),
            }
        })?;

        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != width) {
            return Err(CityParseError::RaggedRow {
                row: row + 1,
                expected: width,
                found: cells.len(),
            });
        }

        let antennas = rows
            .iter()
            .flatten()
            .filter(|cell| cell.frequency != EMPTY)
            .map(|cell| (cell.frequency, cell.position))
            .into_group_map();

        let bounds = IVec2::new(width as i32, rows.len() as i32);
        tracing::debug!(?bounds, frequencies = antennas.len());

        Ok(City { bounds, antennas })
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.cmpge(IVec2::ZERO).all() && point.cmplt(self.bounds).all()
    }

    /// Every unordered pair of antennas sharing a frequency.
    pub fn pairs(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        self.antennas
            .values()
            .flat_map(|positions| positions.iter().copied().tuple_combinations())
    }

    /// Antinodes at twice the distance from one antenna of a pair as from the other.
    pub fn antinodes(&self) -> HashSet<IVec2> {
        self.pairs()
            .flat_map(|(a, b)| {
                let offset = b - a;
                [a - offset, b + offset]
            })
            .filter(|point| self.contains(*point))
            .collect()
    }

    /// Antinodes at every whole multiple of a pair's offset along its line.
    pub fn resonant_antinodes(&self) -> HashSet<IVec2> {
        self.pairs()
            .flat_map(|(a, b)| {
                let offset = b - a;
                let forward = self.ray(a, offset);
                let backward = self.ray(a - offset, -offset);
                forward.chain(backward)
            })
            .collect()
    }

    fn ray(&self, start: IVec2, step: IVec2) -> impl Iterator<Item = IVec2> + '_ {
        std::iter::successors(Some(start), move |point| Some(*point + step))
            .take_while(|point| self.contains(*point))
    }
}

// region: nom parser
const EMPTY: char = '.';

type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy)]
struct Cell {
    frequency: char,
    position: IVec2,
}

fn cell(input: Span) -> IResult<Span, Cell> {
    let position = IVec2::new(
        input.get_column() as i32 - 1,
        input.location_line() as i32 - 1,
    );
    satisfy(|c: char| c.is_ascii_alphanumeric() || c == EMPTY)
        .map(|frequency| Cell {
            frequency,
            position,
        })
        .parse(input)
}

fn map_rows(input: Span) -> IResult<Span, Vec<Vec<Cell>>> {
    separated_list1(line_ending, many1(cell))(input)
}
// endregion

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() -> miette::Result<()> {
        let city = City::parse("...\n.0.\n..A")?;
        assert_eq!(IVec2::new(3, 3), city.bounds);
        assert_eq!(Some(&vec![IVec2::new(1, 1)]), city.antennas.get(&'0'));
        assert_eq!(Some(&vec![IVec2::new(2, 2)]), city.antennas.get(&'A'));
        Ok(())
    }

    #[test]
    fn test_parse_sample() -> miette::Result<()> {
        let city = City::parse(SAMPLE_INPUT)?;
        assert_eq!(IVec2::new(12, 12), city.bounds);
        assert_eq!(4, city.antennas[&'0'].len());
        assert_eq!(3, city.antennas[&'A'].len());
        Ok(())
    }

    #[test]
    fn test_parse_unexpected_character() {
        let err = City::parse("...\n.#.").unwrap_err();
        assert!(matches!(
            err,
            CityParseError::UnexpectedCharacter { span, .. } if span.offset() == 5
        ));
    }

    #[test]
    fn test_parse_ragged() {
        let err = City::parse("...\n..").unwrap_err();
        assert!(matches!(
            err,
            CityParseError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_antinodes_pair() -> miette::Result<()> {
        let city = City::parse("..........\n..........\n..........\n....a.....\n..........\n.....a....\n..........\n..........\n..........\n..........")?;
        let expected = HashSet::from([IVec2::new(3, 1), IVec2::new(6, 7)]);
        assert_eq!(expected, city.antinodes());
        Ok(())
    }

    #[test]
    fn test_resonant_antinodes_include_antennas() -> miette::Result<()> {
        let city = City::parse("T.........\n...T......\n.T........\n..........\n..........\n..........\n..........\n..........\n..........\n..........")?;
        assert_eq!(9, city.resonant_antinodes().len());
        Ok(())
    }
}
