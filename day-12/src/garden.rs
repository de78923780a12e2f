//! Garden plot map analysis.
//!
//! The map is parsed once into a [`Grid`] of plot labels, every plot is then
//! classified with the fences it needs on each side ([`Grid::classify`]), and
//! finally [`PlotMap::regions`] walks each connected region of equally
//! labelled plots so it can be priced.

use std::fmt;

use itertools::Itertools;
use miette::{Diagnostic, SourceSpan};
use nom::{
    character::complete::{line_ending, satisfy},
    multi::{many0, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use thiserror::Error;
use tracing::{debug, trace};

/// `(x, y)` with the origin in the top left corner.
pub type Position = (usize, usize);

#[derive(Debug, Error, Diagnostic)]
pub enum MalformedInputError {
    #[error("garden map is empty")]
    #[diagnostic(code(day12::empty_map))]
    Empty,

    #[error("row {row} has {found} plots, expected {expected}")]
    #[diagnostic(
        code(day12::ragged_row),
        help("every row of the garden map must have the same length")
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
    },

    #[error("unexpected character {found:?} in garden map")]
    #[diagnostic(
        code(day12::unexpected_character),
        help("plots are labelled with ASCII letters or digits")
    )]
    UnexpectedCharacter {
        found: char,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
}

/// One of the four sides of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    fn bit(self) -> u8 {
        match self {
            Side::Top => 0b0001,
            Side::Bottom => 0b0010,
            Side::Left => 0b0100,
            Side::Right => 0b1000,
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Side::Top => (0, -1),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
        }
    }

    /// The neighbour that continues a straight fence on this side.
    ///
    /// A fence segment is only counted on the plot whose neighbour in this
    /// direction does not carry the same fence, so every straight run of
    /// fences is counted exactly once: top fences merge leftwards, bottom
    /// fences rightwards, left fences upwards and right fences downwards.
    fn run_predecessor(self) -> Side {
        match self {
            Side::Top => Side::Left,
            Side::Bottom => Side::Right,
            Side::Left => Side::Top,
            Side::Right => Side::Bottom,
        }
    }
}

/// The set of sides of a plot that need a fence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fences(u8);

impl Fences {
    pub fn contains(&self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Side> {
        let fences = *self;
        Side::ALL.into_iter().filter(move |side| fences.contains(*side))
    }
}

impl FromIterator<Side> for Fences {
    fn from_iter<T: IntoIterator<Item = Side>>(iter: T) -> Self {
        let mut fences = Fences::default();
        iter.into_iter().for_each(|side| fences.insert(side));
        fences
    }
}

fn step(position: Position, side: Side, width: usize, height: usize) -> Option<Position> {
    let (dx, dy) = side.offset();
    let x = position.0.checked_add_signed(dx)?;
    let y = position.1.checked_add_signed(dy)?;
    (x < width && y < height).then_some((x, y))
}

/// Rectangular map of plot labels, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    labels: Vec<Vec<char>>,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self, MalformedInputError> {
        let (rest, rows) =
            parse_rows(Span::new(input)).map_err(|_| unexpected_character(input, 0))?;

        if !rest.fragment().is_empty() {
            return Err(unexpected_character(input, rest.location_offset()));
        }

        if rows.iter().all(Vec::is_empty) {
            return Err(MalformedInputError::Empty);
        }

        let width = rows[0].len();
        if let Some((y, row)) = rows.iter().find_position(|row| row.len() != width) {
            let span = match (row.first(), row.last()) {
                (Some(first), Some(last)) => {
                    let start = first.position.location_offset();
                    (start, last.position.location_offset() + 1 - start)
                }
                _ => (row_offset(input, y), 0),
            };
            return Err(MalformedInputError::RaggedRow {
                row: y + 1,
                expected: width,
                found: row.len(),
                src: input.to_string(),
                span: span.into(),
            });
        }

        let labels = rows
            .into_iter()
            .map(|row| row.into_iter().map(|plot| plot.label).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        Ok(Self {
            width,
            height: labels.len(),
            labels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn label(&self, (x, y): Position) -> Option<char> {
        self.labels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Label of the neighbouring plot on `side`, or `None` off the map.
    pub fn neighbor(&self, position: Position, side: Side) -> Option<char> {
        step(position, side, self.width, self.height).and_then(|next| self.label(next))
    }

    /// Builds every plot with its fences in a single pass over the map.
    pub fn classify(&self) -> PlotMap {
        let plots = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let label = self.labels[y][x];
                        Plot {
                            position: (x, y),
                            label,
                            fences: classify_boundary(self, (x, y), label),
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        PlotMap {
            width: self.width,
            height: self.height,
            plots,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.labels {
            for label in row {
                write!(f, "{label}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A side needs a fence when the neighbour there is off the map or carries a
/// different label.
pub fn classify_boundary(grid: &Grid, position: Position, label: char) -> Fences {
    Side::ALL
        .into_iter()
        .filter(|side| grid.neighbor(position, *side) != Some(label))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plot {
    pub position: Position,
    pub label: char,
    pub fences: Fences,
}

/// How a region's fence is measured when pricing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    /// Every fence segment between two plots counts.
    Perimeter,
    /// Each straight run of fence counts once, however long it is.
    Sides,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub label: char,
    pub plots: Vec<Position>,
    pub perimeter: usize,
    pub sides: usize,
}

impl Region {
    pub fn area(&self) -> usize {
        self.plots.len()
    }

    pub fn fence(&self, pricing: Pricing) -> usize {
        match pricing {
            Pricing::Perimeter => self.perimeter,
            Pricing::Sides => self.sides,
        }
    }

    pub fn price(&self, pricing: Pricing) -> usize {
        self.area() * self.fence(pricing)
    }
}

/// Every plot of a [`Grid`] together with its fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotMap {
    width: usize,
    height: usize,
    plots: Vec<Vec<Plot>>,
}

impl PlotMap {
    pub fn plot(&self, (x, y): Position) -> Option<&Plot> {
        self.plots.get(y).and_then(|row| row.get(x))
    }

    fn neighbor(&self, position: Position, side: Side) -> Option<&Plot> {
        step(position, side, self.width, self.height).and_then(|next| self.plot(next))
    }

    /// Splits the map into regions, visiting plots in row-major order.
    ///
    /// Each plot ends up in exactly one region.
    pub fn regions(&self) -> Vec<Region> {
        let mut visited = vec![vec![false; self.width]; self.height];
        let mut regions = Vec::new();

        for (y, x) in (0..self.height).cartesian_product(0..self.width) {
            if visited[y][x] {
                continue;
            }
            let region = self.walk_region((x, y), &mut visited);
            trace!(
                label = %region.label,
                area = region.area(),
                perimeter = region.perimeter,
                sides = region.sides,
                "found region"
            );
            regions.push(region);
        }

        regions
    }

    /// Depth-first walk over the region containing `start`, marking every
    /// plot it reaches in `visited`.
    fn walk_region(&self, start: Position, visited: &mut [Vec<bool>]) -> Region {
        let label = self.plots[start.1][start.0].label;
        let mut plots = Vec::new();
        let mut perimeter = 0;
        let mut sides = 0;

        visited[start.1][start.0] = true;
        let mut stack = vec![start];

        while let Some(position) = stack.pop() {
            let plot = &self.plots[position.1][position.0];
            plots.push(position);
            perimeter += plot.fences.count();
            sides += self.starting_sides(plot);

            // an unfenced side always borders a plot of the same region
            for side in Side::ALL.into_iter().filter(|side| !plot.fences.contains(*side)) {
                if let Some(next) = self.neighbor(position, side) {
                    let (x, y) = next.position;
                    if !visited[y][x] {
                        visited[y][x] = true;
                        stack.push(next.position);
                    }
                }
            }
        }

        Region {
            label,
            plots,
            perimeter,
            sides,
        }
    }

    /// Number of straight fence runs that begin at this plot.
    fn starting_sides(&self, plot: &Plot) -> usize {
        plot.fences
            .iter()
            .filter(|side| {
                !self
                    .neighbor(plot.position, side.run_predecessor())
                    .is_some_and(|prev| prev.label == plot.label && prev.fences.contains(*side))
            })
            .count()
    }

    pub fn total_price(&self, pricing: Pricing) -> usize {
        let regions = self.regions();
        debug!(regions = regions.len(), ?pricing, "pricing regions");
        regions.iter().map(|region| region.price(pricing)).sum()
    }
}

// region: nom parser
type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy)]
struct LocatedPlot<'a> {
    label: char,
    position: Span<'a>,
}

fn parse_plot(input: Span) -> IResult<Span, LocatedPlot> {
    satisfy(|c: char| c.is_ascii_alphanumeric())
        .map(|label| LocatedPlot {
            label,
            position: input,
        })
        .parse(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<LocatedPlot>>> {
    separated_list1(line_ending, many0(parse_plot))(input)
}

fn row_offset(input: &str, row: usize) -> usize {
    input.split('\n').take(row).map(|line| line.len() + 1).sum()
}

fn unexpected_character(input: &str, offset: usize) -> MalformedInputError {
    let found = input[offset..].chars().next().unwrap_or('\0');
    MalformedInputError::UnexpectedCharacter {
        found,
        src: input.to_string(),
        span: (offset, found.len_utf8()).into(),
    }
}
// endregion

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    const LARGER_EXAMPLE: &str = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";

    #[test]
    fn test_parse_grid() -> miette::Result<()> {
        let grid = Grid::parse("AB\nCD")?;
        assert_eq!(2, grid.width());
        assert_eq!(2, grid.height());
        assert_eq!(Some('A'), grid.label((0, 0)));
        assert_eq!(Some('D'), grid.label((1, 1)));
        assert_eq!(None, grid.label((2, 0)));
        assert_eq!("AB\nCD\n", grid.to_string());
        Ok(())
    }

    #[test]
    fn test_parse_crlf() -> miette::Result<()> {
        let grid = Grid::parse("AB\r\nCD")?;
        assert_eq!(2, grid.height());
        assert_eq!(Some('C'), grid.label((0, 1)));
        Ok(())
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = Grid::parse("AAA\nAB\nAAA").unwrap_err();
        match err {
            MalformedInputError::RaggedRow {
                row,
                expected,
                found,
                span,
                ..
            } => {
                assert_eq!(2, row);
                assert_eq!(3, expected);
                assert_eq!(2, found);
                assert_eq!(4, span.offset());
                assert_eq!(2, span.len());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_blank_row() {
        let err = Grid::parse("AA\n\nAA").unwrap_err();
        assert!(matches!(
            err,
            MalformedInputError::RaggedRow {
                row: 2,
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Grid::parse(""), Err(MalformedInputError::Empty)));
    }

    #[test]
    fn test_parse_unexpected_character() {
        let err = Grid::parse("AB\nC#").unwrap_err();
        match err {
            MalformedInputError::UnexpectedCharacter { found, span, .. } => {
                assert_eq!('#', found);
                assert_eq!(4, span.offset());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_single_plot_is_fenced_all_round() -> miette::Result<()> {
        let grid = Grid::parse("A")?;
        let fences = classify_boundary(&grid, (0, 0), 'A');
        assert_eq!(4, fences.count());
        assert_eq!(Side::ALL.to_vec(), fences.iter().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_classify_boundary() -> miette::Result<()> {
        let grid = Grid::parse("AAAA\nBBCD\nBBCC\nEEEC")?;

        let top_left_b = classify_boundary(&grid, (0, 1), 'B');
        assert!(top_left_b.contains(Side::Top));
        assert!(top_left_b.contains(Side::Left));
        assert!(!top_left_b.contains(Side::Bottom));
        assert!(!top_left_b.contains(Side::Right));

        let d = classify_boundary(&grid, (3, 1), 'D');
        assert_eq!(4, d.count());
        Ok(())
    }

    #[test]
    fn test_classify_is_idempotent() -> miette::Result<()> {
        let grid = Grid::parse(LARGER_EXAMPLE)?;
        assert_eq!(grid.classify(), grid.classify());
        Ok(())
    }

    #[test]
    fn test_regions_partition_the_map() -> miette::Result<()> {
        let grid = Grid::parse(LARGER_EXAMPLE)?;
        let regions = grid.classify().regions();

        assert_eq!(11, regions.len());
        assert_eq!(
            grid.width() * grid.height(),
            regions.iter().map(Region::area).sum::<usize>()
        );

        let mut seen = HashSet::new();
        for position in regions.iter().flat_map(|region| region.plots.iter()) {
            assert!(seen.insert(*position), "{position:?} priced twice");
        }
        assert_eq!(grid.width() * grid.height(), seen.len());
        Ok(())
    }

    #[test]
    fn test_regions_are_connected_and_uniform() -> miette::Result<()> {
        let grid = Grid::parse("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO")?;
        let regions = grid.classify().regions();

        assert_eq!(5, regions.len());
        assert_eq!(1, regions.iter().filter(|r| r.label == 'O').count());
        assert_eq!(4, regions.iter().filter(|r| r.label == 'X').count());
        for region in &regions {
            assert!(region
                .plots
                .iter()
                .all(|position| grid.label(*position) == Some(region.label)));
        }
        Ok(())
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 5)]
    #[case(4, 1)]
    #[case(3, 3)]
    #[case(6, 2)]
    fn test_rectangle_has_four_sides(#[case] width: usize, #[case] height: usize) -> miette::Result<()> {
        let input = vec!["A".repeat(width); height].join("\n");
        let regions = Grid::parse(&input)?.classify().regions();

        assert_eq!(1, regions.len());
        let region = &regions[0];
        assert_eq!(width * height, region.area());
        assert_eq!(4, region.sides);
        assert_eq!(2 * (width + height), region.perimeter);
        Ok(())
    }

    #[test]
    fn test_single_plot_region() -> miette::Result<()> {
        let regions = Grid::parse("A")?.classify().regions();
        let region = &regions[0];
        assert_eq!(1, region.area());
        assert_eq!(4, region.price(Pricing::Perimeter));
        assert_eq!(4, region.price(Pricing::Sides));
        Ok(())
    }

    #[test]
    fn test_identical_regions_price_independently() -> miette::Result<()> {
        let regions = Grid::parse("AABAA\nAABAA")?.classify().regions();
        let a_regions = regions.iter().filter(|r| r.label == 'A').collect::<Vec<_>>();

        assert_eq!(2, a_regions.len());
        for region in &a_regions {
            assert_eq!(4, region.area());
            assert_eq!(8, region.perimeter);
            assert_eq!(4, region.sides);
        }
        assert!(a_regions[0]
            .plots
            .iter()
            .all(|position| !a_regions[1].plots.contains(position)));
        Ok(())
    }

    #[test]
    fn test_sides_with_inner_holes() -> miette::Result<()> {
        let input = "AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA";
        let regions = Grid::parse(input)?.classify().regions();
        let outer = regions.iter().find(|r| r.label == 'A').unwrap();
        assert_eq!(28, outer.area());
        assert_eq!(12, outer.sides);
        Ok(())
    }

    #[rstest]
    #[case("AAAA\nBBCD\nBBCC\nEEEC", 140, 80)]
    #[case("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", 772, 436)]
    #[case("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE", 692, 236)]
    #[case(LARGER_EXAMPLE, 1930, 1206)]
    fn test_total_price(
        #[case] input: &str,
        #[case] by_perimeter: usize,
        #[case] by_sides: usize,
    ) -> miette::Result<()> {
        let plots = Grid::parse(input)?.classify();
        assert_eq!(by_perimeter, plots.total_price(Pricing::Perimeter));
        assert_eq!(by_sides, plots.total_price(Pricing::Sides));
        Ok(())
    }
}
