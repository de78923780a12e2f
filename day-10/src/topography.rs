use std::collections::HashMap;

use miette::{miette, Diagnostic, SourceSpan};
use nom::{
    character::complete::{line_ending, satisfy},
    combinator::all_consuming,
    multi::{many1, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use petgraph::{
    algo::toposort,
    graph::{DiGraph, NodeIndex},
    visit::Dfs,
};
use thiserror::Error;

const TRAILHEAD: u8 = 0;
const PEAK: u8 = 9;

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse topographic map")]
#[diagnostic(code(day10::parse_error), help("every row must hold the same number of heights 0-9"))]
pub(crate) struct TopographyParseError {
    #[source_code]
    src: String,
    #[label("{reason}")]
    span: SourceSpan,
    reason: &'static str,
}

/// Heights as graph nodes, with an edge for every orthogonal step that climbs by exactly one.
#[derive(Debug)]
pub(crate) struct TrailMap {
    graph: DiGraph<u8, ()>,
}

impl TrailMap {
    pub fn parse(input: &str) -> Result<Self, TopographyParseError> {
        let (_, rows) = all_consuming(height_rows)(Span::new(input)).map_err(|err| {
            let offset = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => e.input.location_offset(),
                nom::Err::Incomplete(_) => input.len(),
            };
            TopographyParseError {
                src: input.to_string(),
                span: (offset, 1).into(),
                reason: "not a height",
            }
        })?;

        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            let start = row.first().map_or(0, |cell| cell.offset);
            return Err(TopographyParseError {
                src: input.to_string(),
                span: (start, row.len()).into(),
                reason: "row length differs from the first row",
            });
        }

        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();
        for cell in rows.iter().flatten() {
            indices.insert((cell.x, cell.y), graph.add_node(cell.height));
        }

        for (&(x, y), &from) in &indices {
            let neighbors = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for to in neighbors.iter().filter_map(|position| indices.get(position)) {
                if graph[*to] == graph[from] + 1 {
                    graph.add_edge(from, *to, ());
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built trail graph"
        );
        Ok(TrailMap { graph })
    }

    pub fn trailheads(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(|index| self.graph[*index] == TRAILHEAD)
    }

    /// Number of distinct peaks reachable from `trailhead`.
    pub fn score(&self, trailhead: NodeIndex) -> usize {
        let mut dfs = Dfs::new(&self.graph, trailhead);
        let mut peaks = 0;
        while let Some(index) = dfs.next(&self.graph) {
            if self.graph[index] == PEAK {
                peaks += 1;
            }
        }
        peaks
    }

    /// Number of distinct trails from each node to any peak.
    pub fn ratings(&self) -> miette::Result<HashMap<NodeIndex, usize>> {
        let order = toposort(&self.graph, None)
            .map_err(|cycle| miette!("trail graph has a cycle at {:?}", cycle.node_id()))?;

        let mut ratings = HashMap::with_capacity(order.len());
        for index in order.into_iter().rev() {
            let rating = if self.graph[index] == PEAK {
                1
            } else {
                self.graph
                    .neighbors(index)
                    .map(|next| ratings.get(&next).copied().unwrap_or(0))
                    .sum()
            };
            ratings.insert(index, rating);
        }
        Ok(ratings)
    }
}

// region: nom parser
type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy)]
struct Cell {
    x: usize,
    y: usize,
    offset: usize,
    height: u8,
}

fn height(input: Span) -> IResult<Span, Cell> {
    let cell = Cell {
        x: input.get_column() - 1,
        y: input.location_line() as usize - 1,
        offset: input.location_offset(),
        height: 0,
    };
    satisfy(|c: char| c.is_ascii_digit())
        .map(|c| Cell {
            height: c as u8 - b'0',
            ..cell
        })
        .parse(input)
}

fn height_rows(input: Span) -> IResult<Span, Vec<Vec<Cell>>> {
    separated_list1(line_ending, many1(height))(input)
}
// endregion

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";
