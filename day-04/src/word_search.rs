use itertools::iproduct;
use miette::miette;

/// Compass directions as `(dx, dy)` steps, y growing downwards.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordSearch {
    letters: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl WordSearch {
    pub fn parse(input: &str) -> miette::Result<Self> {
        let letters: Vec<Vec<u8>> = input.lines().map(|line| line.bytes().collect()).collect();
        let width = letters.first().map_or(0, Vec::len);

        if let Some(row) = letters.iter().position(|row| row.len() != width) {
            return Err(miette!(
                "Word search row {} has {} letters, expected {}",
                row + 1,
                letters[row].len(),
                width
            ));
        }

        Ok(Self {
            height: letters.len(),
            width,
            letters,
        })
    }

    /// Letter at `(x, y)`; `None` anywhere off the grid.
    pub fn get(&self, x: isize, y: isize) -> Option<u8> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.letters.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = (isize, isize)> {
        iproduct!(0..self.height as isize, 0..self.width as isize).map(|(y, x)| (x, y))
    }

    /// Does `word` read from `(x, y)` stepping by `(dx, dy)`?
    pub fn reads(&self, word: &[u8], (x, y): (isize, isize), (dx, dy): (isize, isize)) -> bool {
        word.iter()
            .enumerate()
            .all(|(i, letter)| self.get(x + dx * i as isize, y + dy * i as isize) == Some(*letter))
    }
}
