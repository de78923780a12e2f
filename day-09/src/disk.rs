use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("Invalid character {character:?} in disk map")]
#[diagnostic(code(day09::invalid_char), help("the disk map may only contain digits 0-9"))]
pub(crate) struct InvalidCharError {
    #[source_code]
    src: String,
    #[label("invalid character found here")]
    span: SourceSpan,
    character: char,
}

/// A file occupying `len` contiguous blocks starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct File {
    pub id: usize,
    pub start: usize,
    pub len: usize,
}

impl File {
    fn checksum(&self) -> usize {
        (self.start..self.start + self.len)
            .map(|position| position * self.id)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Free {
    pub start: usize,
    pub len: usize,
}

/// The disk map expanded into file and free-space runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiskMap {
    pub files: Vec<File>,
    pub free: Vec<Free>,
    size: usize,
}

impl DiskMap {
    pub fn parse(input: &str) -> Result<Self, InvalidCharError> {
        let mut files = Vec::new();
        let mut free = Vec::new();
        let mut start = 0;

        for (offset, character) in input.char_indices() {
            let len = character.to_digit(10).ok_or_else(|| InvalidCharError {
                src: input.to_string(),
                span: (offset, character.len_utf8()).into(),
                character,
            })? as usize;

            if offset % 2 == 0 {
                files.push(File {
                    id: files.len(),
                    start,
                    len,
                });
            } else if len > 0 {
                free.push(Free { start, len });
            }
            start += len;
        }

        Ok(DiskMap {
            files,
            free,
            size: start,
        })
    }

    /// One entry per block: the owning file id, or `None` for free space.
    pub fn blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = vec![None; self.size];
        for file in &self.files {
            blocks[file.start..file.start + file.len].fill(Some(file.id));
        }
        blocks
    }

    /// Moves each file, highest id first, into the leftmost free run to its
    /// left that can hold it. Files that fit nowhere stay put.
    pub fn compact_files(&mut self) {
        for file in self.files.iter_mut().rev() {
            let Some(free) = self
                .free
                .iter_mut()
                .take_while(|free| free.start < file.start)
                .find(|free| free.len >= file.len)
            else {
                continue;
            };

            file.start = free.start;
            free.start += file.len;
            free.len -= file.len;
        }
    }

    pub fn checksum(&self) -> usize {
        self.files.iter().map(File::checksum).sum()
    }
}

/// Moves blocks one at a time from the end of the disk into the leftmost gap.
pub(crate) fn compact_blocks(blocks: &mut [Option<usize>]) {
    let (mut left, mut right) = (0, blocks.len());
    loop {
        while left < right && blocks[left].is_some() {
            left += 1;
        }
        while right > left && blocks[right - 1].is_none() {
            right -= 1;
        }
        if left + 1 >= right {
            break;
        }
        blocks.swap(left, right - 1);
    }
}

pub(crate) fn checksum(blocks: &[Option<usize>]) -> usize {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(position, id)| id.map(|id| position * id))
        .sum()
}

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "2333133121414131402";

#[cfg(test)]
mod tests {
    use super::*;

    fn render(blocks: &[Option<usize>]) -> String {
        blocks
            .iter()
            .map(|block| match block {
                Some(id) => char::from_digit(*id as u32, 10).unwrap_or('?'),
                None => '.',
            })
            .collect()
    }

    #[test]
    fn test_blocks() -> miette::Result<()> {
        let disk = DiskMap::parse("12345")?;
        assert_eq!("0..111....22222", render(&disk.blocks()));
        Ok(())
    }

    #[test]
    fn test_compact_blocks() -> miette::Result<()> {
        let mut blocks = DiskMap::parse("12345")?.blocks();
        compact_blocks(&mut blocks);
        assert_eq!("022111222......", render(&blocks));
        Ok(())
    }

    #[test]
    fn test_compact_blocks_sample() -> miette::Result<()> {
        let mut blocks = DiskMap::parse(SAMPLE_INPUT)?.blocks();
        compact_blocks(&mut blocks);
        assert_eq!(
            "0099811188827773336446555566..............",
            render(&blocks)
        );
        Ok(())
    }

    #[test]
    fn test_compact_files_sample() -> miette::Result<()> {
        let mut disk = DiskMap::parse(SAMPLE_INPUT)?;
        disk.compact_files();
        assert_eq!(
            "00992111777.44.333....5555.6666.....8888..",
            render(&disk.blocks())
        );
        Ok(())
    }

    #[test]
    fn test_invalid_char() {
        let err = DiskMap::parse("12a45").unwrap_err();
        assert_eq!('a', err.character);
        assert_eq!(2, err.span.offset());
    }

    #[test]
    fn test_zero_length_file() -> miette::Result<()> {
        let disk = DiskMap::parse("11002")?;
        assert_eq!(3, disk.files.len());
        assert_eq!(0, disk.files[1].len);
        assert_eq!("0.22", render(&disk.blocks()));
        Ok(())
    }
}
