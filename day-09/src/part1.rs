use crate::disk::{checksum, compact_blocks, DiskMap};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let mut blocks = DiskMap::parse(input)?.blocks();
    tracing::debug!(blocks = blocks.len());

    compact_blocks(&mut blocks);
    Ok(checksum(&blocks).to_string())
}
