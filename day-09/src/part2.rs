use crate::disk::DiskMap;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let mut disk = DiskMap::parse(input)?;
    tracing::debug!(files = disk.files.len(), free_runs = disk.free.len());

    disk.compact_files();
    Ok(disk.checksum().to_string())
}
