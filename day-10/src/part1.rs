use crate::topography::TrailMap;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let map = TrailMap::parse(input)?;
    let total: usize = map
        .trailheads()
        .map(|trailhead| map.score(trailhead))
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topography::SAMPLE_INPUT;

    #[test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("36", process(SAMPLE_INPUT)?);
        Ok(())
    }
}
