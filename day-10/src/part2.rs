use crate::topography::TrailMap;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let map = TrailMap::parse(input)?;
    let ratings = map.ratings()?;
    let total: usize = map
        .trailheads()
        .filter_map(|trailhead| ratings.get(&trailhead))
        .sum();

    Ok(total.to_string())
}
