use crate::city::City;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let city = City::parse(input)?;
    let antinodes = city.resonant_antinodes();
    tracing::debug!(count = antinodes.len(), "resonant antinodes");
    Ok(antinodes.len().to_string())
}
