use crate::city::City;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let city = City::parse(input)?;
    Ok(city.antinodes().len().to_string())
}
