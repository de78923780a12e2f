use crate::manual::{middle_page, Manual};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let manual = Manual::parse(input)?;

    let total: u32 = manual
        .updates
        .iter()
        .filter(|update| manual.is_ordered(update))
        .map(|update| middle_page(update))
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::SAMPLE_INPUT;

    #[test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("143", process(SAMPLE_INPUT)?);
        Ok(())
    }
}
