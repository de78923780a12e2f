#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lines = input.lines().count();
    tracing::debug!(lines);
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "";
        assert_eq!("", process(input)?);
        Ok(())
    }
}
