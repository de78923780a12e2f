use crate::calibration::{parse_equations, Operator};

const OPERATORS: [Operator; 2] = [Operator::Add, Operator::Multiply];

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let total: u64 = parse_equations(input)?
        .iter()
        .filter(|equation| equation.is_solvable(&OPERATORS))
        .map(|equation| equation.test_value)
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::SAMPLE_INPUT;

    #[test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("3749", process(SAMPLE_INPUT)?);
        Ok(())
    }
}
