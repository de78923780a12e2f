use crate::calibration::{parse_equations, Operator};

const OPERATORS: [Operator; 3] = [Operator::Add, Operator::Multiply, Operator::Concatenate];

/// Like part 1, with the `||` concatenation operator added.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let equations = parse_equations(input)?;
    let solvable = equations
        .iter()
        .filter(|equation| equation.is_solvable(&OPERATORS))
        .collect::<Vec<_>>();
    tracing::debug!(total = equations.len(), solvable = solvable.len());

    let total: u64 = solvable.iter().map(|equation| equation.test_value).sum();
    Ok(total.to_string())
}
