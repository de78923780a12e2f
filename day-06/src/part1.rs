use miette::miette;

use crate::lab::{Lab, Patrol};

/// Counts the distinct locations the guard visits before leaving the lab.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lab = Lab::parse(input)?;

    match lab.patrol(None) {
        Patrol::Exits(visited) => Ok(visited.len().to_string()),
        Patrol::Loops => Err(miette!("Guard never leaves the lab")),
    }
}
