use miette::miette;
use tracing::debug;

use crate::lab::{Lab, Location, Patrol};

/// Counts the locations where a single new obstruction traps the guard in a
/// loop. Only locations on the guard's unobstructed route can change its path,
/// and the starting location is off limits.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lab = Lab::parse(input)?;
    let loops = loop_locations(&lab)?;

    Ok(loops.len().to_string())
}

fn loop_locations(lab: &Lab) -> miette::Result<Vec<Location>> {
    let Patrol::Exits(route) = lab.patrol(None) else {
        return Err(miette!("Guard already loops without a new obstruction"));
    };

    let mut loops = route
        .into_iter()
        .filter(|location| *location != lab.start())
        .filter(|location| lab.patrol(Some(*location)) == Patrol::Loops)
        .collect::<Vec<_>>();
    loops.sort();

    debug!(?loops, "obstructions that cause a loop");
    Ok(loops)
}
