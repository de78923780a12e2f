use miette::Result;
use tracing::info;

use crate::garden::{Grid, Pricing};

/// Total fencing price with the bulk discount: each region pays
/// `area * sides`, where a side is a straight run of fence of any length.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    info!(width = grid.width(), height = grid.height(), "parsed garden map");

    let price = grid.classify().total_price(Pricing::Sides);
    Ok(price.to_string())
}
