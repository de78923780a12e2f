use tracing::debug;

use crate::manual::{middle_page, Manual};

/// Puts every incorrectly ordered update into rule order and sums their
/// middle pages.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let manual = Manual::parse(input)?;

    let mut total = 0;
    for update in manual.updates.iter().filter(|update| !manual.is_ordered(update)) {
        let fixed = manual.reorder(update)?;
        debug!(?update, ?fixed, "reordered update");
        total += middle_page(&fixed);
    }

    Ok(total.to_string())
}
