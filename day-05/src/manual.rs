use std::collections::HashSet;

use miette::{miette, Diagnostic, SourceSpan};
use nom::{
    character::complete::{char, line_ending, u32},
    combinator::all_consuming,
    multi::{count, separated_list1},
    sequence::{separated_pair, tuple},
    IResult,
};
use thiserror::Error;

pub(crate) type Page = u32;

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse safety manual")]
#[diagnostic(
    code(day05::parse_error),
    help("expected `X|Y` rules, a blank line, then comma separated updates")
)]
pub(crate) struct ManualParseError {
    #[source_code]
    src: String,
    #[label("unexpected input here")]
    span: SourceSpan,
}

/// Page ordering rules and the updates to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Manual {
    /// `(before, after)` pairs.
    rules: HashSet<(Page, Page)>,
    pub updates: Vec<Vec<Page>>,
}

impl Manual {
    pub fn parse(input: &str) -> Result<Self, ManualParseError> {
        let (_, (rules, _, updates)) = all_consuming(tuple((
            rules,
            count(line_ending, 2),
            separated_list1(line_ending, update),
        )))(input)
        .map_err(|e| {
            let offset = match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
                nom::Err::Incomplete(_) => input.len(),
            };
            ManualParseError {
                src: input.to_string(),
                span: (offset, 0).into(),
            }
        })?;

        Ok(Self {
            rules: rules.into_iter().collect(),
            updates,
        })
    }

    /// No page is printed after a page that a rule says must follow it.
    pub fn is_ordered(&self, update: &[Page]) -> bool {
        update.iter().enumerate().all(|(i, earlier)| {
            update[i + 1..]
                .iter()
                .all(|later| !self.rules.contains(&(*later, *earlier)))
        })
    }

    /// Rebuilds `update` in rule order, always taking the first remaining page
    /// that no other remaining page has to precede.
    pub fn reorder(&self, update: &[Page]) -> miette::Result<Vec<Page>> {
        let mut remaining = update.to_vec();
        let mut ordered = Vec::with_capacity(update.len());

        while !remaining.is_empty() {
            let next = remaining
                .iter()
                .position(|page| {
                    !remaining
                        .iter()
                        .any(|other| self.rules.contains(&(*other, *page)))
                })
                .ok_or_else(|| miette!("Ordering rules form a cycle among pages {:?}", remaining))?;
            ordered.push(remaining.remove(next));
        }

        Ok(ordered)
    }
}

pub(crate) fn middle_page(update: &[Page]) -> Page {
    update[update.len() / 2]
}

// region: nom parser
fn rules(input: &str) -> IResult<&str, Vec<(Page, Page)>> {
    separated_list1(line_ending, separated_pair(u32, char('|'), u32))(input)
}

fn update(input: &str) -> IResult<&str, Vec<Page>> {
    separated_list1(char(','), u32)(input)
}
// endregion

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse() -> miette::Result<()> {
        let manual = Manual::parse(SAMPLE_INPUT)?;
        assert_eq!(21, manual.rules.len());
        assert_eq!(6, manual.updates.len());
        assert_eq!(vec![75, 29, 13], manual.updates[2]);
        Ok(())
    }

    #[test]
    fn test_parse_missing_updates() {
        let err = Manual::parse("47|53\n97|13").unwrap_err();
        assert_eq!(11, err.span.offset());
    }

    #[rstest]
    #[case(&[75, 47, 61, 53, 29], true)]
    #[case(&[97, 61, 53, 29, 13], true)]
    #[case(&[75, 29, 13], true)]
    #[case(&[75, 97, 47, 61, 53], false)]
    #[case(&[61, 13, 29], false)]
    #[case(&[97, 13, 75, 29, 47], false)]
    fn test_is_ordered(#[case] update: &[Page], #[case] expected: bool) -> miette::Result<()> {
        let manual = Manual::parse(SAMPLE_INPUT)?;
        assert_eq!(expected, manual.is_ordered(update));
        Ok(())
    }

    #[rstest]
    #[case(&[75, 97, 47, 61, 53], &[97, 75, 47, 61, 53])]
    #[case(&[61, 13, 29], &[61, 29, 13])]
    #[case(&[97, 13, 75, 29, 47], &[97, 75, 47, 29, 13])]
    fn test_reorder(#[case] update: &[Page], #[case] expected: &[Page]) -> miette::Result<()> {
        let manual = Manual::parse(SAMPLE_INPUT)?;
        assert_eq!(expected, manual.reorder(update)?.as_slice());
        Ok(())
    }

    #[test]
    fn test_reorder_cycle() -> miette::Result<()> {
        let manual = Manual::parse("1|2\n2|1\n\n1,2")?;
        assert!(manual.reorder(&[1, 2]).is_err());
        Ok(())
    }
}
