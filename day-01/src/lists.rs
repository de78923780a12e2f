use miette::miette;
use nom::{
    character::complete::{line_ending, space1, u32},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

/// The two location id columns, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lists {
    pub left: Vec<u32>,
    pub right: Vec<u32>,
}

pub(crate) fn parse_lists(input: &str) -> miette::Result<Lists> {
    let (_, pairs) = all_consuming(parse_pairs)(input)
        .map_err(|e| miette!("Failed to parse location lists: {}", e))?;

    let (left, right) = pairs.into_iter().unzip();
    Ok(Lists { left, right })
}

fn parse_pairs(input: &str) -> IResult<&str, Vec<(u32, u32)>> {
    separated_list1(line_ending, separated_pair(u32, space1, u32))(input)
}
