use miette::miette;
use nom::{
    character::complete::{space1, u64},
    combinator::all_consuming,
    multi::separated_list1,
    IResult, Parser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Stone(pub u64);

/// What a single stone turns into after one blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Blink {
    One(Stone),
    Two(Stone, Stone),
}

impl Blink {
    pub fn stones(self) -> impl Iterator<Item = Stone> {
        let (first, second) = match self {
            Blink::One(stone) => (stone, None),
            Blink::Two(left, right) => (left, Some(right)),
        };
        std::iter::once(first).chain(second)
    }
}

impl Stone {
    pub fn blink(self) -> miette::Result<Blink> {
        let Stone(value) = self;
        if value == 0 {
            return Ok(Blink::One(Stone(1)));
        }

        let digits = value.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            return Ok(Blink::Two(Stone(value / half), Stone(value % half)));
        }

        value
            .checked_mul(2024)
            .map(|value| Blink::One(Stone(value)))
            .ok_or_else(|| miette!("stone {value} overflows when multiplied by 2024"))
    }
}

pub(crate) fn parse_stones(input: &str) -> miette::Result<Vec<Stone>> {
    let (_, stones) = all_consuming(stones)(input)
        .map_err(|err| miette!("failed to parse stones: {err}"))?;
    Ok(stones)
}

// region: nom parser
fn stones(input: &str) -> IResult<&str, Vec<Stone>> {
    separated_list1(space1, u64.map(Stone))(input)
}
// endregion
