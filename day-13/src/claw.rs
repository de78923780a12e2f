use miette::{miette, Diagnostic, SourceSpan};
use nom::{
    bytes::complete::tag,
    character::complete::{i64, line_ending},
    combinator::{all_consuming, map},
    multi::{many1, separated_list1},
    sequence::{preceded, separated_pair, tuple},
    IResult,
};
use thiserror::Error;

const A_COST: i64 = 3;
const B_COST: i64 = 1;

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse claw machine")]
#[diagnostic(
    code(day13::parse_error),
    help("each machine is a `Button A`, a `Button B` and a `Prize` line")
)]
pub(crate) struct MachineParseError {
    #[source_code]
    src: String,
    #[label("parsing stopped here")]
    span: SourceSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Offset {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Machine {
    pub a: Offset,
    pub b: Offset,
    pub prize: Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Presses {
    pub a: i64,
    pub b: i64,
}

impl Presses {
    pub fn tokens(&self) -> i128 {
        i128::from(self.a) * i128::from(A_COST) + i128::from(self.b) * i128::from(B_COST)
    }
}

impl Machine {
    pub fn with_prize_offset(self, offset: i64) -> miette::Result<Self> {
        let shift = |value: i64| {
            value
                .checked_add(offset)
                .ok_or_else(|| miette!("prize coordinate {value} overflows when offset by {offset}"))
        };
        Ok(Machine {
            prize: Offset {
                x: shift(self.prize.x)?,
                y: shift(self.prize.y)?,
            },
            ..self
        })
    }

    /// The unique press counts reaching the prize, by Cramer's rule.
    ///
    /// Buttons pulling along the same line (zero determinant) never win.
    pub fn solve(&self) -> Option<Presses> {
        let [ax, ay, bx, by, px, py] = [
            self.a.x,
            self.a.y,
            self.b.x,
            self.b.y,
            self.prize.x,
            self.prize.y,
        ]
        .map(i128::from);

        let determinant = ax.checked_mul(by)?.checked_sub(ay.checked_mul(bx)?)?;
        if determinant == 0 {
            return None;
        }

        let a_numerator = px.checked_mul(by)?.checked_sub(py.checked_mul(bx)?)?;
        let b_numerator = ax.checked_mul(py)?.checked_sub(ay.checked_mul(px)?)?;
        if a_numerator % determinant != 0 || b_numerator % determinant != 0 {
            return None;
        }

        let presses = Presses {
            a: i64::try_from(a_numerator / determinant).ok()?,
            b: i64::try_from(b_numerator / determinant).ok()?,
        };
        (presses.a >= 0 && presses.b >= 0).then_some(presses)
    }
}

/// Fewest tokens to win every winnable machine, skipping any needing more
/// than `press_limit` presses of either button.
pub(crate) fn total_tokens(machines: &[Machine], press_limit: Option<i64>) -> i128 {
    machines
        .iter()
        .filter_map(|machine| {
            let presses = machine.solve();
            tracing::debug!(?machine, ?presses);
            presses
        })
        .filter(|presses| press_limit.map_or(true, |limit| presses.a <= limit && presses.b <= limit))
        .map(|presses| presses.tokens())
        .sum()
}

pub(crate) fn parse_machines(input: &str) -> Result<Vec<Machine>, MachineParseError> {
    all_consuming(machines)(input)
        .map(|(_, machines)| machines)
        .map_err(|err| {
            let offset = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
                nom::Err::Incomplete(_) => input.len(),
            };
            MachineParseError {
                src: input.to_string(),
                span: (offset, 0).into(),
            }
        })
}

// region: nom parser
fn offset<'a>(x: &'static str, y: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, Offset> {
    map(
        separated_pair(preceded(tag(x), i64), tag(", "), preceded(tag(y), i64)),
        |(x, y)| Offset { x, y },
    )
}

fn machine(input: &str) -> IResult<&str, Machine> {
    let (input, (a, _, b, _, prize)) = tuple((
        preceded(tag("Button A: "), offset("X+", "Y+")),
        line_ending,
        preceded(tag("Button B: "), offset("X+", "Y+")),
        line_ending,
        preceded(tag("Prize: "), offset("X=", "Y=")),
    ))(input)?;

    Ok((input, Machine { a, b, prize }))
}

fn machines(input: &str) -> IResult<&str, Vec<Machine>> {
    separated_list1(many1(line_ending), machine)(input)
}
// endregion

#[cfg(test)]
pub(crate) const SAMPLE_INPUT: &str = "Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_machines() -> miette::Result<()> {
        let machines = parse_machines(SAMPLE_INPUT)?;
        assert_eq!(4, machines.len());
        assert_eq!(
            Machine {
                a: Offset { x: 94, y: 34 },
                b: Offset { x: 22, y: 67 },
                prize: Offset { x: 8400, y: 5400 },
            },
            machines[0]
        );
        Ok(())
    }

    #[test]
    fn test_parse_error_offset() {
        let err = parse_machines("Button A: X+94, Y+34\nButton C: X+22, Y+67").unwrap_err();
        assert_eq!(21, err.span.offset());
    }

    #[test]
    fn test_solve_sample() -> miette::Result<()> {
        let presses = parse_machines(SAMPLE_INPUT)?
            .iter()
            .map(Machine::solve)
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                Some(Presses { a: 80, b: 40 }),
                None,
                Some(Presses { a: 38, b: 86 }),
                None,
            ],
            presses
        );
        Ok(())
    }

    #[test]
    fn test_solve_with_offset() -> miette::Result<()> {
        let winnable = parse_machines(SAMPLE_INPUT)?
            .into_iter()
            .map(|machine| Ok(machine.with_prize_offset(10_000_000_000_000)?.solve().is_some()))
            .collect::<miette::Result<Vec<_>>>()?;
        assert_eq!(vec![false, true, false, true], winnable);
        Ok(())
    }

    #[test]
    fn test_collinear_buttons() {
        let machine = Machine {
            a: Offset { x: 2, y: 2 },
            b: Offset { x: 1, y: 1 },
            prize: Offset { x: 10, y: 10 },
        };
        assert_eq!(None, machine.solve());
    }

    #[test]
    fn test_negative_presses() {
        let machine = Machine {
            a: Offset { x: 1, y: 0 },
            b: Offset { x: 0, y: 1 },
            prize: Offset { x: -3, y: 4 },
        };
        assert_eq!(None, machine.solve());
    }

    #[test]
    fn test_press_limit() {
        let machine = Machine {
            a: Offset { x: 1, y: 0 },
            b: Offset { x: 0, y: 1 },
            prize: Offset { x: 101, y: 5 },
        };
        assert_eq!(0, total_tokens(&[machine], Some(100)));
        assert_eq!(308, total_tokens(&[machine], None));
    }

    #[test]
    fn test_huge_coordinates() -> miette::Result<()> {
        let machines = parse_machines(
            "Button A: X+9223372036854775807, Y+3
Button B: X+2, Y+9223372036854775807
Prize: X=5, Y=5",
        )?;
        assert_eq!(None, machines[0].solve());
        assert_eq!(0, total_tokens(&machines, None));
        assert!(machines[0].with_prize_offset(i64::MAX).is_err());
        Ok(())
    }

    #[test]
    fn test_tokens_beyond_i64() {
        let machine = Machine {
            a: Offset { x: 1, y: 0 },
            b: Offset { x: 0, y: 1 },
            prize: Offset {
                x: i64::MAX,
                y: i64::MAX,
            },
        };
        let presses = machine.solve();
        assert_eq!(
            Some(Presses {
                a: i64::MAX,
                b: i64::MAX
            }),
            presses
        );
        assert_eq!(
            4 * i128::from(i64::MAX),
            total_tokens(&[machine], None)
        );
    }
}
