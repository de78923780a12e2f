use std::collections::HashMap;

use crate::stones::{parse_stones, Stone};

pub const BLINKS: usize = 75;

/// Counts descendants of a stone, remembering every `(stone, remaining blinks)` seen.
#[derive(Debug, Default)]
struct StoneCounter {
    memo: HashMap<(Stone, usize), usize>,
}

impl StoneCounter {
    fn count(&mut self, stone: Stone, remaining: usize) -> miette::Result<usize> {
        if remaining == 0 {
            return Ok(1);
        }
        if let Some(&count) = self.memo.get(&(stone, remaining)) {
            return Ok(count);
        }

        let mut count = 0;
        for next in stone.blink()?.stones() {
            count += self.count(next, remaining - 1)?;
        }

        self.memo.insert((stone, remaining), count);
        Ok(count)
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str, blinks: usize) -> miette::Result<String> {
    let mut counter = StoneCounter::default();

    let mut total = 0;
    for stone in parse_stones(input)? {
        total += counter.count(stone, blinks)?;
    }
    tracing::debug!(memo = counter.memo.len(), total);

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("125 17", 6, "22")]
    #[case("125 17", 25, "55312")]
    #[case("0", 0, "1")]
    fn test_process(
        #[case] input: &str,
        #[case] blinks: usize,
        #[case] expected: &str,
    ) -> miette::Result<()> {
        assert_eq!(expected, process(input, blinks)?);
        Ok(())
    }

    #[rstest]
    #[case("0 1 10 99 999")]
    #[case("125 17")]
    #[case("7 2024 3")]
    fn test_matches_simulation(#[case] input: &str) -> miette::Result<()> {
        for blinks in [1, 5, 12, 20] {
            assert_eq!(crate::part1::process(input, blinks)?, process(input, blinks)?);
        }
        Ok(())
    }

    #[test]
    fn test_memo_is_per_call() -> miette::Result<()> {
        let first = process("125 17", 10)?;
        let second = process("125 17", 10)?;
        assert_eq!(first, second);

        let mut counter = StoneCounter::default();
        counter.count(Stone(0), 3)?;
        assert!(counter.memo.contains_key(&(Stone(0), 3)));
        assert!(StoneCounter::default().memo.is_empty());
        Ok(())
    }
}
