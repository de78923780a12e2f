pub mod part1;
pub mod part2;

mod instruction;
