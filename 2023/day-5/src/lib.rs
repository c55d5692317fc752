pub mod almanac;
pub mod part1;
