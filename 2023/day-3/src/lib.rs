pub mod part1;
pub mod schematic;
