use miette::*;

use crate::game::{parse_games, CubeSet};

/// The cubes loaded into the bag.
const BAG: CubeSet = CubeSet::new(12, 13, 14);

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let games = parse_games(input)?;

    let sum: u32 = games
        .iter()
        .filter(|game| game.is_possible(&BAG))
        .map(|game| game.id)
        .sum();

    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";
        assert_eq!("8", process(input)?);
        Ok(())
    }
}
