use miette::*;

use crate::game::parse_games;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let games = parse_games(input)?;

    let sum: u64 = games
        .iter()
        .map(|game| {
            let min = game.min_set();
            tracing::debug!(game = game.id, ?min, "minimum cube set");
            min.power()
        })
        .sum();

    Ok(sum.to_string())
}
