use miette::*;

use crate::card::parse_cards;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let cards = parse_cards(input)?;

    let total: u64 = cards.iter().map(|card| card.points()).sum();

    Ok(total.to_string())
}
