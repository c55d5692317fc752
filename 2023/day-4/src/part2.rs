use miette::*;

use crate::card::parse_cards;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let cards = parse_cards(input)?;

    // Every card starts with its original copy
    let mut copies = vec![1u64; cards.len()];

    for (i, card) in cards.iter().enumerate() {
        let matches = card.matches();
        // Cards past the end of the table are never won
        let last = (i + matches).min(cards.len().saturating_sub(1));

        let won = copies[i];
        for count in &mut copies[i + 1..=last] {
            *count += won;
        }
        tracing::trace!(card = card.id, matches, copies = won);
    }

    let total: u64 = copies.iter().sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";
        assert_eq!("30", process(input)?);
        Ok(())
    }

    #[test]
    fn wins_past_the_last_card_are_dropped() -> Result<()> {
        // Card 2 would win copies of cards 3 and 4, which don't exist
        let input = "Card 1: 1 2 | 1 9
Card 2: 5 6 | 5 6";
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
