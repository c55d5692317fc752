use std::collections::HashSet;

use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: HashSet<u32>,
    pub numbers: Vec<u32>,
}

impl Card {
    /// How many of the numbers you have are winning numbers.
    pub fn matches(&self) -> usize {
        self.numbers
            .iter()
            .filter(|n| self.winning.contains(n))
            .count()
    }

    /// One point for the first match, doubled for every match after it.
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            n => 1 << (n - 1),
        }
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Card>, extra::Err<Rich<'a, char>>> {
    let number = || {
        text::int(10)
            .from_str::<u32>()
            .unwrapped()
            .padded_by(text::inline_whitespace())
    };

    let card = just("Card")
        .ignore_then(number())
        .then_ignore(just(':'))
        .then(number().repeated().collect::<HashSet<_>>())
        .then_ignore(just('|'))
        .then(number().repeated().collect::<Vec<_>>())
        .map(|((id, winning), numbers)| Card {
            id,
            winning,
            numbers,
        });

    card.separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

pub fn parse_cards(input: &str) -> Result<Vec<Card>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
