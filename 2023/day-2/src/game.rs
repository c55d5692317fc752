use chumsky::prelude::*;
use miette::*;

/// Cube counts per colour, either drawn from the bag or held by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Returns true when this set could have been drawn from `bag`.
    pub fn fits_in(&self, bag: &CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// Per-colour maximum of both sets.
    pub fn union(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    pub fn power(&self) -> u64 {
        self.red as u64 * self.green as u64 * self.blue as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub sets: Vec<CubeSet>,
}

impl Game {
    pub fn is_possible(&self, bag: &CubeSet) -> bool {
        self.sets.iter().all(|set| set.fits_in(bag))
    }

    /// The fewest cubes of each colour that make every set of the game possible.
    pub fn min_set(&self) -> CubeSet {
        self.sets
            .iter()
            .fold(CubeSet::default(), |acc, &set| acc.union(set))
    }
}

/// Parses `Game <id>: <n> <colour>, ...; ...` lines.
///
/// Unknown colours are logged and skipped rather than failing the whole game.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Game>, extra::Err<Rich<'a, char>>> {
    let count = || text::int(10).from_str::<u32>().unwrapped();

    let cubes = count()
        .padded_by(text::inline_whitespace())
        .then(text::ascii::ident())
        .then_ignore(text::inline_whitespace());

    let set = cubes
        .separated_by(just(','))
        .at_least(1)
        .collect::<Vec<_>>()
        .map(|cubes| {
            cubes
                .into_iter()
                .fold(CubeSet::default(), |mut set, (n, colour)| {
                    match colour {
                        "red" => set.red = n,
                        "green" => set.green = n,
                        "blue" => set.blue = n,
                        other => tracing::warn!(colour = other, "ignoring unknown cube colour"),
                    }
                    set
                })
        });

    let game = just("Game")
        .ignore_then(count().padded_by(text::inline_whitespace()))
        .then_ignore(just(':'))
        .then(set.separated_by(just(';')).collect::<Vec<_>>())
        .map(|(id, sets)| Game { id, sets });

    game.separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

pub fn parse_games(input: &str) -> Result<Vec<Game>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_game() -> Result<()> {
        let games = parse_games("Game 11: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green")?;
        assert_eq!(
            vec![Game {
                id: 11,
                sets: vec![
                    CubeSet::new(4, 0, 3),
                    CubeSet::new(1, 2, 6),
                    CubeSet::new(0, 2, 0),
                ],
            }],
            games
        );
        Ok(())
    }

    #[test]
    fn unknown_colours_are_skipped() -> Result<()> {
        let games = parse_games("Game 1: 3 purple, 2 red")?;
        assert_eq!(vec![CubeSet::new(2, 0, 0)], games[0].sets);
        Ok(())
    }

    #[test]
    fn malformed_game_is_an_error() {
        assert!(parse_games("Game x: 3 blue").is_err());
        assert!(parse_games("Game 1 3 blue").is_err());
    }

    #[test]
    fn min_set_takes_the_largest_draw_per_colour() {
        let game = Game {
            id: 1,
            sets: vec![
                CubeSet::new(4, 0, 3),
                CubeSet::new(1, 2, 6),
                CubeSet::new(0, 2, 0),
            ],
        };
        assert_eq!(CubeSet::new(4, 2, 6), game.min_set());
        assert_eq!(48, game.min_set().power());
        assert!(game.is_possible(&CubeSet::new(12, 13, 14)));
        assert!(!game.is_possible(&CubeSet::new(3, 13, 14)));
    }
}
