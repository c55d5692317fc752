use chumsky::prelude::*;
use miette::*;

/// Maps `len` values starting at `source_start` onto `destination_start..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMap {
    pub destination_start: u64,
    pub source_start: u64,
    pub len: u64,
}

impl RangeMap {
    pub fn contains(&self, value: u64) -> bool {
        value >= self.source_start && value - self.source_start < self.len
    }

    /// Maps `value` if it falls in this range.
    pub fn map(&self, value: u64) -> Option<u64> {
        self.contains(value)
            .then(|| self.destination_start + (value - self.source_start))
    }
}

/// One `<source>-to-<destination> map:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub source: String,
    pub destination: String,
    pub ranges: Vec<RangeMap>,
}

impl Section {
    /// Values that no range covers map to themselves.
    pub fn destination(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find_map(|range| range.map(value))
            .unwrap_or(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub sections: Vec<Section>,
}

impl Almanac {
    /// Follows a seed through every section in order.
    pub fn location(&self, seed: u64) -> u64 {
        self.sections
            .iter()
            .fold(seed, |value, section| section.destination(value))
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Almanac, extra::Err<Rich<'a, char>>> {
    let number = || {
        text::int(10)
            .from_str::<u64>()
            .unwrapped()
            .padded_by(text::inline_whitespace())
    };

    let seeds = just("seeds:").ignore_then(number().repeated().at_least(1).collect::<Vec<_>>());

    let header = text::ascii::ident()
        .then_ignore(just("-to-"))
        .then(text::ascii::ident())
        .then_ignore(just(" map:"))
        .map(|(source, destination): (&str, &str)| (source.to_string(), destination.to_string()));

    let range = number()
        .then(number())
        .then(number())
        .map(|((destination_start, source_start), len)| RangeMap {
            destination_start,
            source_start,
            len,
        });

    let section = header
        .then_ignore(text::newline())
        .then(range.separated_by(text::newline()).allow_trailing().collect::<Vec<_>>())
        .map(|((source, destination), ranges)| Section {
            source,
            destination,
            ranges,
        });

    seeds
        .then_ignore(text::whitespace())
        .then(
            section
                .separated_by(text::newline())
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .map(|(seeds, sections)| Almanac { seeds, sections })
        .padded()
}

pub fn parse_almanac(input: &str) -> Result<Almanac> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
