use miette::*;

use crate::almanac::parse_almanac;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let almanac = parse_almanac(input)?;

    let lowest = almanac
        .seeds
        .iter()
        .map(|&seed| {
            let location = almanac.location(seed);
            tracing::debug!(seed, location);
            location
        })
        .min()
        .ok_or(miette!("Almanac lists no seeds"))?;

    Ok(lowest.to_string())
}
