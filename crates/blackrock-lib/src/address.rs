//! TimeLetter address notation: parsing the compact textual form.
//!
//! An address is written `<time><letter>`, e.g. `2A`, `10B`, `2:15C` or
//! `9:30D`. Hours run 2 through 10, quarter-hour minutes are only written
//! for hours 2 through 9, and the ring letter may be upper- or lowercase.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::city::{Position, Ring};
use crate::error::{Error, Result};

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(10)|([2-9])(?::(15|30|45))?)([a-lA-L])$").expect("address grammar compiles")
});

/// Parse a raw TimeLetter address into a validated [`Position`].
///
/// The whole input must match the grammar; no surrounding whitespace is
/// tolerated. Callers reading from interactive input should trim first.
pub fn parse_address(input: &str) -> Result<Position> {
    let captures = ADDRESS_RE
        .captures(input)
        .ok_or_else(|| Error::InvalidAddress {
            input: input.to_string(),
        })?;

    let hour: u8 = captures
        .get(1)
        .or_else(|| captures.get(2))
        .expect("grammar guarantees an hour group")
        .as_str()
        .parse()
        .expect("hour group is digits");
    let minute: u8 = captures
        .get(3)
        .map(|group| group.as_str().parse().expect("minute group is digits"))
        .unwrap_or(0);
    let letter = captures
        .get(4)
        .expect("grammar guarantees a letter group")
        .as_str()
        .chars()
        .next()
        .expect("letter group is one character");

    let ring = Ring::from_letter(letter)?;
    Ok(Position::new(hour, minute, ring))
}
