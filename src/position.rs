//! Text ⇄ coordinate adapter for typed or spoken positions.
//!
//! Accepts `"8 4"`, `"eight four"`, `"a 4"` and the compact `"a4"` form.
//! Callers integrating speech recognition pass an alias table rewriting
//! known mis-heard tokens before lookup, which also covers non-Latin
//! locales.

use crate::common::GameError;
use crate::geometry::Point;

/// Column letters for the classic 10×10 grid.
const LETTERS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Parse free-form position text with the built-in token tables only.
pub fn parse_position(text: &str) -> Result<Point, GameError> {
    parse_position_with(text, &[])
}

/// Parse with a caller-supplied token-normalization table. Each token is
/// rewritten through `aliases` before the regular lookup.
pub fn parse_position_with(text: &str, aliases: &[(&str, &str)]) -> Result<Point, GameError> {
    let text = text.trim().to_lowercase().replace(',', " ");
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let (x_token, y_token) = match tokens.as_slice() {
        [single] => split_compact(single)
            .ok_or_else(|| GameError::Parse(format!("can't parse position: {}", text)))?,
        [first, second] => (*first, *second),
        _ => return Err(GameError::Parse(format!("can't parse position: {}", text))),
    };

    let x = parse_coordinate(normalize(x_token, aliases))
        .ok_or_else(|| GameError::Parse(format!("can't parse x point: {}", x_token)))?;
    let y = parse_coordinate(normalize(y_token, aliases))
        .ok_or_else(|| GameError::Parse(format!("can't parse y point: {}", y_token)))?;
    Ok(Point::new(x, y))
}

/// Render a point for display or transmission. `numeric` uses the plain
/// column number, otherwise the grid letter.
pub fn format_position(point: Point, numeric: bool) -> String {
    if numeric {
        format!("{}, {}", point.x, point.y)
    } else {
        let letter = point
            .x
            .checked_sub(1)
            .and_then(|index| LETTERS.get(index))
            .copied()
            .unwrap_or("?");
        format!("{}, {}", letter, point.y)
    }
}

fn normalize<'a>(token: &'a str, aliases: &'a [(&'a str, &'a str)]) -> &'a str {
    aliases
        .iter()
        .find(|(from, _)| *from == token)
        .map(|(_, to)| *to)
        .unwrap_or(token)
}

/// Split the `a1` form into its letter and digit parts.
fn split_compact(token: &str) -> Option<(&str, &str)> {
    let boundary = token.find(|c: char| c.is_ascii_digit())?;
    let (head, tail) = token.split_at(boundary);
    if !head.is_empty()
        && head.chars().all(|c| c.is_alphabetic())
        && tail.chars().all(|c| c.is_ascii_digit())
    {
        Some((head, tail))
    } else {
        None
    }
}

fn parse_coordinate(token: &str) -> Option<usize> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    if let Some(index) = NUMBER_WORDS.iter().position(|&word| word == token) {
        return Some(index + 1);
    }
    LETTERS.iter().position(|&letter| letter == token).map(|index| index + 1)
}
