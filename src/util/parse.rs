//! Reading coordinate lists from text.
//!
//! Coordinates are numbers separated by any mix of commas, semicolons and
//! whitespace. Brackets around individual points are ignored, so all of these
//! describe the same two points:
//!
//! ```
//! # use hitbox::util::parse::parse_to_array;
//! # use hitbox::plane::p2;
//! let expected = vec![p2(1.0, 2.0), p2(3.5, -4.0)];
//! assert_eq!(parse_to_array("1,2;3.5,-4").unwrap(), expected);
//! assert_eq!(parse_to_array("1 2 3.5 -4").unwrap(), expected);
//! assert_eq!(parse_to_array("(1, 2) (3.5, -4)").unwrap(), expected);
//! ```
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::plane::Point;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| {
        Regex::new(r"[\s,;()\[\]]+").expect("separator pattern is valid")
    })
}

fn tokens(s: &str) -> Vec<&str> {
    separators().split(s).filter(|t| !t.is_empty()).collect()
}

fn number(index: usize, token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber { index, token: token.to_string() })
    }
}

fn points(tokens: &[&str], offset: usize) -> Result<Vec<Point>, ParseError> {
    tokens.chunks(2).enumerate().map(|(i, pair)| {
        let index = offset + 2 * i;
        let x = number(index, pair[0])?;
        let y = number(index + 1, pair[1])?;
        Ok(Point::new(x, y))
    }).collect()
}

/// Parses every token of `s` as consecutive `x, y` pairs.
pub fn parse_to_array(s: &str) -> Result<Vec<Point>, ParseError> {
    let tokens = tokens(s);
    if tokens.is_empty() {
        return Err(ParseError::Empty)
    }
    if tokens.len() % 2 != 0 {
        log::debug!("odd coordinate count in {:?}", s);
        return Err(ParseError::OddTokenCount(tokens.len()))
    }
    points(&tokens, 0)
}

/// Parses exactly `count` points, starting at token index `start`. Tokens
/// after the last requested point are ignored.
///
/// ```
/// # use hitbox::util::parse::parse_to_array_from;
/// # use hitbox::plane::p2;
/// let pts = parse_to_array_from("label 0 0 1 1 2 2", 1, 2).unwrap();
/// assert_eq!(pts, vec![p2(0.0, 0.0), p2(1.0, 1.0)]);
/// assert!(parse_to_array_from("0 0 1", 0, 2).is_err());
/// ```
pub fn parse_to_array_from(s: &str, start: usize, count: usize) -> Result<Vec<Point>, ParseError> {
    let tokens = tokens(s);
    let needed = count.checked_mul(2)
        .ok_or_else(|| ParseError::InvalidCount(count.to_string()))?;
    let found = tokens.len().saturating_sub(start);
    match start.checked_add(needed).and_then(|end| tokens.get(start..end)) {
        Some(window) => points(window, start),
        None => Err(ParseError::InsufficientTokens { start, needed, found }),
    }
}

/// Parses the counted format `n x0 y0 x1 y1 ...`, where the leading token is
/// the number of points that follow.
pub fn parse_counted(s: &str) -> Result<Vec<Point>, ParseError> {
    let tokens = tokens(s);
    let first = tokens.first().ok_or(ParseError::Empty)?;
    let count: usize = first.parse()
        .map_err(|_| ParseError::InvalidCount(first.to_string()))?;
    parse_to_array_from(s, 1, count)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plane::p2;

    #[test]
    fn test_separators() {
        let pts = parse_to_array(" 0,0 ;\t1.5 , 2e1 ;[-3,4] ").unwrap();
        assert_eq!(pts, vec![p2(0.0, 0.0), p2(1.5, 20.0), p2(-3.0, 4.0)]);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_to_array(""), Err(ParseError::Empty));
        assert_eq!(parse_to_array(" ; "), Err(ParseError::Empty));
        assert_eq!(parse_to_array("1,2;3"), Err(ParseError::OddTokenCount(3)));
        assert_eq!(
            parse_to_array("1,2;x,4"),
            Err(ParseError::InvalidNumber { index: 2, token: "x".to_string() })
        );
        assert!(matches!(parse_to_array("1,NaN"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(parse_to_array("inf,1"), Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn test_from_start() {
        assert_eq!(
            parse_to_array_from("9 9 1 2", 2, 1).unwrap(),
            vec![p2(1.0, 2.0)]
        );
        assert_eq!(
            parse_to_array_from("1 2 3", 1, 2),
            Err(ParseError::InsufficientTokens { start: 1, needed: 4, found: 2 })
        );
        assert_eq!(
            parse_to_array_from("1 2", 5, 1),
            Err(ParseError::InsufficientTokens { start: 5, needed: 2, found: 0 })
        );
        assert_eq!(
            parse_to_array_from("1 2", 5, 0),
            Err(ParseError::InsufficientTokens { start: 5, needed: 0, found: 0 })
        );
        assert_eq!(parse_to_array_from("1 2", 2, 0), Ok(vec![]));
        assert_eq!(
            parse_to_array_from("0 0 a 1", 0, 2),
            Err(ParseError::InvalidNumber { index: 2, token: "a".to_string() })
        );
    }

    #[test]
    fn test_counted() {
        assert_eq!(
            parse_counted("3 0 0 4 0 0 3").unwrap(),
            vec![p2(0.0, 0.0), p2(4.0, 0.0), p2(0.0, 3.0)]
        );
        assert_eq!(parse_counted("x 0 0"), Err(ParseError::InvalidCount("x".to_string())));
        assert!(matches!(parse_counted("3 0 0 1 1"), Err(ParseError::InsufficientTokens { .. })));
        assert_eq!(parse_counted(""), Err(ParseError::Empty));
        assert_eq!(parse_counted("0"), Ok(vec![]));
    }

    #[test]
    fn test_counted_overflow() {
        let huge = format!("{} 0 0", usize::MAX / 2 + 1);
        assert_eq!(
            parse_counted(&huge),
            Err(ParseError::InvalidCount((usize::MAX / 2 + 1).to_string()))
        );
        assert!(matches!(
            parse_counted(&format!("{} 0 0", usize::MAX / 2)),
            Err(ParseError::InsufficientTokens { .. })
        ));
    }
}
