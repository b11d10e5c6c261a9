//! Layout token grammar.
//!
//! A layout is a sequence of tokens, one per line:
//! - Header: `"<N> <K>"`, the flask count and the number of chemical types
//! - Directive: a digit `count` followed by a flask number, e.g. `21`, `2 1`
//!   or `2F1` ("move 2 staged units into flask 1")
//! - Chemical: anything else, e.g. `AA`

use serde::{Deserialize, Serialize};

use crate::core::{Chemical, LayoutError};

/// The header line of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHeader {
    /// Number of flasks on the board, `N`.
    pub total_flasks: usize,

    /// Number of distinct chemicals, `K`. Also the number of complete
    /// flasks needed to win.
    pub total_chemical_types: usize,
}

impl LayoutHeader {
    /// Parse `"<N> <K>"`.
    ///
    /// ```
    /// use flask_sort::layout::LayoutHeader;
    ///
    /// let header = LayoutHeader::parse("8 6").unwrap();
    /// assert_eq!(header.total_flasks, 8);
    /// assert_eq!(header.total_chemical_types, 6);
    ///
    /// assert!(LayoutHeader::parse("8").is_err());
    /// assert!(LayoutHeader::parse("0 2").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, LayoutError> {
        let mut parts = token.split_whitespace();
        let (Some(flasks), Some(types), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LayoutError::malformed(format!(
                "header `{token}` must be two numbers, `<flasks> <chemical types>`"
            )));
        };

        let total_flasks = parse_positive(flasks, "flask count")?;
        let total_chemical_types = parse_positive(types, "chemical type count")?;

        if total_flasks > u16::MAX as usize {
            return Err(LayoutError::malformed(format!(
                "flask count {total_flasks} is too large"
            )));
        }

        Ok(Self {
            total_flasks,
            total_chemical_types,
        })
    }
}

fn parse_positive(text: &str, what: &str) -> Result<usize, LayoutError> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LayoutError::malformed(format!(
            "{what} `{text}` is not a positive integer"
        ))),
    }
}

/// A token after the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutToken {
    /// Stage one unit.
    Chemical(Chemical),

    /// Move `count` staged units, oldest first, onto `flask`.
    Directive { count: usize, flask: u16 },
}

impl LayoutToken {
    /// Classify and parse a token. The token should already be trimmed.
    ///
    /// ```
    /// use flask_sort::core::Chemical;
    /// use flask_sort::layout::LayoutToken;
    ///
    /// assert_eq!(
    ///     LayoutToken::parse("AA").unwrap(),
    ///     LayoutToken::Chemical(Chemical::new("AA"))
    /// );
    /// assert_eq!(
    ///     LayoutToken::parse("3F2").unwrap(),
    ///     LayoutToken::Directive { count: 3, flask: 2 }
    /// );
    /// ```
    pub fn parse(token: &str) -> Result<Self, LayoutError> {
        let mut chars = token.chars();
        let count = match chars.next().and_then(|c| c.to_digit(10)) {
            Some(count) => count as usize,
            None => return Ok(LayoutToken::Chemical(Chemical::new(token))),
        };

        let rest = chars.as_str();
        let digits_start = rest
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);

        let flask = digits_start
            .and_then(|start| rest[start..].parse::<u16>().ok())
            .ok_or_else(|| {
                LayoutError::malformed(format!("directive `{token}` does not name a flask"))
            })?;

        Ok(LayoutToken::Directive { count, flask })
    }
}
