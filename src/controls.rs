//! Navigation control schemes and their symbol-to-movement mapping.

use crate::error::PaginationError;

/// Default glyphs for the basic scheme (previous, next).
pub const DEFAULT_SYMBOLS: [&str; 2] = ["⬅️", "➡️"];
/// Default glyphs for the extended scheme (first, previous, next, last).
pub const DEFAULT_EXTENDED_SYMBOLS: [&str; 4] = ["⏪", "⬅️", "➡️", "⏩"];

/// A single navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    First,
    Previous,
    Next,
    Last,
}

const BASIC_MOVEMENTS: [Movement; 2] = [Movement::Previous, Movement::Next];
const EXTENDED_MOVEMENTS: [Movement; 4] = [
    Movement::First,
    Movement::Previous,
    Movement::Next,
    Movement::Last,
];

/// The enabled set of navigation symbols and the movement each one triggers.
///
/// Symbols are attached to the message in the order returned by
/// [`ControlScheme::symbols`].
#[derive(Debug, Clone)]
pub struct ControlScheme {
    symbols: Vec<String>,
    movements: &'static [Movement],
}

impl ControlScheme {
    /// Two-symbol scheme with the default glyphs: previous, next.
    pub fn basic() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| (*s).to_owned()).collect(),
            movements: &BASIC_MOVEMENTS,
        }
    }

    /// Four-symbol scheme with the default glyphs: first, previous, next, last.
    pub fn extended() -> Self {
        Self {
            symbols: DEFAULT_EXTENDED_SYMBOLS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            movements: &EXTENDED_MOVEMENTS,
        }
    }

    /// Two-symbol scheme with custom glyphs, in previous/next order.
    pub fn basic_with(symbols: Vec<String>) -> Result<Self, PaginationError> {
        validate_symbols(&symbols, 2)?;
        Ok(Self {
            symbols,
            movements: &BASIC_MOVEMENTS,
        })
    }

    /// Four-symbol scheme with custom glyphs, in first/previous/next/last order.
    pub fn extended_with(symbols: Vec<String>) -> Result<Self, PaginationError> {
        validate_symbols(&symbols, 4)?;
        Ok(Self {
            symbols,
            movements: &EXTENDED_MOVEMENTS,
        })
    }

    /// The enabled symbols, in attach order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The movement bound to a symbol, or `None` if the symbol is not part
    /// of this scheme.
    pub fn movement_for(&self, symbol: &str) -> Option<Movement> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| self.movements[i])
    }
}

fn validate_symbols(symbols: &[String], expected: usize) -> Result<(), PaginationError> {
    if symbols.len() != expected {
        return Err(PaginationError::InvalidConfiguration(format!(
            "control scheme requires exactly {expected} symbols, got {}",
            symbols.len()
        )));
    }

    for (i, symbol) in symbols.iter().enumerate() {
        if symbols[..i].contains(symbol) {
            return Err(PaginationError::InvalidConfiguration(format!(
                "control scheme symbols must be distinct, {symbol} appears twice"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_basic_maps_prev_next() {
        let scheme = ControlScheme::basic();
        assert_eq!(scheme.symbols().len(), 2);
        assert_eq!(scheme.movement_for("⬅️"), Some(Movement::Previous));
        assert_eq!(scheme.movement_for("➡️"), Some(Movement::Next));
        assert_eq!(scheme.movement_for("⏪"), None);
    }

    #[test]
    fn test_extended_maps_all_four_in_order() {
        let scheme = ControlScheme::extended();
        assert_eq!(scheme.symbols(), &owned(&["⏪", "⬅️", "➡️", "⏩"])[..]);
        assert_eq!(scheme.movement_for("⏪"), Some(Movement::First));
        assert_eq!(scheme.movement_for("⬅️"), Some(Movement::Previous));
        assert_eq!(scheme.movement_for("➡️"), Some(Movement::Next));
        assert_eq!(scheme.movement_for("⏩"), Some(Movement::Last));
    }

    #[test]
    fn test_custom_basic_symbols() {
        let scheme = ControlScheme::basic_with(owned(&["<", ">"])).expect("valid scheme");
        assert_eq!(scheme.movement_for("<"), Some(Movement::Previous));
        assert_eq!(scheme.movement_for(">"), Some(Movement::Next));
    }

    #[test]
    fn test_wrong_symbol_count_rejected() {
        assert!(matches!(
            ControlScheme::basic_with(owned(&["<", "-", ">"])),
            Err(PaginationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ControlScheme::extended_with(owned(&["<", ">"])),
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        assert!(matches!(
            ControlScheme::basic_with(owned(&["<", "<"])),
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }
}
