use crate::error::{Error, Result};

/// Position on the galactic chart, derived from a letter+digits label such
/// as `"L9"` (column L, row 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSquare {
    pub x: i32,
    pub y: i32,
}

impl GridSquare {
    /// Parse a grid label into chart coordinates.
    ///
    /// The column letter is case-insensitive and maps alphabetically
    /// (`A` -> 0); the row is 1-based on the chart (`A1` -> `(0, 0)`).
    /// Anything that is not a single ASCII letter followed by digits is
    /// rejected so bad labels surface at load time instead of producing a
    /// silently wrong distance.
    pub fn parse(label: &str) -> Result<Self> {
        let mut chars = label.chars();
        let column = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(|| malformed(label))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(label));
        }
        let row: i32 = digits.parse().map_err(|_| malformed(label))?;

        let x = i32::from(column.to_ascii_uppercase() as u8 - b'A');
        Ok(Self { x, y: row - 1 })
    }

    /// Straight-line distance to another square, in grid units. Exactly zero
    /// when both squares are the same.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether another square touches this one on the 8-connected chart.
    /// A co-located square counts as adjacent.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

fn malformed(label: &str) -> Error {
    Error::MalformedGrid {
        label: label.to_string(),
    }
}
