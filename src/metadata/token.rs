//! Metadata tokens identifying types, members and annotations of the in-memory type model.
//!
//! A token packs the table a row lives in (high byte) together with its row index
//! (low 24 bits). Tokens give every descriptor a cheap, copyable identity which the
//! [`crate::metadata::typesystem::TypeRegistry`] uses as its primary key.

use std::fmt;
use std::hash::{Hash, Hasher};

use strum::EnumCount;

/// Tables of the in-memory model a [`Token`] can point into.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount)]
pub enum TableId {
    /// Class and value type definitions
    TypeDef = 0x02,
    /// Field definitions
    Field = 0x04,
    /// Method definitions
    MethodDef = 0x06,
    /// Annotations applied to types, fields or methods
    CustomAttribute = 0x0C,
}

impl TableId {
    /// Dense position of the table in `0..TableId::COUNT`
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TableId::TypeDef => 0,
            TableId::Field => 1,
            TableId::MethodDef => 2,
            TableId::CustomAttribute => 3,
        }
    }
}

/// A metadata token representing a reference to a table entry.
///
/// - The high byte (bits 24-31) indicates the table
/// - The low 24 bits (bits 0-23) indicate the row index within that table
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Token(pub u32);

impl Token {
    /// Creates a token for `row` in `table`
    ///
    /// ## Arguments
    /// * 'table' - The table the row lives in
    /// * 'row'   - The 1-based row, truncated to 24 bits
    #[must_use]
    pub fn from_parts(table: TableId, row: u32) -> Self {
        Token(((table as u32) << 24) | (row & 0x00FF_FFFF))
    }

    /// Extracts the table byte from the token (high byte)
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the row index from the token (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
