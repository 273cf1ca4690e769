use serde::{Deserialize, Serialize};

/// Une cellule produite par la translittération : le symbole à afficher et
/// son libellé accessible.
///
/// `symbol_id` désigne une lettre (`"a"`..`"z"`) ou un indicateur
/// (`"cap"`, `"num"`, `"sp"`, `"period"`, ...). Le rendu réel du symbole
/// appartient à la couche de présentation.
///
/// # Example
/// ```
/// use bt_core::cell::CellDescriptor;
/// let cell = CellDescriptor::new("cap", "Caps");
/// assert_eq!(cell.symbol_id, "cap");
/// assert_eq!(cell.alt_text, "Caps");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDescriptor {
    /// Clé du glyphe à afficher.
    pub symbol_id: String,
    /// Libellé lisible (infobulle, ARIA).
    pub alt_text: String,
}

impl CellDescriptor {
    /// Build a descriptor from any pair of string-like values.
    #[must_use]
    pub fn new(symbol_id: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            symbol_id: symbol_id.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Élément de sortie du translittérateur.
///
/// Un saut de paragraphe n'est pas une cellule braille : c'est une
/// instruction de mise en page, d'où la variante dédiée.
///
/// # Example
/// ```
/// use bt_core::cell::{CellDescriptor, Output};
/// let out = Output::Cell(CellDescriptor::new("a", "a"));
/// assert_eq!(out.as_cell().map(|c| c.symbol_id.as_str()), Some("a"));
/// assert!(Output::LineBreak.as_cell().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Output {
    /// A renderable braille cell.
    Cell(CellDescriptor),
    /// Paragraph break between cells.
    LineBreak,
}

impl Output {
    /// Shorthand for `Output::Cell(CellDescriptor::new(..))`.
    #[must_use]
    pub fn cell(symbol_id: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self::Cell(CellDescriptor::new(symbol_id, alt_text))
    }

    /// The wrapped descriptor, if this output is a cell.
    #[must_use]
    pub fn as_cell(&self) -> Option<&CellDescriptor> {
        match self {
            Self::Cell(cell) => Some(cell),
            Self::LineBreak => None,
        }
    }

    /// Symbol id of the cell, `None` for a line break.
    #[must_use]
    pub fn symbol_id(&self) -> Option<&str> {
        self.as_cell().map(|c| c.symbol_id.as_str())
    }
}

impl From<CellDescriptor> for Output {
    fn from(cell: CellDescriptor) -> Self {
        Self::Cell(cell)
    }
}
