use std::collections::HashMap;

use bt_core::config::{DEFAULT_FALLBACK_GLYPH, ToolboxConfig};
use bt_core::dots::{Dots, known_symbols, letter_dots, symbol_dots};
use bt_core::error::CoreError;

/// Table `symbol_id → représentation visuelle`.
///
/// Par défaut chaque symbole connu est rendu par son motif Unicode Braille.
/// La configuration peut remplacer n'importe quelle entrée.
///
/// # Example
/// ```
/// use bt_translit::glyph::GlyphTable;
/// let table = GlyphTable::default();
/// assert_eq!(table.glyph("a"), Some("⠁"));
/// assert_eq!(table.glyph("cap"), Some("⠠"));
/// assert_eq!(table.glyph("???"), None);
/// ```
#[derive(Clone, Debug)]
pub struct GlyphTable {
    map: HashMap<String, String>,
    fallback: String,
}

impl Default for GlyphTable {
    fn default() -> Self {
        let map = known_symbols()
            .into_iter()
            .filter_map(|id| symbol_dots(&id).map(|d| (id, d.to_char().to_string())))
            .collect();
        Self {
            map,
            fallback: DEFAULT_FALLBACK_GLYPH.to_string(),
        }
    }
}

impl GlyphTable {
    /// Table par défaut, surchargée par `[glyphs]` et `render.fallback_glyph`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyGlyph`] if an override is empty.
    ///
    /// # Example
    /// ```
    /// use bt_core::config::ToolboxConfig;
    /// use bt_translit::glyph::GlyphTable;
    ///
    /// let mut config = ToolboxConfig::default();
    /// config.glyphs.insert("cap".into(), "^".into());
    /// let table = GlyphTable::from_config(&config).unwrap();
    /// assert_eq!(table.glyph("cap"), Some("^"));
    /// assert_eq!(table.glyph("b"), Some("⠃"));
    /// ```
    pub fn from_config(config: &ToolboxConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let mut table = Self::default();
        for (symbol_id, glyph) in &config.glyphs {
            table.map.insert(symbol_id.clone(), glyph.clone());
        }
        if !config.render.fallback_glyph.is_empty() {
            table.fallback.clone_from(&config.render.fallback_glyph);
        }
        Ok(table)
    }

    /// Glyphe d'un symbole, s'il est connu.
    #[must_use]
    pub fn glyph(&self, symbol_id: &str) -> Option<&str> {
        self.map.get(symbol_id).map(String::as_str)
    }

    /// Glyphe d'un symbole, ou le glyphe de repli.
    #[must_use]
    pub fn glyph_or_fallback(&self, symbol_id: &str) -> &str {
        self.glyph(symbol_id).unwrap_or_else(|| {
            log::warn!("Pas de glyphe pour '{symbol_id}', repli sur '{}'", self.fallback);
            self.fallback.as_str()
        })
    }

    /// Nombre d'entrées.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// La table est-elle vide ?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Une ligne de la table de référence grade 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceRow {
    /// Lettre minuscule.
    pub letter: char,
    /// Points levés.
    pub dots: Vec<u8>,
    /// Motif Unicode.
    pub glyph: char,
}

/// Table de référence `a`..`z` : lettre, points, motif.
///
/// # Example
/// ```
/// use bt_translit::glyph::reference_table;
/// let rows = reference_table();
/// assert_eq!(rows.len(), 26);
/// assert_eq!(rows[0].dots, vec![1]);
/// assert_eq!(rows[25].glyph, '⠵');
/// ```
#[must_use]
pub fn reference_table() -> Vec<ReferenceRow> {
    ('a'..='z')
        .filter_map(|letter| {
            letter_dots(letter).map(|numbers| {
                let dots = Dots::from_numbers(numbers);
                ReferenceRow {
                    letter,
                    dots: dots.numbers(),
                    glyph: dots.to_char(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_known_symbol() {
        let table = GlyphTable::default();
        assert_eq!(table.len(), known_symbols().len());
    }

    #[test]
    fn space_renders_blank_cell() {
        assert_eq!(GlyphTable::default().glyph("sp"), Some("\u{2800}"));
    }

    #[test]
    fn number_sign_is_3456() {
        assert_eq!(GlyphTable::default().glyph("num"), Some("⠼"));
    }

    #[test]
    fn unknown_symbol_uses_fallback() {
        let table = GlyphTable::default();
        assert_eq!(table.glyph_or_fallback("zzz"), DEFAULT_FALLBACK_GLYPH);
    }

    #[test]
    fn config_fallback_is_applied() {
        let mut config = ToolboxConfig::default();
        config.render.fallback_glyph = "?".into();
        let table = GlyphTable::from_config(&config).unwrap();
        assert_eq!(table.glyph_or_fallback("zzz"), "?");
    }

    #[test]
    fn config_can_add_unknown_symbols() {
        let mut config = ToolboxConfig::default();
        config.glyphs.insert("star".into(), "✱".into());
        let table = GlyphTable::from_config(&config).unwrap();
        assert_eq!(table.glyph("star"), Some("✱"));
    }

    #[test]
    fn empty_override_is_rejected() {
        let mut config = ToolboxConfig::default();
        config.glyphs.insert("a".into(), String::new());
        assert!(GlyphTable::from_config(&config).is_err());
    }

    #[test]
    fn reference_rows_are_in_alphabetical_order() {
        let letters: String = reference_table().iter().map(|r| r.letter).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }
}
