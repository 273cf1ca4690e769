//! Moteur de translittération texte → braille.
//!
//! Transforme un texte en séquence de cellules braille symboliques, puis
//! les met en forme pour l'affichage.

pub mod batch;
pub mod glyph;
pub mod render;
pub mod transliterate;

pub use batch::transliterate_batch;
pub use glyph::GlyphTable;
pub use render::render;
pub use transliterate::{Transliterator, transliterate, transliterate_with};
