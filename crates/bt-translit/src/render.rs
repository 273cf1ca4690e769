use std::fmt::Write as _;

use anyhow::{Context, Result};
use bt_core::cell::Output;
use bt_core::config::{OutputFormat, RenderOptions};

use crate::glyph::{GlyphTable, reference_table};

/// Met en forme une séquence de sorties selon `options.format`.
///
/// # Errors
/// Returns an error only if JSON serialization fails.
///
/// # Example
/// ```
/// use bt_core::config::{OutputFormat, RenderOptions};
/// use bt_translit::glyph::GlyphTable;
/// use bt_translit::render::render;
/// use bt_translit::transliterate::transliterate;
///
/// let outputs = transliterate("Hi");
/// let table = GlyphTable::default();
/// let text = render(&outputs, &RenderOptions::default(), &table).unwrap();
/// assert_eq!(text, "⠠⠓⠊");
///
/// let opts = RenderOptions { format: OutputFormat::Symbols, ..RenderOptions::default() };
/// assert_eq!(render(&outputs, &opts, &table).unwrap(), "cap h i");
/// ```
pub fn render(outputs: &[Output], options: &RenderOptions, table: &GlyphTable) -> Result<String> {
    match options.format {
        OutputFormat::Unicode => Ok(render_unicode(outputs, options, table)),
        OutputFormat::Symbols => Ok(render_symbols(outputs, options)),
        OutputFormat::Alt => Ok(render_alt(outputs)),
        OutputFormat::Json => {
            serde_json::to_string(outputs).context("Erreur de sérialisation JSON")
        }
    }
}

fn render_unicode(outputs: &[Output], options: &RenderOptions, table: &GlyphTable) -> String {
    let mut text = String::with_capacity(outputs.len() * 3);
    for output in outputs {
        match output {
            Output::Cell(cell) => text.push_str(table.glyph_or_fallback(&cell.symbol_id)),
            Output::LineBreak => text.push_str(&options.line_break),
        }
    }
    text
}

/// Une ligne par paragraphe, symboles séparés par `options.separator`.
fn render_symbols(outputs: &[Output], options: &RenderOptions) -> String {
    let mut text = String::new();
    let mut line_start = true;
    for output in outputs {
        match output {
            Output::Cell(cell) => {
                if !line_start {
                    text.push_str(&options.separator);
                }
                text.push_str(&cell.symbol_id);
                line_start = false;
            }
            Output::LineBreak => {
                text.push('\n');
                line_start = true;
            }
        }
    }
    text
}

fn render_alt(outputs: &[Output]) -> String {
    outputs
        .iter()
        .map(|output| match output {
            Output::Cell(cell) => cell.alt_text.as_str(),
            Output::LineBreak => "\n",
        })
        .collect()
}

/// Table de référence grade 1 en texte brut, une lettre par ligne.
///
/// # Example
/// ```
/// use bt_translit::render::format_reference_table;
/// let table = format_reference_table();
/// assert!(table.lines().any(|l| l == "a  ⠁  1"));
/// ```
#[must_use]
pub fn format_reference_table() -> String {
    let mut text = String::new();
    for row in reference_table() {
        let dots: String = row.dots.iter().map(u8::to_string).collect();
        let _ = writeln!(text, "{}  {}  {}", row.letter, row.glyph, dots);
    }
    text
}
