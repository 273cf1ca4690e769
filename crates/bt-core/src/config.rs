use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dots::symbol_dots;
use crate::error::CoreError;

/// Glyphe de repli pour un symbole sans représentation (six points levés).
pub const DEFAULT_FALLBACK_GLYPH: &str = "⠿";

/// Saut de paragraphe par défaut : double retour à la ligne.
pub const DEFAULT_LINE_BREAK: &str = "\n\n";

/// Configuration complète de la boîte à outils.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use bt_core::config::{OutputFormat, QuoteStyle, ToolboxConfig};
/// let config = ToolboxConfig::default();
/// assert_eq!(config.engine.quote_style, QuoteStyle::Fixed);
/// assert_eq!(config.render.format, OutputFormat::Unicode);
/// assert!(config.glyphs.is_empty());
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ToolboxConfig {
    /// Options du translittérateur.
    pub engine: EngineOptions,
    /// Options de rendu de la sortie.
    pub render: RenderOptions,
    /// Surcharges `symbol_id → représentation visuelle`.
    pub glyphs: BTreeMap<String, String>,
}

/// Options affectant la translittération elle-même.
///
/// # Example
/// ```
/// use bt_core::config::{EngineOptions, QuoteStyle};
/// let opts = EngineOptions { quote_style: QuoteStyle::Toggle };
/// assert_ne!(opts, EngineOptions::default());
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EngineOptions {
    /// Traitement de l'apostrophe.
    pub quote_style: QuoteStyle,
}

/// Options de mise en forme de la sortie.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RenderOptions {
    /// Format de sortie.
    pub format: OutputFormat,
    /// Séparateur entre symboles en mode `Symbols`.
    pub separator: String,
    /// Chaîne émise pour un saut de paragraphe en mode `Unicode`.
    pub line_break: String,
    /// Glyphe utilisé quand un symbole n'a pas de représentation.
    pub fallback_glyph: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Unicode,
            separator: " ".to_string(),
            line_break: DEFAULT_LINE_BREAK.to_string(),
            fallback_glyph: DEFAULT_FALLBACK_GLYPH.to_string(),
        }
    }
}

/// Traitement de l'apostrophe.
///
/// # Example
/// ```
/// use bt_core::config::QuoteStyle;
/// assert_eq!("toggle".parse::<QuoteStyle>().unwrap(), QuoteStyle::Toggle);
/// assert!("curly".parse::<QuoteStyle>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Glyphe `qs` fixe, sans bascule.
    #[default]
    Fixed,
    /// Alterne guillemet ouvrant (`qo`) et fermant (`qc`).
    Toggle,
}

impl FromStr for QuoteStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "toggle" => Ok(Self::Toggle),
            _ => Err(CoreError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Output format enumeration.
///
/// # Example
/// ```
/// use bt_core::config::OutputFormat;
/// assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::Alt.to_string(), "alt");
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Unicode braille patterns (U+2800 block).
    #[default]
    Unicode,
    /// Symbol ids joined by the separator.
    Symbols,
    /// Alt texts only.
    Alt,
    /// JSON array of outputs.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "symbols" => Ok(Self::Symbols),
            "alt" => Ok(Self::Alt),
            "json" => Ok(Self::Json),
            _ => Err(CoreError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unicode => "unicode",
            Self::Symbols => "symbols",
            Self::Alt => "alt",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

impl ToolboxConfig {
    /// Normalise les champs après désérialisation.
    ///
    /// Un glyphe de repli vide retombe sur [`DEFAULT_FALLBACK_GLYPH`].
    pub fn normalize(&mut self) {
        if self.render.fallback_glyph.is_empty() {
            self.render.fallback_glyph = DEFAULT_FALLBACK_GLYPH.to_string();
        }
    }

    /// Vérifie les surcharges de glyphes.
    ///
    /// Un symbole inconnu est conservé (la couche de présentation peut en
    /// avoir l'usage) mais signalé dans les logs.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyGlyph`] if an override maps to an empty string.
    ///
    /// # Example
    /// ```
    /// use bt_core::config::ToolboxConfig;
    /// let mut config = ToolboxConfig::default();
    /// config.glyphs.insert("cap".into(), "^".into());
    /// assert!(config.validate().is_ok());
    /// config.glyphs.insert("num".into(), String::new());
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        for (symbol_id, glyph) in &self.glyphs {
            if glyph.is_empty() {
                return Err(CoreError::EmptyGlyph {
                    symbol_id: symbol_id.clone(),
                });
            }
            if symbol_dots(symbol_id).is_none() {
                log::warn!("Symbole inconnu dans [glyphs] : '{symbol_id}'");
            }
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    engine: Option<EngineSection>,
    render: Option<RenderSection>,
    glyphs: Option<BTreeMap<String, String>>,
}

/// Engine section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct EngineSection {
    quote_style: Option<QuoteStyle>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    format: Option<OutputFormat>,
    separator: Option<String>,
    line_break: Option<String>,
    fallback_glyph: Option<String>,
}

/// Parse du TOML et fusion avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the TOML is malformed or a glyph override is empty.
///
/// # Example
/// ```
/// use bt_core::config::{parse_config, QuoteStyle};
/// let config = parse_config("[engine]\nquote_style = \"toggle\"\n").unwrap();
/// assert_eq!(config.engine.quote_style, QuoteStyle::Toggle);
/// assert_eq!(config.render.separator, " ");
/// ```
pub fn parse_config(content: &str) -> Result<ToolboxConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ToolboxConfig::default();

    if let Some(v) = file.engine.and_then(|e| e.quote_style) {
        config.engine.quote_style = v;
    }

    if let Some(r) = file.render {
        if let Some(v) = r.format {
            config.render.format = v;
        }
        if let Some(v) = r.separator {
            config.render.separator = v;
        }
        if let Some(v) = r.line_break {
            config.render.line_break = v;
        }
        if let Some(v) = r.fallback_glyph {
            config.render.fallback_glyph = v;
        }
    }

    if let Some(g) = file.glyphs {
        config.glyphs = g;
    }

    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use bt_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ToolboxConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ToolboxConfig::default());
    }

    #[test]
    fn partial_render_section_keeps_other_defaults() {
        let config = parse_config("[render]\nformat = \"symbols\"\n").unwrap();
        assert_eq!(config.render.format, OutputFormat::Symbols);
        assert_eq!(config.render.line_break, DEFAULT_LINE_BREAK);
        assert_eq!(config.render.fallback_glyph, DEFAULT_FALLBACK_GLYPH);
    }

    #[test]
    fn glyph_overrides_are_loaded() {
        let config = parse_config("[glyphs]\ncap = \"^\"\nnum = \"#\"\n").unwrap();
        assert_eq!(config.glyphs.get("cap").map(String::as_str), Some("^"));
        assert_eq!(config.glyphs.len(), 2);
    }

    #[test]
    fn empty_glyph_is_rejected() {
        let err = parse_config("[glyphs]\ncap = \"\"\n").unwrap_err();
        let core = err.downcast_ref::<CoreError>().unwrap();
        assert_eq!(
            core,
            &CoreError::EmptyGlyph {
                symbol_id: "cap".into()
            }
        );
    }

    #[test]
    fn unknown_glyph_key_is_kept() {
        let config = parse_config("[glyphs]\nstar = \"*\"\n").unwrap();
        assert!(config.glyphs.contains_key("star"));
    }

    #[test]
    fn empty_fallback_is_normalized() {
        let config = parse_config("[render]\nfallback_glyph = \"\"\n").unwrap();
        assert_eq!(config.render.fallback_glyph, DEFAULT_FALLBACK_GLYPH);
    }

    #[test]
    fn unknown_enum_value_is_a_parse_error() {
        assert!(parse_config("[render]\nformat = \"html\"\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]\nquote_style = \"toggle\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.engine.quote_style, QuoteStyle::Toggle);
    }

    #[test]
    fn load_config_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }
}
