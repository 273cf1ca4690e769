use std::path::PathBuf;

use clap::Parser;

/// brailletool — Translittération texte → braille.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Texte à translittérer. Sans texte ni --input, lit l'entrée standard.
    pub text: Option<String>,

    /// Lire le texte depuis un fichier.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Format de sortie : unicode, symbols, alt, json.
    #[arg(long)]
    pub format: Option<String>,

    /// Apostrophe : fixed (glyphe unique) ou toggle (ouvrant/fermant).
    #[arg(long)]
    pub quote_style: Option<String>,

    /// Chaque ligne est un message indépendant, traité en parallèle.
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Afficher la table de référence grade 1 et quitter.
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that at most one text source is provided.
    ///
    /// # Errors
    /// Returns an error if both a positional text and `--input` are given.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        if self.text.is_some() && self.input.is_some() {
            anyhow::bail!("Une seule source de texte à la fois : argument OU --input.");
        }
        Ok(())
    }
}
