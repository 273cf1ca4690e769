use std::io::Read;

use anyhow::{Context, Result};
use bt_core::config::{OutputFormat, QuoteStyle, ToolboxConfig, load_config};
use bt_core::error::CoreError;
use bt_translit::batch::transliterate_batch;
use bt_translit::glyph::GlyphTable;
use bt_translit::render::{format_reference_table, render};
use bt_translit::transliterate::transliterate_with;

use crate::cli::Cli;

/// Charge la config : fichier si présent, défauts sinon.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<ToolboxConfig> {
    match load_config(&cli.config) {
        Ok(config) => Ok(config),
        Err(e) if matches!(e.downcast_ref::<CoreError>(), Some(CoreError::FileNotFound { .. })) => {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                cli.config.display()
            );
            Ok(ToolboxConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Applique les options CLI par-dessus la config.
///
/// # Errors
/// Returns an error if `--format` or `--quote-style` is not recognised.
pub fn apply_overrides(cli: &Cli, config: &mut ToolboxConfig) -> Result<()> {
    if let Some(ref format) = cli.format {
        config.render.format = format.parse::<OutputFormat>()?;
    }
    if let Some(ref style) = cli.quote_style {
        config.engine.quote_style = style.parse::<QuoteStyle>()?;
    }
    Ok(())
}

/// Texte source : argument, fichier, ou `stdin`.
fn read_text(cli: &Cli, mut stdin: impl Read) -> Result<String> {
    if let Some(ref text) = cli.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = cli.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()));
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Impossible de lire l'entrée standard")?;
    // Le retour à la ligne final d'un pipe n'est pas un saut de paragraphe.
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Exécute la commande et retourne le texte à afficher.
///
/// # Errors
/// Returns an error if the input cannot be read, the config is invalid,
/// or an option value is not recognised.
pub fn run(cli: &Cli, config: &ToolboxConfig, stdin: impl Read) -> Result<String> {
    if cli.table {
        return Ok(format_reference_table());
    }

    cli.validate_source()?;
    let table = GlyphTable::from_config(config)?;
    let text = read_text(cli, stdin)?;

    if cli.batch {
        let lines: Vec<&str> = text.lines().collect();
        let results = transliterate_batch(&lines, &config.engine);
        let rendered = results
            .iter()
            .map(|outputs| render(outputs, &config.render, &table))
            .collect::<Result<Vec<_>>>()?;
        log::info!("{} messages traités", rendered.len());
        return Ok(rendered.join("\n"));
    }

    let outputs = transliterate_with(&text, &config.engine);
    render(&outputs, &config.render, &table)
}
