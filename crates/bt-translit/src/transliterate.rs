//! Translittération texte → cellules braille.
//!
//! Un seul passage gauche → droite, une décision par caractère, sans
//! lookahead. L'état de scan (mode numérique, guillemet ouvert) est créé
//! à chaque appel et jeté à la fin.

use std::collections::VecDeque;
use std::str::Chars;

use bt_core::cell::Output;
use bt_core::config::{EngineOptions, QuoteStyle};

/// État transitoire d'un passage de translittération.
///
/// # Example
/// ```
/// use bt_translit::transliterate::{step, ScanState};
/// use bt_core::config::EngineOptions;
///
/// let mut state = ScanState::default();
/// let mut out = Vec::new();
/// step(&mut state, '7', &EngineOptions::default(), &mut out);
/// assert!(state.numeric_mode_active);
/// assert_eq!(out.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Un indicateur numérique a été émis et les chiffres se suivent.
    pub numeric_mode_active: bool,
    /// Un guillemet est ouvert (seulement en [`QuoteStyle::Toggle`]).
    pub quote_open: bool,
}

/// Effet d'une règle sur le mode numérique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericEffect {
    /// Sort du mode numérique.
    Clear,
    /// Laisse le mode tel quel.
    Keep,
}

/// Action d'une règle de ponctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Émet ces `(symbol_id, alt_text)` dans l'ordre.
    Emit(&'static [(&'static str, &'static str)]),
    /// Chiffre hors plage `1..=9` : indicateur si besoin, puis ce symbole.
    Digit(&'static str),
    /// `dec` en mode numérique, `period` sinon.
    Point,
    /// Apostrophe, selon [`QuoteStyle`].
    Quote,
    /// Saut de paragraphe.
    LineBreak,
}

/// Règle associée à un caractère exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Caractère déclencheur.
    pub ch: char,
    /// What the rule emits.
    pub action: Action,
    /// Effect on numeric mode once emitted. Ignored by [`Action::Digit`].
    pub numeric: NumericEffect,
}

const fn rule(ch: char, action: Action, numeric: NumericEffect) -> Rule {
    Rule {
        ch,
        action,
        numeric,
    }
}

use Action::{Digit, Emit, LineBreak, Point, Quote};
use NumericEffect::{Clear, Keep};

/// Table des caractères hors lettres et chiffres `1..=9`.
pub const RULES: &[Rule] = &[
    rule(' ', Emit(&[("sp", "")]), Clear),
    rule('0', Digit("j"), Keep),
    rule('\n', LineBreak, Clear),
    rule('.', Point, Keep),
    rule('$', Emit(&[("period", "$")]), Clear),
    rule('%', Emit(&[("col", "%"), ("p", "")]), Clear),
    rule('\'', Quote, Clear),
    rule(',', Emit(&[("comma", ",")]), Clear),
    rule('?', Emit(&[("qu", "?")]), Clear),
    rule('(', Emit(&[("par", "parenthesis")]), Clear),
    rule(')', Emit(&[("par", "parenthesis")]), Clear),
    rule('*', Emit(&[("ast", "*"), ("ast", "*")]), Clear),
    rule('!', Emit(&[("ex", "!")]), Clear),
    rule(':', Emit(&[("col", ":")]), Clear),
    rule(';', Emit(&[("sc", ";")]), Clear),
    rule('[', Emit(&[("cap", "["), ("par", "")]), Keep),
    rule(']', Emit(&[("par", "]"), ("qs", "")]), Keep),
];

/// Règle de ponctuation pour `c`, s'il y en a une.
///
/// # Example
/// ```
/// use bt_translit::transliterate::{rule_for, NumericEffect};
/// assert_eq!(rule_for('.').map(|r| r.numeric), Some(NumericEffect::Keep));
/// assert!(rule_for('@').is_none());
/// ```
#[must_use]
pub fn rule_for(c: char) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.ch == c)
}

/// Indicateur numérique, émis une fois par suite de chiffres.
fn enter_numeric(state: &mut ScanState, out: &mut impl Extend<Output>) {
    if !state.numeric_mode_active {
        out.extend([Output::cell("num", "Number")]);
    }
    state.numeric_mode_active = true;
}

/// Traite un caractère et pousse ses sorties dans `out`.
///
/// Les caractères non pris en charge ne produisent rien et ne touchent pas
/// à l'état.
pub fn step(
    state: &mut ScanState,
    c: char,
    options: &EngineOptions,
    out: &mut impl Extend<Output>,
) {
    if c.is_ascii_lowercase() {
        out.extend([Output::cell(c, c)]);
        state.numeric_mode_active = false;
        return;
    }

    if c.is_ascii_uppercase() {
        out.extend([
            Output::cell("cap", "Caps"),
            Output::cell(c.to_ascii_lowercase(), c),
        ]);
        state.numeric_mode_active = false;
        return;
    }

    if ('1'..='9').contains(&c) {
        enter_numeric(state, out);
        // Décalage de 48 : '1' → 'a', ..., '9' → 'i'.
        let shifted = char::from_u32(u32::from(c) + 48).unwrap_or(c);
        out.extend([Output::cell(shifted, c)]);
        return;
    }

    let Some(rule) = rule_for(c) else {
        log::trace!("Caractère ignoré : {c:?}");
        return;
    };

    match rule.action {
        Emit(cells) => out.extend(
            cells
                .iter()
                .map(|&(symbol_id, alt_text)| Output::cell(symbol_id, alt_text)),
        ),
        Digit(symbol_id) => {
            enter_numeric(state, out);
            out.extend([Output::cell(symbol_id, c)]);
            return;
        }
        Point => {
            let symbol_id = if state.numeric_mode_active {
                "dec"
            } else {
                "period"
            };
            out.extend([Output::cell(symbol_id, ".")]);
        }
        Quote => {
            let symbol_id = match options.quote_style {
                QuoteStyle::Fixed => "qs",
                QuoteStyle::Toggle => {
                    state.quote_open = !state.quote_open;
                    if state.quote_open { "qo" } else { "qc" }
                }
            };
            out.extend([Output::cell(symbol_id, "'")]);
        }
        LineBreak => out.extend([Output::LineBreak]),
    }

    if rule.numeric == Clear {
        state.numeric_mode_active = false;
    }
}

/// Itérateur paresseux sur les sorties d'un message.
///
/// Produit exactement la même séquence que [`transliterate_with`].
///
/// # Example
/// ```
/// use bt_translit::transliterate::Transliterator;
/// use bt_core::config::EngineOptions;
///
/// let opts = EngineOptions::default();
/// let ids: Vec<String> = Transliterator::new("Hi", &opts)
///     .filter_map(|o| o.symbol_id().map(String::from))
///     .collect();
/// assert_eq!(ids, ["cap", "h", "i"]);
/// ```
pub struct Transliterator<'a> {
    chars: Chars<'a>,
    options: &'a EngineOptions,
    state: ScanState,
    pending: VecDeque<Output>,
}

impl<'a> Transliterator<'a> {
    /// Start a fresh pass over `message`.
    #[must_use]
    pub fn new(message: &'a str, options: &'a EngineOptions) -> Self {
        Self {
            chars: message.chars(),
            options,
            state: ScanState::default(),
            pending: VecDeque::with_capacity(2),
        }
    }

    /// Current scan state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl Iterator for Transliterator<'_> {
    type Item = Output;

    fn next(&mut self) -> Option<Output> {
        while self.pending.is_empty() {
            let c = self.chars.next()?;
            step(&mut self.state, c, self.options, &mut self.pending);
        }
        self.pending.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.chars.size_hint();
        (
            self.pending.len(),
            upper.map(|n| self.pending.len() + n * 2),
        )
    }
}

/// Translittère `message` avec les options par défaut.
///
/// Total : n'échoue jamais, les caractères inconnus sont ignorés.
///
/// # Example
/// ```
/// use bt_translit::transliterate::transliterate;
/// use bt_core::cell::Output;
///
/// assert_eq!(
///     transliterate("5"),
///     vec![Output::cell("num", "Number"), Output::cell("e", "5")]
/// );
/// assert!(transliterate("").is_empty());
/// ```
#[must_use]
pub fn transliterate(message: &str) -> Vec<Output> {
    transliterate_with(message, &EngineOptions::default())
}

/// Translittère `message` avec des options explicites.
#[must_use]
pub fn transliterate_with(message: &str, options: &EngineOptions) -> Vec<Output> {
    let out: Vec<Output> = Transliterator::new(message, options).collect();
    log::debug!(
        "Translittération : {} caractères → {} sorties",
        message.chars().count(),
        out.len()
    );
    out
}
