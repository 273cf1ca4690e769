//! Tables de points braille grade 1.
//!
//! Numérotation des points (colonne par colonne) :
//! ```text
//!  1 4
//!  2 5
//!  3 6
//!  7 8
//! ```

/// Braille base codepoint (U+2800).
const BRAILLE_BASE: u32 = 0x2800;

/// Masque de points d'une cellule. Point n → bit n-1.
///
/// # Example
/// ```
/// use bt_core::dots::Dots;
/// let d = Dots::from_numbers(&[1, 2]);
/// assert_eq!(d.bits(), 0b11);
/// assert_eq!(d.to_char(), '⠃');
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dots(u8);

impl Dots {
    /// Cellule vide (U+2800).
    pub const EMPTY: Self = Self(0);

    /// Wrap a raw bitmask.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a mask from dot numbers in `1..=8`. Out-of-range numbers are ignored.
    #[must_use]
    pub fn from_numbers(numbers: &[u8]) -> Self {
        let bits = numbers
            .iter()
            .filter(|&&n| (1..=8).contains(&n))
            .fold(0u8, |acc, &n| acc | 1u8 << (n - 1));
        Self(bits)
    }

    /// Raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Raised dot numbers in ascending order.
    ///
    /// # Example
    /// ```
    /// use bt_core::dots::Dots;
    /// assert_eq!(Dots::from_numbers(&[5, 1, 4]).numbers(), vec![1, 4, 5]);
    /// ```
    #[must_use]
    pub fn numbers(self) -> Vec<u8> {
        (1..=8u8).filter(|n| self.0 & (1u8 << (n - 1)) != 0).collect()
    }

    /// Caractère du bloc Unicode Braille correspondant.
    ///
    /// Le bloc est mappé bit à bit sur l'offset 0x2800.
    #[must_use]
    #[inline]
    pub fn to_char(self) -> char {
        char::from_u32(BRAILLE_BASE + u32::from(self.0)).unwrap_or(' ')
    }
}

/// Grade-1 letter table, `a → [1]`, `b → [1, 2]`, ...
const LETTERS: [&[u8]; 26] = [
    &[1],
    &[1, 2],
    &[1, 4],
    &[1, 4, 5],
    &[1, 5],
    &[1, 2, 4],
    &[1, 2, 4, 5],
    &[1, 2, 5],
    &[2, 4],
    &[2, 4, 5],
    &[1, 3],
    &[1, 2, 3],
    &[1, 3, 4],
    &[1, 3, 4, 5],
    &[1, 3, 5],
    &[1, 2, 3, 4],
    &[1, 2, 3, 4, 5],
    &[1, 2, 3, 5],
    &[2, 3, 4],
    &[2, 3, 4, 5],
    &[1, 3, 6],
    &[1, 2, 3, 6],
    &[2, 4, 5, 6],
    &[1, 3, 4, 6],
    &[1, 3, 4, 5, 6],
    &[1, 3, 5, 6],
];

/// Indicateurs et ponctuation : `(symbol_id, points)`.
const MARKERS: &[(&str, &[u8])] = &[
    ("cap", &[6]),
    ("num", &[3, 4, 5, 6]),
    ("sp", &[]),
    ("period", &[2, 5, 6]),
    ("dec", &[4, 6]),
    ("qs", &[3]),
    ("comma", &[2]),
    ("qu", &[2, 3, 6]),
    ("par", &[2, 3, 5, 6]),
    ("ast", &[3, 5]),
    ("sla", &[3, 4]),
    ("ex", &[2, 3, 5]),
    ("qo", &[2, 3, 6]),
    ("qc", &[3, 5, 6]),
    ("col", &[2, 5]),
    ("sc", &[2, 3]),
];

/// Dot numbers of a grade-1 letter, case-insensitive.
///
/// # Example
/// ```
/// use bt_core::dots::letter_dots;
/// assert_eq!(letter_dots('a'), Some(&[1u8][..]));
/// assert_eq!(letter_dots('B'), Some(&[1u8, 2][..]));
/// assert_eq!(letter_dots('1'), None);
/// ```
#[must_use]
pub fn letter_dots(c: char) -> Option<&'static [u8]> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(LETTERS[(lower as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Motif de points par défaut d'un `symbol_id` émis par le translittérateur.
///
/// # Example
/// ```
/// use bt_core::dots::{symbol_dots, Dots};
/// assert_eq!(symbol_dots("cap"), Some(Dots::from_numbers(&[6])));
/// assert_eq!(symbol_dots("j"), Some(Dots::from_numbers(&[2, 4, 5])));
/// assert_eq!(symbol_dots("nope"), None);
/// ```
#[must_use]
pub fn symbol_dots(symbol_id: &str) -> Option<Dots> {
    let mut chars = symbol_id.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_lowercase()
    {
        return letter_dots(c).map(Dots::from_numbers);
    }
    MARKERS
        .iter()
        .find(|(id, _)| *id == symbol_id)
        .map(|(_, numbers)| Dots::from_numbers(numbers))
}

/// Tous les `symbol_id` connus : lettres puis indicateurs.
#[must_use]
pub fn known_symbols() -> Vec<String> {
    ('a'..='z')
        .map(String::from)
        .chain(MARKERS.iter().map(|(id, _)| (*id).to_string()))
        .collect()
}
