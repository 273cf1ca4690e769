use bt_core::cell::Output;
use bt_core::config::EngineOptions;
use rayon::prelude::*;

use crate::transliterate::transliterate_with;

/// Translittère des messages indépendants en parallèle.
///
/// Chaque message a son propre état de scan ; l'ordre des résultats suit
/// celui des entrées.
///
/// # Example
/// ```
/// use bt_core::config::EngineOptions;
/// use bt_translit::batch::transliterate_batch;
///
/// let results = transliterate_batch(&["1", "1"], &EngineOptions::default());
/// assert_eq!(results[0], results[1]);
/// assert_eq!(results[1].len(), 2);
/// ```
#[must_use]
pub fn transliterate_batch<S>(messages: &[S], options: &EngineOptions) -> Vec<Vec<Output>>
where
    S: AsRef<str> + Sync,
{
    log::debug!("Lot de {} messages", messages.len());
    messages
        .par_iter()
        .map(|message| transliterate_with(message.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliterate::transliterate;

    #[test]
    fn batch_matches_sequential() {
        let messages: Vec<String> = (0..200)
            .map(|i| format!("Line {i}: 3.5% of *stuff*!"))
            .collect();
        let parallel = transliterate_batch(&messages, &EngineOptions::default());
        let sequential: Vec<Vec<Output>> = messages.iter().map(|m| transliterate(m)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn numeric_mode_does_not_leak_between_messages() {
        let results = transliterate_batch(&["9", "9"], &EngineOptions::default());
        for result in &results {
            assert_eq!(result[0], Output::cell("num", "Number"));
        }
    }

    #[test]
    fn empty_batch() {
        let empty: [&str; 0] = [];
        assert!(transliterate_batch(&empty, &EngineOptions::default()).is_empty());
    }
}
