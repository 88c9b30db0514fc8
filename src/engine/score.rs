//! Sentence scoring against the ranked term list.

/// Maximum length bonus, so a very long sentence cannot win on word count
/// alone.
pub const LENGTH_BONUS_CAP: f64 = 2.0;

/// Token count at which the length bonus reaches 1.0.
const LENGTH_BONUS_DIVISOR: f64 = 20.0;

/// Score a tokenized sentence: overlap with the top terms (repeated tokens
/// count each time) plus a capped length bonus. Pure and deterministic.
#[must_use]
pub fn score_sentence(tokens: &[String], top_terms: &[String]) -> f64 {
    let overlap = tokens.iter().filter(|t| top_terms.contains(t)).count();
    let bonus = (tokens.len() as f64 / LENGTH_BONUS_DIVISOR).min(LENGTH_BONUS_CAP);
    overlap as f64 + bonus
}
