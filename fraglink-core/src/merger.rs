//! De-overlapping merge of a chain into one digit string

use crate::token::Token;

/// Concatenate a chain into the single digit string it represents.
///
/// The first token contributes its full literal; every later token
/// contributes only the digits beyond its leading half, de-duplicating
/// the shared overlap at each junction. An empty sequence yields an
/// empty string.
///
/// Overlaps are assumed, not re-checked: calling this on a sequence the
/// validator rejected concatenates positionally and produces a garbage
/// merge. Gate on the verdict first.
pub fn merge_sequence(seq: &[Token]) -> String {
    let Some(first) = seq.first() else {
        return String::new();
    };
    let mut merged = first.as_str().to_string();
    for token in &seq[1..] {
        merged.push_str(&token.as_str()[token.half_width()..]);
    }
    merged
}
