//! Letter-level comparisons between candidate words. Words are compared
//! bytewise; vocabularies are expected to use a single-byte encoding.

/// Whether `a` and `b` carry the same letter at their respective offsets. An
/// offset beyond either word counts as disagreement, so candidates that
/// escaped length filtering are treated as unsupported rather than indexed
/// out of bounds.
pub(crate) fn letters_agree(a: &str, offset_a: usize, b: &str, offset_b: usize) -> bool {
    match (a.as_bytes().get(offset_a), b.as_bytes().get(offset_b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::letters_agree;

    #[test]
    fn agreement_is_positional() {
        assert!(letters_agree("CAT", 0, "CAR", 0));
        assert!(!letters_agree("CAT", 2, "CAR", 2));
        assert!(letters_agree("CAT", 2, "TIP", 0));
    }

    #[test]
    fn out_of_range_offsets_disagree() {
        assert!(!letters_agree("CAT", 3, "CAT", 0));
        assert!(!letters_agree("CAT", 0, "CAT", 9));
    }
}
