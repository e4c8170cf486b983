//! Move-notation normalization and answer matching for tactical exercises.
//! Moves are treated as opaque notation strings, not validated chess moves.

/// Annotation symbols that do not change which move was played:
/// check, mate, evaluation marks, promotion separator.
const ANNOTATION_SYMBOLS: &[char] = &['+', '#', '!', '?', '='];

/// Normalize a move string for comparison: trim, lowercase, then strip
/// annotation symbols and the capture marker `x`.
///
/// Total over all inputs; empty input normalizes to the empty string.
pub fn normalize_move(mv: &str) -> String {
    mv.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !ANNOTATION_SYMBOLS.contains(c) && *c != 'x')
        .collect()
}

/// Decide whether a user-submitted move matches the stored best move.
///
/// Exact match after normalization wins. Failing that, non-empty containment
/// in either direction is accepted, so `Nd7` matches `Nxd7` and a bare `e4`
/// matches `Nxe4`. Containment trades precision for recall; that looseness
/// is intentional for a training tool.
pub fn is_correct_move(user_move: &str, best_move: &str) -> bool {
    let user = normalize_move(user_move);
    let best = normalize_move(best_move);

    if user == best {
        return true;
    }

    if user.is_empty() || best.is_empty() {
        return false;
    }

    best.contains(&user) || user.contains(&best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_annotations() {
        assert_eq!(normalize_move("Qd8+"), "qd8");
        assert_eq!(normalize_move("Rxd8#"), "rd8");
        assert_eq!(normalize_move("e8=Q"), "e8q");
        assert_eq!(normalize_move("Nf3!?"), "nf3");
        assert_eq!(normalize_move("e4"), "e4");
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_move("  Bb5  "), "bb5");
        assert_eq!(normalize_move("KD6"), "kd6");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_move(""), "");
        assert_eq!(normalize_move("   "), "");
        assert_eq!(normalize_move("+#!?=x"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["Qd8+", "Rxd8#", "e4", "", "  Nxe5!!  ", "O-O-O"] {
            let once = normalize_move(s);
            assert_eq!(normalize_move(&once), once);
        }
    }

    #[test]
    fn test_exact_match_after_stripping() {
        assert!(is_correct_move("Qd8+", "Qd8"));
        assert!(is_correct_move("Rxd8", "Rd8"));
        assert!(is_correct_move("qd8", "Qd8+"));
    }

    #[test]
    fn test_containment_both_directions() {
        // user omits the piece letter the answer carries
        assert!(is_correct_move("e4", "Nxe4"));
        // user adds detail the answer omits
        assert!(is_correct_move("Nd7", "Nxd7"));
        assert!(is_correct_move("Rad1", "Rd1"));
    }

    #[test]
    fn test_unrelated_moves_rejected() {
        assert!(!is_correct_move("h3", "g5"));
        assert!(!is_correct_move("Qd8", "Rb8"));
    }

    #[test]
    fn test_empty_sides() {
        // empty user input only matches an answer that also normalizes empty
        assert!(!is_correct_move("", "Qd8+"));
        assert!(!is_correct_move("Qd8+", ""));
        assert!(is_correct_move("", ""));
        assert!(is_correct_move("  ", "x"));
    }
}
