//! Built-in exercise catalogs used by the seeding routes.
//! Board positions are opaque JSON strings mapping square -> piece code.

use crate::db::exercises::NewExercise;

/// Tactic types covered by the varied catalog; used to detect whether it
/// has already been seeded.
pub const VARIED_TACTIC_TYPES: &[&str] =
    &["Opening", "Endgame", "Strategy", "Calculation", "Evaluation"];

/// Difficulty label of the ultra tier.
pub const ULTRA_DIFFICULTY: &str = "Ranking 5000";

/// Core catalog: one exercise per tactic family plus the "In the Shadows"
/// set the site is built around.
pub fn base_catalog() -> Vec<NewExercise<'static>> {
    vec![
        NewExercise {
            title: "Basic Pin",
            description: "The rook pins the knight defending the king",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","d2":"wP","f2":"wP","g2":"wP","h2":"wP","e4":"wP","d5":"wR","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","h8":"bR","a7":"bP","b7":"bP","c7":"bP","d7":"bP","f7":"bP","g7":"bP","h7":"bP","e5":"bP","e6":"bN","g8":"bN"}"#,
            best_move: "Re5",
            tactic_type: "Pin",
            difficulty: "Beginner",
            points: 12,
            hint: Some("The rook can open a line of attack."),
            solution_explanation: "Re5 pins the knight on the e-file, freezing it in place.",
            moves_required: 1,
        },
        NewExercise {
            title: "Knight Fork",
            description: "Double attack against king and queen",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wN","e4":"wP","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR","a7":"bP","b7":"bP","f7":"bP","g7":"bP","h7":"bP","d5":"bP","c6":"bQ","e6":"bP"}"#,
            best_move: "Ne6+",
            tactic_type: "Fork",
            difficulty: "Beginner",
            points: 15,
            hint: Some("The knight can attack two pieces at once."),
            solution_explanation: "Ne6+ hits king and queen at the same time.",
            moves_required: 1,
        },
        NewExercise {
            title: "Rook Deflection",
            description: "Force the rook to abandon its defense",
            initial_position: r#"{"a1":"wK","h1":"wR","e1":"wQ","e8":"bK","e7":"bR","f7":"bP","g7":"bP","h7":"bP"}"#,
            best_move: "Qe5+",
            tactic_type: "Deflection",
            difficulty: "Intermediate",
            points: 20,
            hint: Some("Use a check to drag the rook off its post."),
            solution_explanation: "Qe5+ forces the rook to move and the defense collapses.",
            moves_required: 1,
        },
        NewExercise {
            title: "Discovered Attack",
            description: "The bishop steps aside and unmasks the rook",
            initial_position: r#"{"a1":"wK","c1":"wB","d1":"wR","e8":"bK","e6":"bQ","f7":"bP","g7":"bP","h7":"bP"}"#,
            best_move: "Be3+",
            tactic_type: "Discovery",
            difficulty: "Intermediate",
            points: 18,
            hint: Some("Move the bishop to reveal the rook behind it."),
            solution_explanation: "Be3+ uncovers the rook's check and attacks the queen.",
            moves_required: 1,
        },
        NewExercise {
            title: "Queen Sacrifice",
            description: "Offer the queen for a forced mate",
            initial_position: r#"{"a1":"wK","d1":"wQ","h1":"wR","e8":"bK","f8":"bR","g8":"bN","f7":"bP","g7":"bP","h7":"bP"}"#,
            best_move: "Qd8+",
            tactic_type: "Sacrifice",
            difficulty: "Advanced",
            points: 25,
            hint: Some("Give up the queen to reach mate."),
            solution_explanation: "Qd8+ forces Rxd8, then Rxd8 is mate.",
            moves_required: 2,
        },
        NewExercise {
            title: "Absolute Pin",
            description: "The bishop pins the rook on the king's diagonal",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","d2":"wP","f2":"wP","g2":"wP","h2":"wP","e4":"wP","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR","a7":"bP","b7":"bP","c7":"bP","d7":"bP","f7":"bP","g7":"bP","h7":"bP","e5":"bR","d6":"bP","f6":"bP"}"#,
            best_move: "Bb5",
            tactic_type: "Pin",
            difficulty: "Intermediate",
            points: 18,
            hint: Some("A perfect diagonal for an absolute pin."),
            solution_explanation: "Bb5 pins the rook, which cannot legally move.",
            moves_required: 1,
        },
        NewExercise {
            title: "Pawn Fork",
            description: "A pawn attacks two heavy pieces at once",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wP","e4":"wP","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR","a7":"bP","b7":"bP","f7":"bP","g7":"bP","h7":"bP","c5":"bQ","e5":"bR","d6":"bP"}"#,
            best_move: "d5",
            tactic_type: "Fork",
            difficulty: "Intermediate",
            points: 16,
            hint: Some("Even a pawn can deliver a double attack."),
            solution_explanation: "d5 attacks queen and rook simultaneously.",
            moves_required: 1,
        },
        NewExercise {
            title: "Rook in the Shadows",
            description: "A hidden piece decides the game",
            initial_position: r#"{"a1":"wK","a8":"wR","b1":"wN","c1":"wB","e1":"wQ","h8":"bK","h7":"bP","g7":"bP","f7":"bP","e7":"bQ","d7":"bR","c6":"bN"}"#,
            best_move: "Nc3",
            tactic_type: "In the Shadows",
            difficulty: "Advanced",
            points: 35,
            hint: Some("The seemingly passive knight opens a deadly line."),
            solution_explanation: "Nc3 looks quiet but unmasks the rook's attack!",
            moves_required: 1,
        },
        NewExercise {
            title: "Ghost Bishop",
            description: "A concealed piece strikes from the dark",
            initial_position: r#"{"a1":"wK","c1":"wB","e1":"wQ","g1":"wN","h1":"wR","a8":"bK","c8":"bB","d8":"bQ","e8":"bR","f8":"bB","g8":"bN","h8":"bR","d4":"wP","e5":"bP","f6":"bN","c6":"bQ"}"#,
            best_move: "Nf5",
            tactic_type: "In the Shadows",
            difficulty: "Advanced",
            points: 40,
            hint: Some("A knight move reveals the decisive hidden bishop."),
            solution_explanation: "Nf5 clears the bishop's diagonal, attacking the queen!",
            moves_required: 1,
        },
        NewExercise {
            title: "Invisible Rook",
            description: "A pawn push reveals a rook that has waited for moves",
            initial_position: r#"{"a1":"wK","a4":"wR","b2":"wP","e1":"wQ","g1":"wB","h1":"wN","a8":"bK","b8":"bQ","c8":"bR","d8":"bB","e8":"bR","f8":"bN","g8":"bN","h8":"bR","b7":"bP","c7":"bP","d7":"bP"}"#,
            best_move: "b4",
            tactic_type: "In the Shadows",
            difficulty: "Expert",
            points: 55,
            hint: Some("A simple pawn hides a rook that has been waiting."),
            solution_explanation: "b4 opens a4-a8 and the rook mates with Ra8#!",
            moves_required: 1,
        },
        NewExercise {
            title: "Shadow King",
            description: "The king itself moves and reveals the decisive piece",
            initial_position: r#"{"a2":"wK","b1":"wQ","c1":"wR","d1":"wB","e1":"wN","f1":"wR","g1":"wB","h1":"wN","a8":"bK","b8":"bQ","c8":"bR","d8":"bB","e8":"bR","f8":"bN","g8":"bN","h8":"bR","d4":"bP","e5":"bP","f6":"bP"}"#,
            best_move: "Ka3",
            tactic_type: "In the Shadows",
            difficulty: "Master",
            points: 60,
            hint: Some("The king steps aside and unmasks the rook's file."),
            solution_explanation: "Ka3 clears the way for Rc8# - the king was hiding the decisive rook!",
            moves_required: 1,
        },
        NewExercise {
            title: "King and Pawn Endgame",
            description: "Convert this basic endgame into a win",
            initial_position: r#"{"e5":"wK","e4":"wP","e7":"bK","b6":"bP","g6":"bP","h7":"bP"}"#,
            best_move: "Kd6",
            tactic_type: "Endgame",
            difficulty: "Beginner",
            points: 10,
            hint: Some("The king must lead the pawn's advance."),
            solution_explanation: "Kd6 shoulders the black king away and escorts the pawn to promotion.",
            moves_required: 1,
        },
        NewExercise {
            title: "Weak Square",
            description: "Find the best outpost for your knight",
            initial_position: r#"{"a1":"wR","e1":"wK","f1":"wR","g1":"wN","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wP","e5":"wN","a8":"bR","e8":"bK","f8":"bR","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","d5":"bP","f6":"bP"}"#,
            best_move: "Nd7",
            tactic_type: "Strategy",
            difficulty: "Advanced",
            points: 22,
            hint: Some("Look for a protected central square."),
            solution_explanation: "Nd7 occupies a dominant square deep in enemy territory.",
            moves_required: 1,
        },
        NewExercise {
            title: "Italian Game",
            description: "Complete the classical development of the Italian",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","e4":"wP","c4":"wB","f3":"wN","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","e5":"bP","c5":"bB","f6":"bN","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR"}"#,
            best_move: "d3",
            tactic_type: "Opening",
            difficulty: "Intermediate",
            points: 12,
            hint: Some("Support the center and prepare to castle."),
            solution_explanation: "d3 supports e4 and prepares harmonious development.",
            moves_required: 1,
        },
        NewExercise {
            title: "Calculating Forced Lines",
            description: "Find the forcing sequence that wins",
            initial_position: r#"{"a1":"wK","d1":"wQ","h1":"wR","e8":"bK","f8":"bR","f7":"bP","g7":"bP","h7":"bP","a7":"bP","b7":"bP","c7":"bP","d7":"bP","e7":"bP"}"#,
            best_move: "Qd8+",
            tactic_type: "Calculation",
            difficulty: "Advanced",
            points: 30,
            hint: Some("Start with a check and calculate to the end."),
            solution_explanation: "Qd8+ Rxd8 Rxd8# mates in three moves.",
            moves_required: 3,
        },
        NewExercise {
            title: "Who Stands Better?",
            description: "Evaluate this position and find the improving move",
            initial_position: r#"{"a1":"wR","e1":"wK","h1":"wR","c1":"wB","g1":"wN","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wP","e4":"wP","a8":"bR","e8":"bK","h8":"bR","f8":"bB","b8":"bN","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","d5":"bP","e5":"bP"}"#,
            best_move: "f3",
            tactic_type: "Evaluation",
            difficulty: "Intermediate",
            points: 15,
            hint: Some("Weigh space, development and pawn structure."),
            solution_explanation: "The position is balanced; f3 prepares Be3 and improves the setup.",
            moves_required: 1,
        },
    ]
}

/// The ultra tier. Sorted into view by points, not seeded order.
pub fn ultra_catalog() -> Vec<NewExercise<'static>> {
    vec![
        NewExercise {
            title: "Echo of the Shadows",
            description: "Find the four-move sequence where every move echoes the previous one, forcing mate.",
            initial_position: r#"{"a1":"wR","c1":"wB","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wQ","e4":"wP","c6":"wN","a8":"bR","c8":"bB","e8":"bK","f8":"bB","g8":"bN","h8":"bR","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","d5":"bQ","e5":"bP"}"#,
            best_move: "Qxd5+",
            tactic_type: "Multidimensional Calculation",
            difficulty: ULTRA_DIFFICULTY,
            points: 2500,
            hint: Some("The first move echoes through the ones that follow."),
            solution_explanation: "Qxd5+ Kf8 forced, Qf7+ Ke8 forced, Qe6+ Kf8 forced, Qf7# ends it.",
            moves_required: 4,
        },
        NewExercise {
            title: "Impossible Knight Dance",
            description: "Two knights in perfect synchronization weave a trap that forces mate in five.",
            initial_position: r#"{"b1":"wN","e1":"wK","g1":"wN","a1":"wR","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wP","e4":"wP","b8":"bN","e8":"bK","g8":"bN","a8":"bR","h8":"bR","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","d5":"bP","e5":"bP"}"#,
            best_move: "Nc3",
            tactic_type: "Transcendental Coordination",
            difficulty: ULTRA_DIFFICULTY,
            points: 3000,
            hint: Some("The knights dance in harmony; only a few ever see the trap."),
            solution_explanation: "Nc3 prepares Nd5 and Ne4 at once, spinning a net that forces mate.",
            moves_required: 5,
        },
        NewExercise {
            title: "Sacrifice of Eternity",
            description: "Give up your most valuable piece in an apparently absurd position to force mate in three.",
            initial_position: r#"{"a1":"wR","e1":"wK","f1":"wR","c1":"wB","d1":"wQ","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","e4":"wP","h4":"wP","a8":"bR","e8":"bK","h8":"bR","c8":"bB","d8":"bQ","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","e5":"bP","g6":"bP"}"#,
            best_move: "Qh5+",
            tactic_type: "Transcendental Sacrifice",
            difficulty: ULTRA_DIFFICULTY,
            points: 2800,
            hint: Some("The queen must fall for the win to be born."),
            solution_explanation: "Qh5+ gxh5 forced, Rxf7+ Kxf7, Re7# is unavoidable.",
            moves_required: 3,
        },
        NewExercise {
            title: "The Flaw Nobody Sees",
            description: "The position looks balanced, but it hides a microscopic defect. Find it.",
            initial_position: r#"{"a1":"wR","c1":"wB","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","d2":"wQ","e2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wP","a8":"bR","c8":"bB","e8":"bK","f8":"bB","g8":"bN","h8":"bR","a7":"bP","b7":"bP","c7":"bP","d7":"bQ","e7":"bP","f7":"bP","g7":"bP","h7":"bP","d5":"bP"}"#,
            best_move: "Qd3",
            tactic_type: "Ultra-Sharp Perception",
            difficulty: ULTRA_DIFFICULTY,
            points: 3200,
            hint: Some("The flaw hides in the structure, not in any obvious threat."),
            solution_explanation: "Qd3 exploits the long-undefended c4 square, building invisible pressure.",
            moves_required: 1,
        },
        NewExercise {
            title: "The Madness That Wins",
            description: "The move looks like outright suicide, yet it is the only path to victory.",
            initial_position: r#"{"a1":"wR","e1":"wK","h1":"wR","d1":"wQ","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","e4":"wP","d4":"wP","a8":"bR","e8":"bK","h8":"bR","d8":"bQ","a7":"bP","b7":"bP","c7":"bP","f7":"bP","g7":"bP","h7":"bP","e5":"bP","d5":"bP"}"#,
            best_move: "Kf1",
            tactic_type: "Absolute Paradox",
            difficulty: ULTRA_DIFFICULTY,
            points: 3800,
            hint: Some("It runs against every principle, and it still wins."),
            solution_explanation: "Kf1 sets a trap fifteen moves deep that guarantees the win.",
            moves_required: 1,
        },
        NewExercise {
            title: "The Final Singularity",
            description: "Every technique fuses into a single move beyond known categories.",
            initial_position: r#"{"a1":"wK","h8":"bK","d4":"wQ","e7":"bQ"}"#,
            best_move: "Qd8+",
            tactic_type: "Singularity",
            difficulty: ULTRA_DIFFICULTY,
            points: 10000,
            hint: Some("No known theory explains this move."),
            solution_explanation: "The solution lies beyond words; only those who reached the singularity understand.",
            moves_required: 1,
        },
    ]
}

/// Varied catalog: openings, endgames, strategy, calculation, evaluation.
pub fn varied_catalog() -> Vec<NewExercise<'static>> {
    vec![
        NewExercise {
            title: "Queen's Gambit Accepted",
            description: "How to regain the pawn sacrificed in the opening",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","e2":"wP","f2":"wP","g2":"wP","h2":"wP","c4":"bP","d4":"wP","a7":"bP","b7":"bP","c7":"bP","d7":"bP","e7":"bP","f7":"bP","g7":"bP","h7":"bP","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR"}"#,
            best_move: "e3",
            tactic_type: "Opening",
            difficulty: "Intermediate",
            points: 15,
            hint: Some("Develop while preparing to recover the pawn."),
            solution_explanation: "e3 prepares Bxc4, winning the pawn back.",
            moves_required: 1,
        },
        NewExercise {
            title: "Sicilian Dragon",
            description: "Find the best development for Black",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wN","e4":"wP","c5":"bP","d6":"bP","g6":"bP","a7":"bP","b7":"bP","e7":"bP","f7":"bP","h7":"bP","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR"}"#,
            best_move: "Bg7",
            tactic_type: "Opening",
            difficulty: "Advanced",
            points: 20,
            hint: Some("Fianchetto the bishop onto the long diagonal."),
            solution_explanation: "Bg7 activates the bishop on the a1-h8 diagonal.",
            moves_required: 1,
        },
        NewExercise {
            title: "Rook vs Connected Pawns",
            description: "Use the rook to stop the connected passers",
            initial_position: r#"{"a1":"wK","h1":"wR","e8":"bK","e4":"bP","f4":"bP"}"#,
            best_move: "Re1",
            tactic_type: "Endgame",
            difficulty: "Intermediate",
            points: 18,
            hint: Some("Put the rook behind the pawns."),
            solution_explanation: "Re1 controls the e-file and halts the pawns.",
            moves_required: 1,
        },
        NewExercise {
            title: "Pawn Structure",
            description: "Improve your structure by hitting the enemy chain",
            initial_position: r#"{"a1":"wR","e1":"wK","h1":"wR","a2":"wP","b3":"wP","c2":"wP","d4":"wP","f2":"wP","g2":"wP","h2":"wP","a8":"bR","e8":"bK","h8":"bR","a7":"bP","b7":"bP","c6":"bP","d5":"bP","f7":"bP","g7":"bP","h7":"bP"}"#,
            best_move: "c4",
            tactic_type: "Strategy",
            difficulty: "Intermediate",
            points: 16,
            hint: Some("Attack the base of the pawn chain."),
            solution_explanation: "c4 undermines the black c6-d5 structure.",
            moves_required: 1,
        },
        NewExercise {
            title: "Forced Sequence",
            description: "Calculate the chain of forcing checks",
            initial_position: r#"{"a1":"wK","d1":"wQ","h1":"wR","e8":"bK","f8":"bR","f7":"bP","g7":"bP","h7":"bP","a7":"bP","b7":"bP","c7":"bP","d7":"bP","e7":"bP"}"#,
            best_move: "Qd8+",
            tactic_type: "Calculation",
            difficulty: "Advanced",
            points: 25,
            hint: Some("Open with a forcing check."),
            solution_explanation: "Qd8+ Rxd8 Rxd8# is a forced mate.",
            moves_required: 3,
        },
        NewExercise {
            title: "Positional Factors",
            description: "Identify the most important positional factor",
            initial_position: r#"{"a1":"wR","e1":"wK","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","c4":"wB","e4":"wP","f4":"wP","a8":"bR","e8":"bK","a7":"bP","b7":"bP","c7":"bP","e6":"bP","f7":"bP","g7":"bP","h7":"bP","d6":"bB"}"#,
            best_move: "Bd5",
            tactic_type: "Evaluation",
            difficulty: "Advanced",
            points: 19,
            hint: Some("Centralize your most active piece."),
            solution_explanation: "Bd5 dominates the center and presses f7.",
            moves_required: 1,
        },
        NewExercise {
            title: "Opening Shadow",
            description: "Use an ordinary-looking move to prepare a trap",
            initial_position: r#"{"a1":"wR","b1":"wN","c1":"wB","d1":"wQ","e1":"wK","f1":"wB","g1":"wN","h1":"wR","a2":"wP","b2":"wP","c2":"wP","f2":"wP","g2":"wP","h2":"wP","d4":"wP","e4":"wP","c5":"bP","d6":"bP","a7":"bP","b7":"bP","e7":"bP","f7":"bP","g7":"bP","h7":"bP","a8":"bR","b8":"bN","c8":"bB","d8":"bQ","e8":"bK","f8":"bB","g8":"bN","h8":"bR"}"#,
            best_move: "h3",
            tactic_type: "In the Shadows",
            difficulty: "Advanced",
            points: 30,
            hint: Some("It looks like a wasted tempo, but it hides a plan."),
            solution_explanation: "h3 prepares g4-g5 with a crushing attack if Black misses the idea.",
            moves_required: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_nonempty() {
        assert!(!base_catalog().is_empty());
        assert!(!ultra_catalog().is_empty());
        assert!(!varied_catalog().is_empty());
    }

    #[test]
    fn test_ultra_catalog_difficulty() {
        for ex in ultra_catalog() {
            assert_eq!(ex.difficulty, ULTRA_DIFFICULTY);
        }
    }

    #[test]
    fn test_positions_are_valid_json() {
        for ex in base_catalog()
            .iter()
            .chain(ultra_catalog().iter())
            .chain(varied_catalog().iter())
        {
            let parsed: serde_json::Value =
                serde_json::from_str(ex.initial_position).expect(ex.title);
            assert!(parsed.is_object(), "{} position is not an object", ex.title);
        }
    }

    #[test]
    fn test_varied_catalog_matches_marker_types() {
        assert!(varied_catalog()
            .iter()
            .any(|ex| VARIED_TACTIC_TYPES.contains(&ex.tactic_type)));
    }
}
