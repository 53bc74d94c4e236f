use crate::search::Utility;
use tablut_core::{GameState, Side};

/// Scores a position for `perspective` by the number of opponent pieces
/// captured so far.
///
/// Only material taken from the opponent counts: the searching side's own
/// losses, king placement, mobility and escape distance are all ignored.
pub fn evaluate<S: GameState>(state: &S, perspective: Side) -> Utility {
    let opponent = perspective.opponent();
    let captured = opponent
        .starting_pieces()
        .saturating_sub(state.piece_count(opponent));

    // Bounded by the opponent's starting force.
    captured as Utility
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablut_core::{Side, TreeBuilder};

    #[test]
    fn test_starting_position_is_zero() {
        let state = TreeBuilder::new().build();
        assert_eq!(evaluate(&state, Side::Attacker), 0);
        assert_eq!(evaluate(&state, Side::Defender), 0);
    }

    #[test]
    fn test_defender_counts_captured_attackers() {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        builder.pieces(root, Side::Attacker, 14);
        let state = builder.build();

        assert_eq!(evaluate(&state, Side::Defender), 2);
        // Attacker sees no captured defenders.
        assert_eq!(evaluate(&state, Side::Attacker), 0);
    }

    #[test]
    fn test_attacker_counts_captured_defenders() {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        builder
            .pieces(root, Side::Defender, 4)
            .pieces(root, Side::Attacker, 3);
        let state = builder.build();

        assert_eq!(evaluate(&state, Side::Attacker), 5);
        assert_eq!(evaluate(&state, Side::Defender), 13);
    }

    #[test]
    fn test_own_losses_are_ignored() {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        builder.pieces(root, Side::Defender, 1);
        let state = builder.build();

        assert_eq!(evaluate(&state, Side::Defender), 0);
    }

    #[test]
    fn test_equal_states_evaluate_equally() {
        let build = || {
            let mut builder = TreeBuilder::new();
            let root = builder.root();
            builder.pieces(root, Side::Attacker, 11);
            builder.build()
        };
        let (first, second) = (build(), build());

        assert_eq!(first, second);
        assert_eq!(
            evaluate(&first, Side::Defender),
            evaluate(&second, Side::Defender)
        );
    }

    #[test]
    fn test_surplus_pieces_clamp_to_zero() {
        let mut builder = TreeBuilder::new();
        let root = builder.root();
        builder.pieces(root, Side::Attacker, 20);
        let state = builder.build();

        assert_eq!(evaluate(&state, Side::Defender), 0);
    }
}
