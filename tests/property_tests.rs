//! Property tests for the engine's contract-level guarantees.
//!
//! These quantify over seeds, dimensions, and swap targets rather than
//! hand-picked boards: population is always match-free, rejected swaps are
//! invisible, resolved swaps always end quiescent, and collapse is stable.

use proptest::prelude::*;

use match3_engine::{
    EngineConfig, EngineRng, GameEngine, MatchGrid, Position, RejectReason, Symbol,
    SymbolGenerator, SwapOutcome,
};

proptest! {
    /// Every populated board is complete and match-free, whatever the
    /// seed, dimensions, or (three-plus) palette.
    #[test]
    fn populate_is_match_free(
        width in 3usize..10,
        height in 3usize..10,
        palette_size in 3u8..7,
        seed in any::<u64>(),
    ) {
        let config = EngineConfig::new(width, height, palette_size).with_seed(seed);
        let mut engine = GameEngine::new(config).unwrap();

        engine.populate().unwrap();

        prop_assert!(engine.board().is_complete());
        prop_assert!(engine.board().find_all_matches().is_empty());
    }

    /// A swap of adjacent cells either resolves to a quiescent, complete
    /// board or leaves the board byte-for-byte identical.
    #[test]
    fn try_swap_resolves_or_is_invisible(
        seed in any::<u64>(),
        column in 0usize..7,
        row in 0usize..8,
    ) {
        let config = EngineConfig::new(8, 8, 4).with_seed(seed);
        let mut engine = GameEngine::new(config).unwrap();
        engine.populate().unwrap();

        let before = engine.snapshot().unwrap();
        let a = Position::new(column, row);
        let b = Position::new(column + 1, row);

        match engine.try_swap(a, b).unwrap() {
            SwapOutcome::Rejected(reason) => {
                prop_assert_eq!(reason, RejectReason::NoMatch);
                prop_assert_eq!(engine.snapshot().unwrap(), before);
            }
            SwapOutcome::Resolved { snapshots } => {
                prop_assert!(!snapshots.is_empty());
                prop_assert_eq!(snapshots.last().unwrap(), &engine.snapshot().unwrap());
            }
        }

        prop_assert!(engine.board().is_complete());
        prop_assert!(engine.board().find_all_matches().is_empty());
    }

    /// Non-adjacent requests (here: distance 2 along a row) never touch
    /// the board.
    #[test]
    fn non_adjacent_swap_is_rejected(
        seed in any::<u64>(),
        column in 0usize..6,
        row in 0usize..8,
    ) {
        let config = EngineConfig::new(8, 8, 4).with_seed(seed);
        let mut engine = GameEngine::new(config).unwrap();
        engine.populate().unwrap();

        let before = engine.snapshot().unwrap();
        let outcome = engine
            .try_swap(Position::new(column, row), Position::new(column + 2, row))
            .unwrap();

        prop_assert_eq!(outcome, SwapOutcome::Rejected(RejectReason::NotAdjacent));
        prop_assert_eq!(engine.snapshot().unwrap(), before);
    }

    /// Collapse compacts a column without reordering its survivors and
    /// leaves all holes above them.
    #[test]
    fn collapse_is_stable(cells in prop::collection::vec(prop::option::of(0u8..5), 1..12)) {
        let height = cells.len();
        let mut grid = MatchGrid::new(1, height);
        for (row, cell) in cells.iter().enumerate() {
            if let Some(index) = cell {
                grid.set(Position::new(0, row), Symbol::new(*index)).unwrap();
            }
        }

        let survivors: Vec<u8> = cells.iter().flatten().copied().collect();
        let holes = grid.collapse_column(0).unwrap();

        // Survivors sit at the bottom in their original order.
        for (row, &index) in survivors.iter().enumerate() {
            prop_assert_eq!(
                grid.at(Position::new(0, row)).unwrap(),
                Some(Symbol::new(index))
            );
        }
        // Everything above them is a hole, and all holes were reported.
        for row in survivors.len()..height {
            prop_assert_eq!(grid.at(Position::new(0, row)).unwrap(), None);
        }
        prop_assert_eq!(holes.len(), height - survivors.len());
        prop_assert!(holes.iter().all(|position| position.row >= survivors.len()));
    }

    /// The generator never yields an excluded symbol, and draws stay inside
    /// the palette.
    #[test]
    fn generator_respects_exclusions(
        seed in any::<u64>(),
        palette_size in 3u8..7,
        excluded_a in 0u8..7,
        excluded_b in 0u8..7,
    ) {
        let mut generator = SymbolGenerator::new(palette_size, EngineRng::new(seed));
        let excluding = [Symbol::new(excluded_a), Symbol::new(excluded_b)];

        let symbol = generator.next(&excluding).unwrap();

        prop_assert!(symbol.raw() < palette_size);
        prop_assert!(!excluding.contains(&symbol));
    }
}
