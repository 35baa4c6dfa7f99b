//! Property-based tests for price formatting, nickname editing and the
//! style board.

use proptest::prelude::*;

use flist_core::{format_thousands, ImageRef, InlineEditor, PriceInput, StyleBoard, MAX_PHOTOS};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Nickname drafts with at least one visible character, short enough to
/// stay under the limit with padding
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_.]{1,14}").expect("valid regex")
}

/// Board operations
#[derive(Debug, Clone)]
enum BoardOp {
    Add(usize),
    Remove(usize),
}

fn board_ops_strategy() -> impl Strategy<Value = Vec<BoardOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (1..5usize).prop_map(BoardOp::Add),
            1 => (0..10usize).prop_map(BoardOp::Remove),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Formatted prices read back as the same integer
    #[test]
    fn price_formatting_preserves_value(n in any::<u64>()) {
        let input = PriceInput::new(&n.to_string());
        let stored = input.to_price_string().unwrap();

        prop_assert!(stored.ends_with("won"));
        let digits: String = stored.trim_end_matches("won").chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits, n.to_string());
    }

    /// Separators sit every three digits from the right
    #[test]
    fn separators_group_by_three(digits in "[1-9][0-9]{0,30}") {
        let formatted = format_thousands(&digits);
        let groups: Vec<&str> = formatted.split(',').collect();

        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Non-digit noise around a number is ignored
    #[test]
    fn price_input_ignores_noise(n in 1u32.., noise in "[a-z ,.]{0,5}") {
        let raw = format!("{noise}{n}{noise}");
        let input = PriceInput::new(&raw);
        prop_assert_eq!(input.digits(), n.to_string());
    }

    /// Committing a padded nickname always yields "@" + the bare draft
    #[test]
    fn nickname_commit_prefixes(
        previous in nickname_strategy(),
        draft in nickname_strategy(),
        pad in " {0,3}",
    ) {
        let mut editor = InlineEditor::nickname();
        editor.open(&format!("@{previous}"));
        editor.set_draft(&format!("{pad}{draft}{pad}"));

        let committed = editor.commit();
        prop_assert_eq!(committed, Some(format!("@{draft}")));
    }

    /// The board never holds more than six photos and the grid always has six cells
    #[test]
    fn board_capacity_holds(ops in board_ops_strategy()) {
        let mut board = StyleBoard::new();

        for op in ops {
            match op {
                BoardOp::Add(count) => {
                    let before = board.photos().len();
                    let added = board.add_photos((0..count).map(|i| ImageRef::from_png_bytes(&[i as u8])));
                    prop_assert_eq!(added, count.min(MAX_PHOTOS - before));
                }
                BoardOp::Remove(index) => {
                    if let Some(id) = board.photos().get(index).map(|p| p.id) {
                        prop_assert!(board.remove_photo(id));
                    }
                }
            }
            prop_assert!(board.photos().len() <= MAX_PHOTOS);
            prop_assert_eq!(board.grid_slots().len(), MAX_PHOTOS);
        }
    }
}
