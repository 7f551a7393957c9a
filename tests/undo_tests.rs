//! Undo history integration tests.
//!
//! These tests verify the bounded history: eviction of the oldest move,
//! recency order, and single-step reversal semantics.

use card_stacks::{Board, BoardConfig, BoardEvent, CardId, MoveError, MoveRecord, StackId};

fn board_with_capacity(capacity: usize) -> Board {
    Board::new(BoardConfig::default().with_max_undo_actions(capacity)).unwrap()
}

fn card(board: &Board, label: &str) -> CardId {
    board.card_by_label(label).unwrap()
}

/// Drag the top of `from` onto `to` and finish the drag.
fn move_top(board: &mut Board, from: u16, to: u16) -> MoveRecord {
    let top = board.stack(StackId(from)).unwrap().top().unwrap();
    board.try_begin_drag(top).unwrap();
    let record = board.try_drop(top, StackId(to)).unwrap();
    board.try_end_drag(top).unwrap();
    record
}

// =============================================================================
// Bound
// =============================================================================

/// Test that four moves with capacity three keep only the last three.
#[test]
fn test_eviction_keeps_last_three() {
    let mut board = board_with_capacity(3);

    let m1 = move_top(&mut board, 0, 1);
    let m2 = move_top(&mut board, 1, 2);
    let m3 = move_top(&mut board, 2, 0);
    let m4 = move_top(&mut board, 0, 2);

    let history: Vec<_> = board.undo_history().iter().copied().collect();
    assert_eq!(history, vec![m2, m3, m4]);
    assert!(!history.contains(&m1));
}

/// Test that undoing three times restores those moves and stops.
#[test]
fn test_evicted_move_not_recoverable() {
    let mut board = board_with_capacity(3);
    let c4 = card(&board, "Card_4");

    // Card_4: 0 -> 1 is the move that gets evicted.
    let m1 = move_top(&mut board, 0, 1);
    assert_eq!(m1.card, c4);
    move_top(&mut board, 2, 0);
    move_top(&mut board, 2, 0);
    move_top(&mut board, 2, 0);

    for _ in 0..3 {
        assert!(board.undo_last_move());
    }
    assert!(!board.undo_last_move());
    assert_eq!(board.try_undo(), Err(MoveError::NothingToUndo));

    // Stacks 0 and 2 are back to the deal, Card_4 stays on stack 1.
    assert_eq!(board.stack(StackId(2)).unwrap().len(), 4);
    assert_eq!(board.stack(StackId(0)).unwrap().len(), 3);
    assert_eq!(board.card(c4).unwrap().current_stack(), Some(StackId(1)));
    board.check_invariants().unwrap();
}

/// Test the log never exceeds capacity across many moves.
#[test]
fn test_long_sequence_stays_bounded() {
    for capacity in [1, 2, 5] {
        let mut board = board_with_capacity(capacity);
        let mut made = Vec::new();

        for i in 0..12u16 {
            let from = i % 3;
            let to = (i + 1) % 3;
            made.push(move_top(&mut board, from, to));
            assert!(board.undo_len() <= capacity);
        }

        let history: Vec<_> = board.undo_history().iter().copied().collect();
        assert_eq!(history, made[made.len() - capacity..].to_vec());
    }
}

/// Test that undo with an empty log changes nothing and emits nothing.
#[test]
fn test_undo_empty_log_is_noop() {
    let mut board = board_with_capacity(3);
    let before = board.snapshot();

    assert!(!board.undo_last_move());

    assert_eq!(board.snapshot(), before);
    assert!(board.pending_events().is_empty());
}

// =============================================================================
// Reversal
// =============================================================================

/// Test that move + undo restores the card's membership.
#[test]
fn test_single_step_reversal() {
    let mut board = board_with_capacity(3);
    let before = board.snapshot();

    move_top(&mut board, 1, 2);
    assert!(board.undo_last_move());

    assert_eq!(board.snapshot(), before);
}

/// Test undo order is newest first.
#[test]
fn test_undo_is_lifo() {
    let mut board = board_with_capacity(3);
    let m1 = move_top(&mut board, 0, 1);
    let m2 = move_top(&mut board, 1, 2);

    // m2 moved Card_4 again (it was the top of stack 1 after m1)
    assert_eq!(m1.card, m2.card);

    assert_eq!(board.try_undo(), Ok(m2));
    assert_eq!(board.card(m1.card).unwrap().current_stack(), Some(StackId(1)));
    assert_eq!(board.try_undo(), Ok(m1));
    assert_eq!(board.card(m1.card).unwrap().current_stack(), Some(StackId(0)));
}

/// Test that undo re-appends to the top rather than restoring depth.
#[test]
fn test_undo_reappends_to_top() {
    let mut board = board_with_capacity(3);
    let c4 = card(&board, "Card_4");
    let c12 = card(&board, "Card_12");

    move_top(&mut board, 0, 1);

    // Another card lands on stack 0 outside the history
    assert!(board.place_card_on_stack(c12, StackId(0)));

    assert!(board.undo_last_move());
    let stack0 = board.stack(StackId(0)).unwrap().cards().to_vec();
    assert_eq!(stack0.last(), Some(&c4));
    assert_eq!(stack0[stack0.len() - 2], c12);
    board.check_invariants().unwrap();
}

/// Test undo is refused while the recorded card is mid-drag, then allowed.
#[test]
fn test_undo_waits_for_drag_to_end() {
    let mut board = board_with_capacity(3);
    let record = move_top(&mut board, 0, 2);

    board.begin_drag(record.card);
    assert_eq!(board.try_undo(), Err(MoveError::CardDragging(record.card)));
    assert!(board.can_undo());

    board.end_drag(record.card);
    assert_eq!(board.try_undo(), Ok(record));
}

/// Test undo of one card while a different card is being dragged.
#[test]
fn test_undo_other_card_during_drag() {
    let mut board = board_with_capacity(3);
    let record = move_top(&mut board, 0, 1);
    let c12 = card(&board, "Card_12");

    board.begin_drag(c12);
    assert!(board.undo_last_move());
    assert!(board.drop_card(c12, StackId(1)));
    board.end_drag(c12);

    assert!(board.stack(StackId(0)).unwrap().is_top(record.card));
    assert!(board.stack(StackId(1)).unwrap().is_top(c12));
    assert_eq!(board.undo_len(), 1);
    board.check_invariants().unwrap();
}

/// Test the availability signal across a move/undo cycle.
#[test]
fn test_availability_signal_cycle() {
    let mut board = board_with_capacity(2);

    move_top(&mut board, 0, 1);
    move_top(&mut board, 0, 1);
    board.undo_last_move();
    board.undo_last_move();

    let toggles: Vec<_> = board
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            BoardEvent::UndoAvailabilityChanged(v) => Some(v),
            _ => None,
        })
        .collect();
    assert_eq!(toggles, vec![true, false]);
}
