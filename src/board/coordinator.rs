//! Board - the move coordinator.
//!
//! The board owns every card, every stack, the drag sessions and the undo
//! log. It is the only component that touches more than one stack in a
//! single operation and the only writer of the undo log.
//!
//! ## Drag lifecycle
//!
//! ```text
//!            BeginDrag (top card, no session)
//!   Idle ───────────────────────────────────▶ Dragging
//!    ▲                                          │
//!    │         Drop (valid target ≠ origin)     │
//!    │    ┌─────────────────────────────────────┤
//!    │    ▼                                     │
//!    │  Placed (session still open)             │ no drop / rejected drop
//!    │    │                                     │
//!    └────┴──────────── EndDrag ◀───────────────┘
//!             (returns the card to its origin if it was never placed)
//! ```
//!
//! `EndDrag` always fires, so it is the one place that guarantees every
//! drag finishes with the card back in some stack.

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{InvariantViolation, MoveError};
use super::event::{BoardEvent, InputEvent};
use crate::cards::{generate_deck, Card, CardArena};
use crate::core::config::{BoardConfig, ConfigError};
use crate::core::entity::{CardId, StackId};
use crate::core::rng::GameRng;
use crate::history::{MoveRecord, UndoLog};
use crate::stacks::Stack;

/// How a drag finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEnd {
    /// The card had been dropped on `stack`; only the session was closed.
    Committed { stack: StackId },

    /// No drop was accepted; the card went back to its origin.
    Returned { stack: StackId },
}

impl DragEnd {
    /// Stack the card rests in after the drag.
    #[must_use]
    pub fn stack(&self) -> StackId {
        match *self {
            DragEnd::Committed { stack } | DragEnd::Returned { stack } => stack,
        }
    }
}

/// Serializable view of board membership, for tests and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Each stack's cards, bottom to top.
    pub stacks: Vec<Vec<CardId>>,

    /// Open drag sessions as `(card, origin)`, sorted by card.
    pub dragging: Vec<(CardId, StackId)>,

    /// Undo records, oldest first.
    pub undo: Vec<MoveRecord>,
}

/// The move coordinator.
///
/// Every accepted operation queues `BoardEvent`s in an outbox that only
/// `drain_events` empties. Hosts drain it after each call (or each frame);
/// a host that only reads the `bool` results still has to drain, or the
/// queue keeps growing.
///
/// ## Example
///
/// ```
/// use card_stacks::board::{Board, BoardEvent};
/// use card_stacks::core::{BoardConfig, StackId};
///
/// let mut board = Board::new(BoardConfig::default()).unwrap();
/// let card = board.card_by_label("Card_4").unwrap();
///
/// assert!(board.begin_drag(card));
/// assert!(board.drop_card(card, StackId(1)));
/// assert!(board.end_drag(card));
/// assert_eq!(board.card(card).unwrap().current_stack(), Some(StackId(1)));
///
/// assert!(board.undo_last_move());
/// assert_eq!(board.card(card).unwrap().current_stack(), Some(StackId(0)));
///
/// let events = board.drain_events();
/// assert_eq!(events.last(), Some(&BoardEvent::UndoAvailabilityChanged(false)));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    cards: CardArena,
    stacks: Vec<Stack>,
    /// Origin stack of every card currently being dragged.
    drag_sources: FxHashMap<CardId, StackId>,
    undo: UndoLog,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Validate the config and deal a fresh board.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (cards, stacks) = deal(&config);
        let undo = UndoLog::new(config.max_undo_actions);

        info!(
            "board created: {} stacks x {} cards, undo depth {}, seed {:?}",
            config.stack_count, config.cards_per_stack, config.max_undo_actions, config.shuffle_seed
        );

        Ok(Self {
            config,
            cards,
            stacks,
            drag_sources: FxHashMap::default(),
            undo,
            events: Vec::new(),
        })
    }

    /// Re-deal from the stored config, dropping drags and history.
    pub fn reset(&mut self) {
        let had_undo = self.can_undo();

        let (cards, stacks) = deal(&self.config);
        self.cards = cards;
        self.stacks = stacks;
        self.drag_sources.clear();
        self.undo.clear();

        for stack in &self.stacks {
            self.events.push(BoardEvent::StackChanged(stack.id()));
        }
        if had_undo {
            self.events.push(BoardEvent::UndoAvailabilityChanged(false));
        }

        info!("board reset");
    }

    // === Input ===

    /// Dispatch one input event. Returns whether it was accepted.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::BeginDrag(card) => self.begin_drag(card),
            InputEvent::Drop(card, target) => self.drop_card(card, target),
            InputEvent::EndDrag(card) => self.end_drag(card),
        }
    }

    /// Start dragging `card`. Ignored unless it is the idle top of a stack.
    pub fn begin_drag(&mut self, card: CardId) -> bool {
        accepted("begin drag", self.try_begin_drag(card))
    }

    /// Drop a dragged card on `target`.
    ///
    /// Returns `false` when the drop is rejected; the card stays detached
    /// and the following `end_drag` snaps it back.
    pub fn drop_card(&mut self, card: CardId, target: StackId) -> bool {
        accepted("drop", self.try_drop(card, target))
    }

    /// Close the drag session of `card`. Returns `false` if there was none.
    pub fn end_drag(&mut self, card: CardId) -> bool {
        accepted("end drag", self.try_end_drag(card))
    }

    /// Undo the most recent committed move.
    pub fn undo_last_move(&mut self) -> bool {
        accepted("undo", self.try_undo())
    }

    /// Start dragging `card`, returning its origin stack.
    pub fn try_begin_drag(&mut self, card: CardId) -> Result<StackId, MoveError> {
        let origin = self
            .cards
            .get(card)
            .ok_or(MoveError::UnknownCard(card))?
            .current_stack();

        if self.drag_sources.contains_key(&card) {
            return Err(MoveError::AlreadyDragging(card));
        }
        let origin = origin.ok_or(MoveError::NotInStack(card))?;

        let stack = &mut self.stacks[origin.index()];
        if !stack.is_top(card) {
            return Err(MoveError::NotTopCard(card));
        }
        stack.remove_card(card, &mut self.cards);

        self.drag_sources.insert(card, origin);
        self.events.push(BoardEvent::StackChanged(origin));

        debug!("{} picked up from {}", card, origin);
        Ok(origin)
    }

    /// Drop a dragged card on `target`, returning the committed move.
    pub fn try_drop(&mut self, card: CardId, target: StackId) -> Result<MoveRecord, MoveError> {
        let detached = self
            .cards
            .get(card)
            .ok_or(MoveError::UnknownCard(card))?
            .is_detached();

        let origin = *self
            .drag_sources
            .get(&card)
            .ok_or(MoveError::NoDragSession(card))?;
        if !detached {
            return Err(MoveError::AlreadyPlaced(card));
        }
        if target.index() >= self.stacks.len() {
            return Err(MoveError::UnknownStack(target));
        }
        if target == origin {
            return Err(MoveError::SameStack(target));
        }

        self.stacks[target.index()].add_card(card, &mut self.cards);
        self.events.push(BoardEvent::CardRelocated {
            card,
            from: origin,
            to: target,
        });
        self.events.push(BoardEvent::StackChanged(target));

        let record = MoveRecord::new(card, origin, target);
        self.record_move(record);

        debug!("{} moved {} -> {}", card, origin, target);
        Ok(record)
    }

    /// Close the drag session of `card`.
    pub fn try_end_drag(&mut self, card: CardId) -> Result<DragEnd, MoveError> {
        let current = self
            .cards
            .get(card)
            .ok_or(MoveError::UnknownCard(card))?
            .current_stack();

        let origin = self
            .drag_sources
            .remove(&card)
            .ok_or(MoveError::NoDragSession(card))?;

        match current {
            Some(stack) => Ok(DragEnd::Committed { stack }),
            None => {
                self.stacks[origin.index()].add_card(card, &mut self.cards);
                self.events.push(BoardEvent::CardRelocated {
                    card,
                    from: origin,
                    to: origin,
                });
                self.events.push(BoardEvent::StackChanged(origin));

                debug!("{} returned to {}", card, origin);
                Ok(DragEnd::Returned { stack: origin })
            }
        }
    }

    /// Undo the most recent committed move, returning the reverted record.
    ///
    /// The card is re-appended as the top of its origin stack. Moves of
    /// other cards are left alone, and there is no redo.
    pub fn try_undo(&mut self) -> Result<MoveRecord, MoveError> {
        let record = *self.undo.peek_last().ok_or(MoveError::NothingToUndo)?;
        if self.drag_sources.contains_key(&record.card) {
            return Err(MoveError::CardDragging(record.card));
        }
        self.undo.pop_last();

        let current = self.cards.get(record.card).and_then(Card::current_stack);
        if let Some(stack) = current {
            self.stacks[stack.index()].remove_card(record.card, &mut self.cards);
            self.events.push(BoardEvent::StackChanged(stack));
        }

        self.stacks[record.from.index()].add_card(record.card, &mut self.cards);
        self.events.push(BoardEvent::CardRelocated {
            card: record.card,
            from: current.unwrap_or(record.to),
            to: record.from,
        });
        self.events.push(BoardEvent::StackChanged(record.from));

        if self.undo.is_empty() {
            self.events.push(BoardEvent::UndoAvailabilityChanged(false));
        }

        debug!("undid {} {} -> {}", record.card, record.from, record.to);
        Ok(record)
    }

    /// Move an idle card onto `target` without recording history.
    ///
    /// A card already in `target` is lifted to its top. Rejected for
    /// dragged cards and unknown ids.
    pub fn place_card_on_stack(&mut self, card: CardId, target: StackId) -> bool {
        let Some(current) = self.cards.get(card).map(Card::current_stack) else {
            return false;
        };
        if self.drag_sources.contains_key(&card) || target.index() >= self.stacks.len() {
            return false;
        }

        if let Some(stack) = current {
            self.stacks[stack.index()].remove_card(card, &mut self.cards);
            if stack != target {
                self.events.push(BoardEvent::StackChanged(stack));
            }
        }
        self.stacks[target.index()].add_card(card, &mut self.cards);
        self.events.push(BoardEvent::CardRelocated {
            card,
            from: current.unwrap_or(target),
            to: target,
        });
        self.events.push(BoardEvent::StackChanged(target));
        true
    }

    fn record_move(&mut self, record: MoveRecord) {
        let was_empty = self.undo.is_empty();
        if let Some(evicted) = self.undo.push(record) {
            debug!(
                "undo history full, dropped {} {} -> {}",
                evicted.card, evicted.from, evicted.to
            );
        }
        if was_empty {
            self.events.push(BoardEvent::UndoAvailabilityChanged(true));
        }
    }

    // === Output ===

    /// Take every queued output event, oldest first, leaving the outbox empty.
    ///
    /// Events from earlier calls stay queued until this is called.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queued output events without removing them.
    #[must_use]
    pub fn pending_events(&self) -> &[BoardEvent] {
        &self.events
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn stack(&self, id: StackId) -> Option<&Stack> {
        self.stacks.get(id.index())
    }

    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn cards(&self) -> &CardArena {
        &self.cards
    }

    /// Look a card up by label, e.g. `"Card_4"`.
    #[must_use]
    pub fn card_by_label(&self, label: &str) -> Option<CardId> {
        self.cards.find_by_label(label)
    }

    /// Origin stack of a card that is being dragged.
    #[must_use]
    pub fn drag_origin(&self, card: CardId) -> Option<StackId> {
        self.drag_sources.get(&card).copied()
    }

    #[must_use]
    pub fn is_dragging(&self, card: CardId) -> bool {
        self.drag_sources.contains_key(&card)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn undo_history(&self) -> &UndoLog {
        &self.undo
    }

    /// Capture stack membership, drag sessions and undo history.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut dragging: Vec<_> = self.drag_sources.iter().map(|(&c, &s)| (c, s)).collect();
        dragging.sort();

        BoardSnapshot {
            stacks: self.stacks.iter().map(|s| s.cards().to_vec()).collect(),
            dragging,
            undo: self.undo.iter().copied().collect(),
        }
    }

    /// Verify membership, top-interactivity and the undo bound.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen: FxHashMap<CardId, StackId> = FxHashMap::default();

        for stack in &self.stacks {
            let len = stack.len();
            for (pos, &card) in stack.cards().iter().enumerate() {
                if let Some(first) = seen.insert(card, stack.id()) {
                    return Err(InvariantViolation::DuplicateCard {
                        card,
                        first,
                        second: stack.id(),
                    });
                }

                let (recorded, interactable) = self
                    .cards
                    .get(card)
                    .map_or((None, false), |c| (c.current_stack(), c.is_interactable()));
                if recorded != Some(stack.id()) {
                    return Err(InvariantViolation::MembershipMismatch {
                        card,
                        listed: stack.id(),
                        recorded,
                    });
                }

                let is_top = pos + 1 == len;
                if is_top && !interactable {
                    return Err(InvariantViolation::TopNotInteractable {
                        card,
                        stack: stack.id(),
                    });
                }
                if !is_top && interactable {
                    return Err(InvariantViolation::BuriedInteractable {
                        card,
                        stack: stack.id(),
                    });
                }
            }
        }

        for card in self.cards.iter() {
            match card.current_stack() {
                Some(stack) if seen.get(&card.id()) != Some(&stack) => {
                    return Err(InvariantViolation::MembershipMismatch {
                        card: card.id(),
                        listed: stack,
                        recorded: Some(stack),
                    });
                }
                None if !self.drag_sources.contains_key(&card.id()) => {
                    return Err(InvariantViolation::OrphanCard(card.id()));
                }
                _ => {}
            }
        }

        if self.undo.len() > self.undo.capacity() {
            return Err(InvariantViolation::UndoOverflow {
                len: self.undo.len(),
                capacity: self.undo.capacity(),
            });
        }

        Ok(())
    }
}

/// Generate the deck and deal `cards_per_stack` cards onto each stack in turn.
fn deal(config: &BoardConfig) -> (CardArena, Vec<Stack>) {
    let mut cards = CardArena::from_cards(generate_deck(config.total_cards()));

    let mut order: Vec<CardId> = cards.iter().map(Card::id).collect();
    if let Some(seed) = config.shuffle_seed {
        GameRng::new(seed).shuffle(&mut order);
    }

    let mut stacks: Vec<Stack> = (0..config.stack_count)
        .map(|i| Stack::new(StackId::new(i as u16)))
        .collect();

    for (stack, chunk) in stacks.iter_mut().zip(order.chunks(config.cards_per_stack)) {
        for &card in chunk {
            stack.add_card(card, &mut cards);
        }
    }

    (cards, stacks)
}

fn accepted<T>(what: &str, result: Result<T, MoveError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            debug!("{} rejected: {}", what, err);
            false
        }
    }
}
