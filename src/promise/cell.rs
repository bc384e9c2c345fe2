use super::engine::SettleFn;
use std::{mem, sync::Mutex};

enum CellState<O> {
    /// The engine has not handed over its settle callback yet.
    Detached,
    /// Settled before the callback arrived. The outcome is parked here until
    /// the engine attaches.
    Parked(O),
    /// Callback available, still pending.
    Attached(SettleFn<O>),
    /// Terminal. Exactly one outcome was forwarded to the engine.
    Settled,
}

/// Holds the pending/terminal settlement state and enforces that whichever
/// settlement is observed first (in call order) is the only one that ever
/// reaches the engine. Settlements that race the engine's own construction
/// are parked rather than lost.
pub struct SettleCell<O> {
    state: Mutex<CellState<O>>,
}

impl<O> SettleCell<O> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CellState::Detached),
        }
    }

    /// Record an outcome. The first write wins; everything after it is
    /// discarded, whether it arrives before or after the engine attaches.
    pub fn settle(&self, outcome: O) {
        let forward = {
            let mut state = self.state.lock().unwrap();
            match mem::replace(&mut *state, CellState::Settled) {
                CellState::Detached => {
                    *state = CellState::Parked(outcome);
                    None
                }
                CellState::Attached(settle) => Some((settle, outcome)),
                prev @ (CellState::Parked(_) | CellState::Settled) => {
                    *state = prev;
                    None
                }
            }
        };

        // The engine callback runs outside the lock. It may re-enter
        // (an engine could settle synchronously into subscriber wakeups).
        if let Some((settle, outcome)) = forward {
            settle(outcome);
        }
    }

    /// Called by the engine's producer with the callback that settles the
    /// constructed awaitable. A parked outcome is forwarded immediately;
    /// otherwise later settle calls forward directly. The engine contract
    /// says this happens exactly once; a second attach forwards nothing.
    pub fn attach(&self, settle: SettleFn<O>) {
        let forward = {
            let mut state = self.state.lock().unwrap();
            match mem::replace(&mut *state, CellState::Settled) {
                CellState::Detached => {
                    *state = CellState::Attached(settle);
                    None
                }
                CellState::Parked(outcome) => Some((settle, outcome)),
                prev @ (CellState::Attached(_) | CellState::Settled) => {
                    *state = prev;
                    None
                }
            }
        };

        if let Some((settle, outcome)) = forward {
            settle(outcome);
        }
    }

    /// Whether an outcome has been recorded, parked or forwarded.
    pub fn is_settled(&self) -> bool {
        matches!(
            *self.state.lock().unwrap(),
            CellState::Parked(_) | CellState::Settled
        )
    }
}
