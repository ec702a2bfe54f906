// Round bookkeeping for the deferred end-of-round popup. Browser-free so the
// cancel/stale rules can be tested natively; `H` is whatever handle the caller
// uses to cancel a timer.

#[derive(Debug)]
pub(crate) struct PopupTimer<H> {
    round: u64,
    pending: Option<H>,
}

impl<H> PopupTimer<H> {
    pub(crate) fn new() -> Self {
        Self {
            round: 1,
            pending: None,
        }
    }

    pub(crate) fn round(&self) -> u64 {
        self.round
    }

    /// Moves to the next round. Returns the timer still pending from the old
    /// round, which the caller must cancel.
    pub(crate) fn next_round(&mut self) -> Option<H> {
        self.round += 1;
        self.pending.take()
    }

    /// Records the timer for the current round. Returns a previous one, if any,
    /// for the caller to cancel.
    pub(crate) fn arm(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// A timer scheduled during `round` may only show the popup if no new
    /// round has started since.
    pub(crate) fn should_fire(&self, round: u64) -> bool {
        round == self.round
    }
}
