use std::cell::Cell;
use std::rc::Rc;

/// Monotonic ticket dispenser enforcing last-write-wins across overlapping
/// fetches for one view: a response may commit only while its ticket is
/// still the most recently issued one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchSeq {
    current: Rc<Cell<u64>>,
}

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; the returned ticket supersedes every earlier one.
    pub fn begin(&self) -> u64 {
        let ticket = self.current.get() + 1;
        self.current.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }
}
