/// Identifies one search invocation. Issued by `SearchLifecycle::begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading(SearchTicket),
}

/// `Idle -> Loading -> Idle`, with a generation counter so that only the
/// most recent invocation may complete the cycle.
#[derive(Debug)]
pub struct SearchLifecycle {
    generation: u64,
    phase: SearchPhase,
}

impl Default for SearchLifecycle {
    fn default() -> Self {
        Self {
            generation: 0,
            phase: SearchPhase::Idle,
        }
    }
}

impl SearchLifecycle {
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        let ticket = SearchTicket(self.generation);
        self.phase = SearchPhase::Loading(ticket);
        ticket
    }

    /// Returns to `Idle` if `ticket` is the latest invocation. Stale tickets
    /// are refused and leave the phase untouched.
    pub fn complete(&mut self, ticket: SearchTicket) -> bool {
        match self.phase {
            SearchPhase::Loading(current) if current == ticket => {
                self.phase = SearchPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading(_))
    }
}
