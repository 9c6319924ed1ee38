//! Two-state activation gate

/// State of an [`ActivationGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GateState {
    /// Validation is suppressed.
    #[default]
    Dormant,
    /// Validation fires on every check. Terminal.
    Active,
}

/// Opens once an observed length reaches `min_chars` and never closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationGate {
    min_chars: usize,
    state: GateState,
}

impl ActivationGate {
    /// Creates a dormant gate.
    #[must_use]
    pub const fn new(min_chars: usize) -> Self {
        Self {
            min_chars,
            state: GateState::Dormant,
        }
    }

    /// Feeds an input length to the gate and reports whether it is open.
    ///
    /// The first length at or above the threshold moves the gate to
    /// [`GateState::Active`]; later lengths are ignored.
    pub fn observe(&mut self, len: usize) -> bool {
        match self.state {
            GateState::Active => true,
            GateState::Dormant if len >= self.min_chars => {
                self.state = GateState::Active;
                tracing::debug!(min_chars = self.min_chars, len, "validation activated");
                true
            }
            GateState::Dormant => false,
        }
    }

    /// Returns true once the threshold has been reached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == GateState::Active
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}
