//! Submission lifecycle: Editing -> Submitting -> {Done | Editing}.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Where a form workflow currently is in its submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Inputs are live and the user is typing.
    #[default]
    Editing,
    /// A request is in flight; inputs are locked but keep their values.
    Submitting,
    /// The last submission succeeded; input is suppressed until the user
    /// explicitly asks to add another entry.
    Done,
}

/// Lifecycle state machine for one form workflow instance.
///
/// At most one submission may be in flight per instance:
/// [`Submission::begin`] refuses to re-enter `Submitting`, which is what
/// keeps rapid repeated submit clicks down to a single request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    phase: Phase,
}

impl Submission {
    /// A fresh workflow in the `Editing` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether inputs should be non-interactive right now.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Enter `Submitting` from `Editing`.
    ///
    /// Returns whether the transition happened; `false` means a submission
    /// is already in flight (or the workflow is in `Done`) and the caller
    /// must not issue another request.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Editing {
            self.phase = Phase::Submitting;
            true
        } else {
            false
        }
    }

    /// Record a successful outcome: `Submitting` -> `Done`.
    pub fn finish_success(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Done;
        }
    }

    /// Record a failed outcome: `Submitting` -> `Editing`, so the form stays
    /// editable with the entered values intact.
    pub fn finish_failure(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Editing;
        }
    }

    /// Explicit user request to add another entry: `Done` -> `Editing`.
    ///
    /// Never happens automatically.
    pub fn start_over(&mut self) {
        if self.phase == Phase::Done {
            self.phase = Phase::Editing;
        }
    }
}
