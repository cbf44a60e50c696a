use shared::models::{TeamChoice, TeamLabels, VoteSummary};

/// What a press on one of the two team chips should trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickAction {
    Cast(TeamChoice),
    Clear,
}

/// Write-path phase. `Submitting` is entered before the network call starts
/// and left on every settle path, success or failure, so the control can
/// never wedge shut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// State machine behind the pick panel. Owns the displayed summary and the
/// single-flight write discipline; the component is just its I/O.
#[derive(Debug)]
pub struct PickController {
    summary: Option<VoteSummary>,
    phase: SubmitPhase,
    active: bool,
}

impl Default for PickController {
    fn default() -> Self {
        Self::new()
    }
}

impl PickController {
    pub fn new() -> Self {
        Self {
            summary: None,
            phase: SubmitPhase::Idle,
            active: true,
        }
    }

    pub fn summary(&self) -> Option<&VoteSummary> {
        self.summary.as_ref()
    }

    pub fn viewer_choice(&self) -> Option<TeamChoice> {
        self.summary.as_ref().and_then(|s| s.viewer_choice)
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Tears the controller down. Responses that arrive afterwards are
    /// dropped instead of mutating a dead view.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Applies a poll snapshot. Every response is complete, so the latest
    /// applied one simply wins; returns whether the display changed.
    pub fn apply_poll(&mut self, summary: VoteSummary) -> bool {
        if !self.active {
            return false;
        }
        if self.summary.as_ref() == Some(&summary) {
            return false;
        }
        self.summary = Some(summary);
        true
    }

    /// Maps a press on `choice` to the write it should trigger: pressing the
    /// current pick clears it, pressing the other side casts. None while a
    /// write is in flight — duplicate presses are ignored, not queued.
    pub fn gesture(&self, choice: TeamChoice) -> Option<PickAction> {
        if self.is_busy() || !self.active {
            return None;
        }
        if self.viewer_choice() == Some(choice) {
            Some(PickAction::Clear)
        } else {
            Some(PickAction::Cast(choice))
        }
    }

    /// Marks a write as started. Callers may only begin the network call
    /// when this returns true.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Settles the in-flight write. A successful response replaces the
    /// summary (it is the authoritative read-after-write snapshot); failure
    /// keeps the last displayed one. Either way the control is pressable
    /// again.
    pub fn settle(&mut self, outcome: Option<VoteSummary>) {
        self.phase = SubmitPhase::Idle;
        if !self.active {
            return;
        }
        if let Some(summary) = outcome {
            self.summary = Some(summary);
        }
    }

    // Display policy -----------------------------------------------------

    /// Relative bar widths. Neutral halves until the first summary arrives
    /// and for a zero-total summary; otherwise the literal percentages,
    /// floored so a 0% side keeps a visible sliver.
    pub fn bar(&self) -> (f64, f64) {
        match &self.summary {
            Some(s) if s.total > 0 => ((s.pct_a as f64).max(0.1), (s.pct_b as f64).max(0.1)),
            _ => (1.0, 1.0),
        }
    }

    pub fn percent_labels(&self) -> (String, String) {
        match &self.summary {
            Some(s) => (format!("{}%", s.pct_a), format!("{}%", s.pct_b)),
            None => ("--".into(), "--".into()),
        }
    }

    pub fn caption(&self, labels: &TeamLabels) -> String {
        match &self.summary {
            None => "Loading votes...".into(),
            Some(s) => {
                let noun = if s.total == 1 { "vote" } else { "votes" };
                let status = match s.viewer_choice {
                    Some(choice) => format!("Your pick: {}", labels.for_choice(choice)),
                    None => "You haven't voted".to_string(),
                };
                format!("{} {} • {}", s.total, noun, status)
            }
        }
    }
}
