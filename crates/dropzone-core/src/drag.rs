//! Drop-zone highlight state machine.
//!
//! Two states, [`HighlightState::Idle`] and
//! [`HighlightState::Highlighted`]. Every transition depends only on the
//! incoming event, never on the current state, so any interleaving of
//! drag events leaves the zone in the state named by the last event.

use std::fmt;

/// The four drag lifecycle events the widget listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// `dragenter`
    Enter,
    /// `dragover`
    Over,
    /// `dragleave`
    Leave,
    /// `drop`
    Drop,
}

impl DragEventKind {
    /// Every drag lifecycle event, in listener registration order.
    pub const ALL: [Self; 4] = [Self::Enter, Self::Over, Self::Leave, Self::Drop];

    /// DOM event type name.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "dragenter",
            Self::Over => "dragover",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }

    /// Look up a kind by DOM event type name.
    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.event_name() == name)
    }

    /// Whether this event carries a file payload to hand to intake.
    #[must_use]
    pub const fn delivers_files(self) -> bool {
        matches!(self, Self::Drop)
    }
}

impl fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Visual state of the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    /// No drag in progress over the zone.
    #[default]
    Idle,
    /// A drag is hovering over the zone.
    Highlighted,
}

impl HighlightState {
    /// CSS class applied to the drop zone while highlighted.
    pub const CLASS: &'static str = "highlight";

    /// State after `event` reaches the drop zone.
    #[must_use]
    pub const fn after(self, event: DragEventKind) -> Self {
        match event {
            DragEventKind::Enter | DragEventKind::Over => Self::Highlighted,
            DragEventKind::Leave | DragEventKind::Drop => Self::Idle,
        }
    }

    /// Returns `true` in the [`Highlighted`](Self::Highlighted) state.
    #[must_use]
    pub const fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted)
    }
}
