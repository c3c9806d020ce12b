use mazer_core::Position;

/// One step of the search's exploration order, for replay by a renderer.
///
/// Events are recorded in the exact order the engine performs them, so a
/// renderer can animate the exploration without re-running any search
/// logic. The deterministic tie-break rule makes traces reproducible:
/// identical inputs yield identical event sequences.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    /// A node was popped from the frontier for expansion (the final pop
    /// of the target included).
    Expanded(Position),
    /// A node was pushed onto the frontier.
    Pushed(Position),
}

impl TraceEvent {
    /// The position the event refers to.
    #[inline]
    pub fn position(self) -> Position {
        match self {
            TraceEvent::Expanded(p) | TraceEvent::Pushed(p) => p,
        }
    }
}
