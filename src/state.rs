//! The linear screen state machine and its message sets.

/// Forward narrative messages, one per screen before the big question.
pub const MESSAGES: [&str; 4] = [
    "Hey you,",
    "I have a little question for you...",
    "It's been on my mind for a while now.",
    "You make my world so much brighter.",
];

/// Responses shown on the decline button, cycled by refusal count.
pub const DECLINE_MESSAGES: [&str; 8] = [
    "Wait, what? No?",
    "Are you sure about that?",
    "Maybe a misclick?",
    "Think again, my love!",
    "My heart is breaking...",
    "Is this a final answer?",
    "Okay, I'll stop asking...",
    "Just kidding, one more try?",
];

/// Accept button font sizes, one per escalation tier.
pub const ACCEPT_SIZES: [&str; 6] = [
    "1.125rem", "1.25rem", "1.5rem", "1.875rem", "2.25rem", "3rem",
];

pub const STEP_DECISION: u8 = 4;
pub const STEP_ACCEPTED: u8 = 5;

/// Session-scoped state of the whole experience. The step only ever moves
/// forward; the decline counter only ever grows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ProposalState {
    step: u8,
    declines: u32,
}

impl ProposalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn declines(&self) -> u32 {
        self.declines
    }

    /// Whether another forward message (or the question itself) is left.
    pub fn can_advance(&self) -> bool {
        self.step < STEP_DECISION
    }

    /// Move to the next screen. A no-op once the decision screen is reached;
    /// only `accept` leads out of it.
    pub fn advance(self) -> Self {
        if self.can_advance() {
            Self {
                step: self.step + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Accept the proposal. Valid only on the decision screen; the accepted
    /// step is terminal.
    pub fn accept(self) -> Self {
        if self.step == STEP_DECISION {
            Self {
                step: STEP_ACCEPTED,
                ..self
            }
        } else {
            self
        }
    }

    /// Record one more refusal attempt. Never touches the screen step.
    pub fn decline(self) -> Self {
        Self {
            declines: self.declines + 1,
            ..self
        }
    }

    pub fn accepted(&self) -> bool {
        self.step == STEP_ACCEPTED
    }

    /// Label for the decline button, cycling through the response set.
    pub fn decline_message(&self) -> &'static str {
        DECLINE_MESSAGES[self.declines as usize % DECLINE_MESSAGES.len()]
    }

    /// Font size for the accept button; grows with every refusal up to the cap.
    pub fn accept_size(&self) -> &'static str {
        ACCEPT_SIZES[self.declines.min(ACCEPT_SIZES.len() as u32 - 1) as usize]
    }
}
