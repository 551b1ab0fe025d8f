//! Button state machine.
//!
//! `transition` is a pure function from the current state and an input to
//! the next state plus the side effects the control must apply. The control
//! applies them to its own parts; the host runtime reacts to
//! [`Effect::StartAnimation`] and [`Effect::StopAnimation`] by starting or
//! stopping its frame ticker.
//!
//! ```text
//! Completed --Click--> Clicked --BeginLoading--> Loading
//!     ^                   |                         |
//!     +-------Reset-------+----------Reset----------+
//! ```

use dlbutton_core::ButtonState;

/// Input to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonInput {
    /// User pressed the control.
    Click,
    /// A download was submitted; start showing progress.
    BeginLoading,
    /// Return to idle.
    Reset,
}

impl ButtonInput {
    /// Input that drives the machine towards `target`.
    ///
    /// `Clicked` cannot be reached by command, only by a click.
    #[must_use]
    pub const fn toward(target: ButtonState) -> Option<Self> {
        match target {
            ButtonState::Completed => Some(Self::Reset),
            ButtonState::Loading => Some(Self::BeginLoading),
            ButtonState::Clicked => None,
        }
    }
}

/// Which configured label is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Default,
    Loading,
}

/// Side effect of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Relabel(Label),
    /// Measure the current label and place the circle beside it.
    MeasureLabel,
    StartAnimation,
    StopAnimation,
    Invalidate,
}

/// Result of feeding one input to the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: ButtonState,
    pub to: ButtonState,
    pub effects: Vec<Effect>,
}

impl Transition {
    const fn unchanged(state: ButtonState) -> Self {
        Self {
            from: state,
            to: state,
            effects: Vec::new(),
        }
    }

    /// Whether the state changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    #[must_use]
    pub fn has(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }
}

/// Compute the next state and its effects.
///
/// Inputs that make no sense in the current state leave it unchanged and
/// produce no effects.
#[must_use]
pub fn transition(state: ButtonState, input: ButtonInput) -> Transition {
    use ButtonInput::{BeginLoading, Click, Reset};
    use ButtonState::{Clicked, Completed, Loading};

    let (to, effects) = match (state, input) {
        (Completed, Click) => (Clicked, vec![Effect::Invalidate]),
        (Clicked, BeginLoading) => (
            Loading,
            vec![
                Effect::Relabel(Label::Loading),
                Effect::MeasureLabel,
                Effect::StartAnimation,
                Effect::Invalidate,
            ],
        ),
        (Loading, Reset) => (
            Completed,
            vec![
                Effect::StopAnimation,
                Effect::Relabel(Label::Default),
                Effect::Invalidate,
            ],
        ),
        (Clicked, Reset) => (
            Completed,
            vec![Effect::Relabel(Label::Default), Effect::Invalidate],
        ),
        _ => return Transition::unchanged(state),
    };

    Transition {
        from: state,
        to,
        effects,
    }
}
