/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// Autoplay timer fired
    Tick,

    /// Request to quit the application
    Quit,
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing numbers into the input box
    #[default]
    Editing,
    /// Stepping through a trace
    Playback,
    /// Typing a step number to jump to
    GoTo,
}

/// What the main panel of a tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Array view of the current step
    #[default]
    Steps,
    /// Full plain-text log of the trace
    Log,
}
