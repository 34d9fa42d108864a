/// Directional key recognized by the gallery selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A platform event after classification
///
/// The frame loop never sees raw platform events; the event source classifies
/// each one into this closed set before handing it over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Request to terminate the frame loop (window close)
    Quit,
    /// A key went down; `None` means a key with no direction attached
    KeyPress(Option<Direction>),
    /// Anything else (mouse motion, focus changes, ...): no state change
    Other,
}
