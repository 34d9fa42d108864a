use crate::signal::Direction;

/// Identifier for one of the five gallery resources
///
/// A closed set: every direction maps to a slot and everything else maps to
/// `Default`, so selection is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSlot {
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl ResourceSlot {
    pub const ALL: [ResourceSlot; 5] = [
        ResourceSlot::Default,
        ResourceSlot::Up,
        ResourceSlot::Down,
        ResourceSlot::Left,
        ResourceSlot::Right,
    ];

    /// Selection policy for key presses
    ///
    /// A key with no recognized direction selects `Default` rather than
    /// leaving the selection unchanged. Later callers rely on this to reach
    /// the default resource again after browsing.
    pub fn for_key(direction: Option<Direction>) -> Self {
        match direction {
            Some(Direction::Up) => ResourceSlot::Up,
            Some(Direction::Down) => ResourceSlot::Down,
            Some(Direction::Left) => ResourceSlot::Left,
            Some(Direction::Right) => ResourceSlot::Right,
            None => ResourceSlot::Default,
        }
    }
}

/// Total mapping from resource slots to loaded resources
///
/// Construction requires all five entries, so `get` can never miss.
#[derive(Debug, Clone)]
pub struct Gallery<T> {
    default: T,
    up: T,
    down: T,
    left: T,
    right: T,
}

impl<T> Gallery<T> {
    pub fn new(default: T, up: T, down: T, left: T, right: T) -> Self {
        Self {
            default,
            up,
            down,
            left,
            right,
        }
    }

    /// Build a gallery by loading each slot in turn
    ///
    /// Stops at the first failing slot; earlier resources are dropped on the
    /// error path.
    pub fn try_from_fn<E>(
        mut load: impl FnMut(ResourceSlot) -> Result<T, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            default: load(ResourceSlot::Default)?,
            up: load(ResourceSlot::Up)?,
            down: load(ResourceSlot::Down)?,
            left: load(ResourceSlot::Left)?,
            right: load(ResourceSlot::Right)?,
        })
    }

    pub fn get(&self, slot: ResourceSlot) -> &T {
        match slot {
            ResourceSlot::Default => &self.default,
            ResourceSlot::Up => &self.up,
            ResourceSlot::Down => &self.down,
            ResourceSlot::Left => &self.left,
            ResourceSlot::Right => &self.right,
        }
    }
}
