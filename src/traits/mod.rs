pub mod events;
pub mod platform;
pub mod render_host;
pub mod sink;

pub use events::*;
pub use platform::*;
pub use render_host::*;
pub use sink::*;
