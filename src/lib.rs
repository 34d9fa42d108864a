pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod frame_loop;
pub mod framebuffer;
pub mod gallery;
pub mod loader;
pub mod platform;
pub mod scene;
pub mod signal;
pub mod traits;
pub mod types;

// Re-export the handful of types almost every caller touches
pub use config::{AppConfig, MediaPaths, WindowConfig};
pub use context::DisplayContext;
pub use error::{DrawError, InitError, ResourceError};
pub use frame_loop::{run, LoopSummary};
pub use framebuffer::Framebuffer;
pub use gallery::{Gallery, ResourceSlot};
pub use scene::{SceneHost, ScenePreset};
pub use signal::{Direction, Signal};
pub use types::{Color, PixelImage, Rect};
