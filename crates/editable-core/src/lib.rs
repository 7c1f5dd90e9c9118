//! editable-core: value synchronization for contenteditable widgets,
//! without framework or browser dependencies.
//!
//! This crate provides:
//! - `Synchronizer<S>` - owns the bound value and reconciles it with an element
//! - `pipeline` - extraction, normalization, sanitization and paste math
//! - `EditableSurface` trait - the element abstraction platforms implement
//! - `MemorySurface` - in-memory element for native hosts and tests

pub mod config;
pub mod error;
pub mod events;
pub mod markup;
pub mod memory;
pub mod mode;
pub mod pipeline;
pub mod platform;
pub mod sync;
pub mod types;
pub mod value;

pub use config::{EditableConfig, ElementAttributes};
pub use error::SurfaceError;
pub use events::{EventOutcome, NotificationKind};
pub use memory::MemorySurface;
pub use mode::Mode;
pub use pipeline::{Interpolator, KeyFilter};
pub use platform::EditableSurface;
pub use smol_str::SmolStr;
pub use sync::{SuppressedWrite, SyncState, Synchronizer};
pub use types::{KEY_ENTER, KEY_ESCAPE, KeyInput, Selection};
pub use value::{BoundValue, SafeMarkup};
