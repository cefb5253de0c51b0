//! Scrollkit is a headless scroll-linked animation engine for single-page sites.
//!
//! The hosting shell (a native preview window, a WASM bridge, a test harness)
//! owns the real viewport and feeds input in; the crate owns the logic:
//!
//! - Load and validate a [`SiteContent`] store
//! - Build a [`Page`] for a viewport
//! - Feed wheel deltas and elapsed time, get a serializable [`PageFrame`] back
//!
//! Everything in a frame is a deterministic function of the content store and
//! the input fed so far.
#![forbid(unsafe_code)]

pub mod assets;
pub mod content;
pub mod core;
pub mod ease;
pub mod error;
pub mod mappers;
pub mod page;
pub mod scroll;
pub mod smooth;

pub use assets::{AssetState, AssetTracker};
pub use content::SiteContent;
pub use core::{ScrollRange, ScrollSample, TickIndex, Viewport};
pub use ease::Ease;
pub use error::{ScrollkitError, ScrollkitResult};
pub use page::{Page, PageFrame};
pub use scroll::{TriggerEvent, TriggerId, TriggerSet, TriggerSpec};
pub use smooth::{SmoothScroll, SmoothScrollOpts};
