//! Per-section animation mappers.
//!
//! Each mapper is a pure function (or a small state machine with explicitly
//! modeled smoothing) from the latest [`crate::ScrollSample`] or tick counter
//! to presentation parameters. No mapper touches the content store.

pub mod cube;
pub mod decode;
pub mod entrance;
pub mod parallax;
