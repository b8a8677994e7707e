//! Drag-resize computation with aspect-ratio locking, minimum-size floors,
//! and preset ratio switching.
//!
//! Pure geometry: no rendering, no event loop, `no_std` compatible core.
//!
//! # Modules
//!
//! - [`ratio`] — Ratio descriptors (`1.77`, `"4:3"`, `"3/2"`), parsing, validation
//! - [`resize`](mod@resize) — Delta-based resize, free or ratio-locked, with a floor
//! - [`rescale`](mod@rescale) — Rescaling one axis when the active ratio changes
//! - [`session`] — Drag tracking and selection state for one box (`alloc`)
//! - `settings` — Deserializable session configuration (`serde`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod ratio;
pub mod rescale;
pub mod resize;
#[cfg(feature = "alloc")]
pub mod session;
#[cfg(feature = "serde")]
pub mod settings;

pub use error::{RatioFault, ResizeError};
pub use ratio::{
    AspectRatio, DEFAULT_PRESETS, RatioDescriptor, aspect_ratio_coefficient, sanitize_aspect_ratio,
};
pub use rescale::{KeepAxis, rescale};
pub use resize::{Axis, Delta, Dimensions, MinSize, Point, RatioLock, Resized, resize};
#[cfg(feature = "alloc")]
pub use session::{
    DragSession, PointerButton, PointerEvent, Preset, ResizeSession, default_presets,
};
