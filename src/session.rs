//! Interactive resize state: drag tracking, preset selection, fixed-axis choice.
//!
//! [`ResizeSession`] is the state a view keeps for one resizable box. The host
//! feeds it pointer events and selection changes and reads back
//! [`dimensions`](ResizeSession::dimensions) to apply to the visual box. All
//! arithmetic goes through [`resize`](crate::resize()) and [`rescale`].
//!
//! # Example
//!
//! ```
//! use ratiolock::{Dimensions, MinSize, Point, PointerButton, ResizeSession};
//!
//! let mut session =
//!     ResizeSession::new(Dimensions::new(300.0, 300.0), MinSize::default()).unwrap();
//!
//! assert!(session.pointer_down(Point::new(10.0, 10.0), PointerButton::Primary));
//! assert!(session.is_tracking());
//! session.pointer_move(Point::new(60.0, 30.0), false);
//! session.pointer_up();
//! assert!(!session.is_tracking());
//! assert_eq!(session.dimensions(), Dimensions::new(350.0, 320.0));
//!
//! // Switching to 4:3 while keeping width rescales the height.
//! session.select_ratio("4:3").unwrap();
//! assert_eq!(session.dimensions().width, 350.0);
//!
//! // Unknown ratios are rejected and nothing changes.
//! let before = session.dimensions();
//! assert!(session.select_ratio("abc").is_err());
//! assert_eq!(session.dimensions(), before);
//! ```

use alloc::borrow::Cow;
use alloc::vec::Vec;

use num_traits::Float;

use crate::error::{RatioFault, ResizeError};
use crate::ratio::{AspectRatio, DEFAULT_PRESETS, RatioDescriptor};
use crate::rescale::{KeepAxis, rescale};
use crate::resize::{Delta, Dimensions, MinSize, Point, RatioLock, Resized, resize};

/// A named ratio choice with its descriptor resolved up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    label: Cow<'static, str>,
    descriptor: RatioDescriptor,
    ratio: AspectRatio,
}

impl Preset {
    /// Resolve `descriptor` and pair it with a display label.
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        descriptor: RatioDescriptor,
    ) -> Result<Self, ResizeError> {
        let ratio = descriptor.resolve()?;
        Ok(Self {
            label: label.into(),
            descriptor,
            ratio,
        })
    }

    /// Text shown in the selection control.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The descriptor as configured, before resolution.
    pub fn descriptor(&self) -> RatioDescriptor {
        self.descriptor
    }

    /// Resolved width / height.
    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }
}

/// The built-in preset list (square, 16:9, 4:3, 3:2, 21:9).
pub fn default_presets() -> Vec<Preset> {
    DEFAULT_PRESETS
        .iter()
        .filter_map(|&(label, descriptor)| Preset::new(label, descriptor).ok())
        .collect()
}

/// Mouse or pen button that started a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button / primary contact.
    Primary,
    /// Wheel button.
    Middle,
    /// Right button / barrel button.
    Secondary,
    /// Any further button, by platform index.
    Other(u16),
}

/// Pointer input relevant to resizing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pressed on the resize handle.
    Down { at: Point, button: PointerButton },
    /// Moved anywhere while tracking. `lock` is the ratio-lock modifier state.
    Move { at: Point, lock: bool },
    /// Released anywhere while tracking.
    Up,
    /// Tracking lost (focus change, pointer capture lost).
    Cancel,
}

/// An in-progress drag. Lives from pointer-down until pointer-up.
///
/// Every move is measured from the origin against the size the box had
/// when the drag began, so the result depends only on where the pointer is
/// now, not on how many move events arrived before.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    origin: Point,
    origin_dimensions: Dimensions,
    pointer: Point,
}

impl DragSession {
    /// Start a drag at `origin` on a box of size `dimensions`.
    pub const fn start(origin: Point, dimensions: Dimensions) -> Self {
        Self {
            origin,
            origin_dimensions: dimensions,
            pointer: origin,
        }
    }

    /// Where the drag was anchored: the pointer-down position, or the
    /// pointer position at the last mid-drag ratio switch.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Latest pointer position seen by this drag.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Box size every move is measured against.
    pub fn origin_dimensions(&self) -> Dimensions {
        self.origin_dimensions
    }

    /// Pointer movement since the drag began.
    pub fn delta(&self, to: Point) -> Delta {
        self.origin.delta_to(to)
    }

    /// Resize for the pointer now at `to`.
    pub fn resize_to(&self, to: Point, lock: RatioLock, floor: MinSize) -> Resized {
        resize(self.origin_dimensions, self.delta(to), lock, floor)
    }

    /// Re-anchor at the latest pointer position on a box of `dimensions`.
    pub fn rebase(&self, dimensions: Dimensions) -> Self {
        Self::start(self.pointer, dimensions)
    }

    fn moved_to(self, at: Point) -> Self {
        Self { pointer: at, ..self }
    }
}

/// State of one resizable box.
#[derive(Clone, Debug)]
pub struct ResizeSession {
    dimensions: Dimensions,
    floor: MinSize,
    presets: Vec<Preset>,
    selected: usize,
    keep: KeepAxis,
    drag: Option<DragSession>,
}

impl Default for ResizeSession {
    fn default() -> Self {
        Self::unchecked(Dimensions::default(), MinSize::default())
    }
}

impl ResizeSession {
    /// New session with the default presets, the first one active, and
    /// width as the fixed axis.
    ///
    /// Both sizes must be finite and positive on each axis. `initial` may
    /// sit under `floor`; the first drag raises it.
    pub fn new(initial: Dimensions, floor: MinSize) -> Result<Self, ResizeError> {
        if !initial.is_valid() {
            return Err(ResizeError::InvalidSize);
        }
        if !floor.is_valid() {
            return Err(ResizeError::InvalidFloor);
        }
        Ok(Self::unchecked(initial, floor))
    }

    fn unchecked(initial: Dimensions, floor: MinSize) -> Self {
        Self {
            dimensions: initial,
            floor,
            presets: default_presets(),
            selected: 0,
            keep: KeepAxis::default(),
            drag: None,
        }
    }

    /// Replace the preset list and make its first entry active.
    ///
    /// An empty list falls back to [`default_presets`].
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        if presets.is_empty() {
            log::warn!("empty preset list, using defaults");
            self.presets = default_presets();
        } else {
            self.presets = presets;
        }
        self.selected = 0;
        self
    }

    /// Set the fixed axis used by ratio switches.
    pub fn with_keep_axis(mut self, keep: KeepAxis) -> Self {
        self.keep = keep;
        self
    }

    /// Current box size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Minimum size enforced on every drag.
    pub fn floor(&self) -> MinSize {
        self.floor
    }

    /// The selectable presets, in display order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// The preset new drags lock to and the next switch rescales from.
    pub fn active_preset(&self) -> &Preset {
        &self.presets[self.selected]
    }

    /// Position of [`active_preset`](Self::active_preset) in the list.
    pub fn active_index(&self) -> usize {
        self.selected
    }

    /// Ratio a locked drag holds.
    pub fn active_ratio(&self) -> AspectRatio {
        self.active_preset().ratio()
    }

    /// Fixed axis for ratio switches.
    pub fn keep_axis(&self) -> KeepAxis {
        self.keep
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Whether move/up listeners should currently be attached.
    pub fn is_tracking(&self) -> bool {
        self.drag.is_some()
    }

    // ── pointer input ──────────────────────────────────────────────────

    /// Begin a drag. Only the primary button starts one; returns whether
    /// tracking began.
    pub fn pointer_down(&mut self, at: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        if self.drag.is_some() {
            log::debug!("drag restarted before release");
        }
        log::debug!(
            "drag start at ({}, {}) on {}x{}",
            at.x,
            at.y,
            self.dimensions.width,
            self.dimensions.height
        );
        self.drag = Some(DragSession::start(at, self.dimensions));
        true
    }

    /// Apply a pointer move. Returns `None` when no drag is active.
    pub fn pointer_move(&mut self, at: Point, lock: bool) -> Option<Resized> {
        let drag = self.drag?;
        let lock = RatioLock::from_flag(lock, self.active_ratio());
        let resized = drag.resize_to(at, lock, self.floor);
        if resized.derived_clamped {
            log::debug!(
                "derived axis clamped to floor; ratio {} not held",
                self.active_ratio()
            );
        }
        log::trace!(
            "drag to ({}, {}) -> {}x{}",
            at.x,
            at.y,
            resized.dimensions.width,
            resized.dimensions.height
        );
        self.dimensions = resized.dimensions;
        self.drag = Some(drag.moved_to(at));
        Some(resized)
    }

    /// End the drag, if one is active.
    pub fn pointer_up(&mut self) -> Option<DragSession> {
        let ended = self.drag.take();
        if ended.is_some() {
            log::debug!(
                "drag end at {}x{}",
                self.dimensions.width,
                self.dimensions.height
            );
        }
        ended
    }

    /// Drop any drag state when the owning view goes away.
    pub fn teardown(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("view torn down mid-drag");
        }
    }

    /// Dispatch one pointer event. Returns the resize a move produced.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Resized> {
        match event {
            PointerEvent::Down { at, button } => {
                self.pointer_down(at, button);
                None
            }
            PointerEvent::Move { at, lock } => self.pointer_move(at, lock),
            PointerEvent::Up | PointerEvent::Cancel => {
                self.pointer_up();
                None
            }
        }
    }

    // ── selection input ────────────────────────────────────────────────

    /// Switch to the preset whose value or label is `value`.
    ///
    /// `value` is matched against each preset's descriptor (`"4:3"`, `"1.77"`),
    /// then against labels, then by resolved ratio, so `"8:6"` selects a 4:3
    /// preset and `"1:1"` selects one written as `1`. On error nothing
    /// changes.
    ///
    /// During a drag the next move is measured from the rescaled size and
    /// the pointer position at the time of the switch.
    pub fn select_ratio(&mut self, value: &str) -> Result<Dimensions, ResizeError> {
        match self.find_preset(value) {
            Ok(index) => Ok(self.switch_to(index)),
            Err(err) => {
                log::warn!("rejected ratio selection {value:?}: {err}");
                Err(err)
            }
        }
    }

    /// Switch to the preset at `index`. On error nothing changes.
    pub fn select_preset(&mut self, index: usize) -> Result<Dimensions, ResizeError> {
        if index >= self.presets.len() {
            log::warn!("rejected preset index {index} of {}", self.presets.len());
            return Err(RatioFault::UnknownPreset.into());
        }
        Ok(self.switch_to(index))
    }

    /// Set the fixed axis from its control value (`"width"` / `"height"`).
    pub fn set_keep_axis(&mut self, value: &str) -> Result<KeepAxis, ResizeError> {
        match value.parse::<KeepAxis>() {
            Ok(keep) => {
                self.keep = keep;
                Ok(keep)
            }
            Err(err) => {
                log::warn!("rejected dimension selection {value:?}: {err}");
                Err(err)
            }
        }
    }

    pub(crate) fn find_preset(&self, value: &str) -> Result<usize, ResizeError> {
        let by_label = self.presets.iter().position(|p| p.label() == value);
        let descriptor = match value.parse::<RatioDescriptor>() {
            Ok(descriptor) => descriptor,
            Err(err) => return by_label.ok_or(err),
        };
        if let Some(index) = self
            .presets
            .iter()
            .position(|p| p.descriptor() == descriptor)
            .or(by_label)
        {
            return Ok(index);
        }
        let ratio = descriptor.resolve()?;
        self.presets
            .iter()
            .position(|p| same_ratio(p.ratio(), ratio))
            .ok_or(RatioFault::UnknownPreset.into())
    }

    /// Make `index` active without touching the dimensions.
    #[cfg(feature = "serde")]
    pub(crate) fn activate(&mut self, index: usize) {
        self.selected = index;
    }

    fn switch_to(&mut self, index: usize) -> Dimensions {
        let old = self.active_ratio();
        let new = self.presets[index].ratio();
        let captured = self.dimensions;
        self.dimensions = rescale(captured, old, new, self.keep);
        self.selected = index;
        if let Some(drag) = self.drag {
            self.drag = Some(drag.rebase(self.dimensions));
        }
        log::debug!(
            "ratio {} -> {} keeping {}: {}x{} -> {}x{}",
            old,
            new,
            self.keep,
            captured.width,
            captured.height,
            self.dimensions.width,
            self.dimensions.height
        );
        self.dimensions
    }
}

/// Equal up to float noise from different spellings (`8:6` vs `4:3`).
fn same_ratio(a: AspectRatio, b: AspectRatio) -> bool {
    let (a, b) = (a.get(), b.get());
    Float::abs(a - b) <= 1e-9 * Float::max(a, b)
}
