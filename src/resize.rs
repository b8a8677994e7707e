//! Drag-delta resize computation with optional aspect-ratio locking.
//!
//! Pure arithmetic: current dimensions plus a pointer delta in, new
//! dimensions out. No event handling, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use ratiolock::{AspectRatio, Axis, Delta, Dimensions, MinSize, RatioLock, resize};
//!
//! let ratio = AspectRatio::new(2.0).unwrap();
//! let out = resize(
//!     Dimensions::new(100.0, 100.0),
//!     Delta::new(40.0, 5.0),
//!     RatioLock::Locked(ratio),
//!     MinSize::default(),
//! );
//!
//! // Horizontal movement dominates, so width drives and height follows.
//! assert_eq!(out.dimensions, Dimensions::new(140.0, 70.0));
//! assert_eq!(out.driver, Some(Axis::Width));
//! assert!(out.ratio_preserved());
//! ```

use num_traits::Float;

use crate::ratio::AspectRatio;

/// Width × height of the resizable box, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Dimensions {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Current width / height.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Both sides finite and greater than zero.
    pub fn is_valid(&self) -> bool {
        positive(self.width) && positive(self.height)
    }
}

impl Default for Dimensions {
    /// 300×300, the box size a fresh view starts with.
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}

/// Minimum permitted size on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MinSize {
    /// Smallest allowed width.
    pub width: f64,
    /// Smallest allowed height.
    pub height: f64,
}

impl MinSize {
    /// Same floor on both axes.
    pub const fn uniform(floor: f64) -> Self {
        Self {
            width: floor,
            height: floor,
        }
    }

    /// Both floors finite and greater than zero.
    pub fn is_valid(&self) -> bool {
        positive(self.width) && positive(self.height)
    }

    /// Raise `width` to the floor. NaN becomes the floor.
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.max(self.width)
    }

    /// Raise `height` to the floor. NaN becomes the floor.
    pub fn clamp_height(&self, height: f64) -> f64 {
        height.max(self.height)
    }
}

impl Default for MinSize {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Pointer position in client coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal position, growing rightward.
    pub x: f64,
    /// Vertical position, growing downward.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Movement from `self` to `to`.
    pub fn delta_to(self, to: Point) -> Delta {
        Delta::new(to.x - self.x, to.y - self.y)
    }
}

/// Pointer movement since the drag started.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Delta {
    /// Horizontal movement; positive widens the box.
    pub dx: f64,
    /// Vertical movement; positive heightens the box.
    pub dy: f64,
}

impl Delta {
    /// Create a delta.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A box axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

/// Whether a resize must hold an aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum RatioLock {
    /// Axes move independently.
    #[default]
    Free,
    /// The non-dominant axis is derived from the dominant one.
    Locked(AspectRatio),
}

impl RatioLock {
    /// Build from a modifier-key state (e.g. Shift held) and the active ratio.
    pub fn from_flag(locked: bool, ratio: AspectRatio) -> Self {
        if locked {
            Self::Locked(ratio)
        } else {
            Self::Free
        }
    }
}

/// Result of [`resize`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resized {
    /// New box size. Never below the floor on either axis.
    pub dimensions: Dimensions,
    /// The axis that drove a locked resize. `None` when unlocked.
    pub driver: Option<Axis>,
    /// The derived axis fell under its floor and was raised, so the
    /// locked ratio no longer holds exactly.
    pub derived_clamped: bool,
}

impl Resized {
    /// Whether the output honors the locked ratio (always true when unlocked).
    pub fn ratio_preserved(&self) -> bool {
        !self.derived_clamped
    }
}

/// Apply a drag delta to `current`.
///
/// Unlocked, each axis moves by its own delta and is floored independently.
/// Locked, the axis with the larger absolute delta drives (height on a tie)
/// and the other axis is derived from it through the ratio.
///
/// A locked resize can only break the ratio when the derived axis would land
/// under its floor. It is clamped up and [`Resized::derived_clamped`] is set.
pub fn resize(current: Dimensions, delta: Delta, lock: RatioLock, floor: MinSize) -> Resized {
    let width = floor.clamp_width(current.width + delta.dx);
    let height = floor.clamp_height(current.height + delta.dy);

    let ratio = match lock {
        RatioLock::Free => {
            return Resized {
                dimensions: Dimensions::new(width, height),
                driver: None,
                derived_clamped: false,
            };
        }
        RatioLock::Locked(ratio) => ratio,
    };

    if Float::abs(delta.dx) > Float::abs(delta.dy) {
        let derived = ratio.height_for(width);
        let height = floor.clamp_height(derived);
        Resized {
            dimensions: Dimensions::new(width, height),
            driver: Some(Axis::Width),
            derived_clamped: height > derived,
        }
    } else {
        let derived = ratio.width_for(height);
        let width = floor.clamp_width(derived);
        Resized {
            dimensions: Dimensions::new(width, height),
            driver: Some(Axis::Height),
            derived_clamped: width > derived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(r: f64) -> AspectRatio {
        AspectRatio::new(r).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const SQUARE_100: Dimensions = Dimensions::new(100.0, 100.0);

    // ── unlocked ────────────────────────────────────────────────────────

    #[test]
    fn free_axes_move_independently() {
        let out = resize(
            SQUARE_100,
            Delta::new(25.0, -10.0),
            RatioLock::Free,
            MinSize::default(),
        );
        assert_eq!(out.dimensions, Dimensions::new(125.0, 90.0));
        assert_eq!(out.driver, None);
        assert!(out.ratio_preserved());
    }

    #[test]
    fn free_floors_each_axis() {
        let out = resize(
            SQUARE_100,
            Delta::new(-500.0, -90.0),
            RatioLock::Free,
            MinSize::default(),
        );
        assert_eq!(out.dimensions, Dimensions::new(30.0, 30.0));
    }

    #[test]
    fn free_uses_per_axis_floor() {
        let floor = MinSize {
            width: 50.0,
            height: 20.0,
        };
        let out = resize(SQUARE_100, Delta::new(-1000.0, -1000.0), RatioLock::Free, floor);
        assert_eq!(out.dimensions, Dimensions::new(50.0, 20.0));
    }

    #[test]
    fn nan_delta_lands_on_floor() {
        let out = resize(
            SQUARE_100,
            Delta::new(f64::NAN, 0.0),
            RatioLock::Free,
            MinSize::default(),
        );
        assert_eq!(out.dimensions.width, 30.0);
        assert_eq!(out.dimensions.height, 100.0);
    }

    // ── locked ──────────────────────────────────────────────────────────

    #[test]
    fn locked_width_dominant() {
        let out = resize(
            SQUARE_100,
            Delta::new(40.0, 5.0),
            RatioLock::Locked(ratio(2.0)),
            MinSize::default(),
        );
        assert_eq!(out.dimensions, Dimensions::new(140.0, 70.0));
        assert_eq!(out.driver, Some(Axis::Width));
        assert!(out.ratio_preserved());
    }

    #[test]
    fn locked_height_dominant() {
        let out = resize(
            SQUARE_100,
            Delta::new(5.0, 50.0),
            RatioLock::Locked(ratio(2.0)),
            MinSize::default(),
        );
        assert_eq!(out.dimensions, Dimensions::new(300.0, 150.0));
        assert_eq!(out.driver, Some(Axis::Height));
    }

    #[test]
    fn locked_tie_goes_to_height() {
        let out = resize(
            SQUARE_100,
            Delta::new(20.0, -20.0),
            RatioLock::Locked(ratio(1.5)),
            MinSize::default(),
        );
        assert_eq!(out.driver, Some(Axis::Height));
        assert_eq!(out.dimensions, Dimensions::new(120.0, 80.0));
    }

    #[test]
    fn locked_negative_delta_dominates_by_magnitude() {
        let out = resize(
            Dimensions::new(400.0, 300.0),
            Delta::new(-100.0, 10.0),
            RatioLock::Locked(ratio(4.0 / 3.0)),
            MinSize::default(),
        );
        assert_eq!(out.driver, Some(Axis::Width));
        assert!(close(out.dimensions.width, 300.0));
        assert!(close(out.dimensions.height, 225.0));
    }

    #[test]
    fn locked_holds_ratio() {
        let r = ratio(16.0 / 9.0);
        for (dx, dy) in [(10.0, 3.0), (-40.0, 2.0), (1.0, 90.0), (0.0, 0.0), (7.5, -7.5)] {
            let out = resize(
                Dimensions::new(320.0, 180.0),
                Delta::new(dx, dy),
                RatioLock::Locked(r),
                MinSize::default(),
            );
            assert!(out.ratio_preserved());
            assert!(close(out.dimensions.ratio(), r.get()), "({dx}, {dy})");
        }
    }

    #[test]
    fn locked_zero_delta_snaps_width_to_ratio() {
        // Free-resized box at 200×100 with a 1:1 lock: no movement still
        // re-derives width from height.
        let out = resize(
            Dimensions::new(200.0, 100.0),
            Delta::default(),
            RatioLock::Locked(AspectRatio::SQUARE),
            MinSize::default(),
        );
        assert_eq!(out.dimensions, Dimensions::new(100.0, 100.0));
    }

    // ── floor clamp on the derived axis ────────────────────────────────

    #[test]
    fn derived_height_clamped_breaks_ratio() {
        // Wide ratio: width 40 at 21:9 would give height ~17, under the floor.
        let out = resize(
            SQUARE_100,
            Delta::new(-60.0, 0.0),
            RatioLock::Locked(ratio(2.33)),
            MinSize::default(),
        );
        assert_eq!(out.dimensions.width, 40.0);
        assert_eq!(out.dimensions.height, 30.0);
        assert!(out.derived_clamped);
        assert!(!out.ratio_preserved());
    }

    #[test]
    fn derived_width_clamped_breaks_ratio() {
        let out = resize(
            SQUARE_100,
            Delta::new(0.0, -60.0),
            RatioLock::Locked(ratio(0.5)),
            MinSize::default(),
        );
        assert_eq!(out.dimensions, Dimensions::new(30.0, 40.0));
        assert!(out.derived_clamped);
    }

    #[test]
    fn driving_axis_floored_before_derivation() {
        let out = resize(
            SQUARE_100,
            Delta::new(-1000.0, 0.0),
            RatioLock::Locked(ratio(0.5)),
            MinSize::default(),
        );
        // Width floored to 30, height derived as 60.
        assert_eq!(out.dimensions, Dimensions::new(30.0, 60.0));
        assert!(out.ratio_preserved());
    }

    // ── helpers ────────────────────────────────────────────────────────

    #[test]
    fn lock_from_flag() {
        assert_eq!(RatioLock::from_flag(false, ratio(2.0)), RatioLock::Free);
        assert_eq!(
            RatioLock::from_flag(true, ratio(2.0)),
            RatioLock::Locked(ratio(2.0))
        );
    }

    #[test]
    fn point_delta() {
        let d = Point::new(10.0, 20.0).delta_to(Point::new(4.0, 35.0));
        assert_eq!(d, Delta::new(-6.0, 15.0));
    }

    #[test]
    fn sizes_must_be_positive_and_finite() {
        assert!(Dimensions::default().is_valid());
        assert!(MinSize::default().is_valid());
        assert!(!Dimensions::new(0.0, 300.0).is_valid());
        assert!(!Dimensions::new(300.0, -1.0).is_valid());
        assert!(!Dimensions::new(f64::NAN, 300.0).is_valid());
        assert!(!MinSize::uniform(0.0).is_valid());
        assert!(!MinSize::uniform(-100.0).is_valid());
        assert!(!MinSize { width: 30.0, height: f64::INFINITY }.is_valid());
    }
}
