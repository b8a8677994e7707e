//! Deserializable session configuration.
//!
//! Preset descriptors are resolved once here, at load time. A bad descriptor
//! fails the whole load rather than surfacing later on a selection change.
//! So does a zero, negative, or non-finite box size or floor.
//!
//! ```
//! use ratiolock::settings::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{
//!     "initial": { "width": 320, "height": 180 },
//!     "keep": "height",
//!     "presets": [
//!         { "label": "16:9", "value": "16:9" },
//!         { "label": "Square", "value": 1 }
//!     ],
//!     "selected": "16:9"
//! }"#).unwrap();
//!
//! let session = settings.into_session().unwrap();
//! assert_eq!(session.presets().len(), 2);
//! assert_eq!(session.active_preset().label(), "16:9");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::error::ResizeError;
use crate::ratio::RatioDescriptor;
use crate::rescale::KeepAxis;
use crate::resize::{Dimensions, MinSize};
use crate::session::{Preset, ResizeSession};

/// One entry of a configured preset list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetSettings {
    /// Text shown in the selection control.
    pub label: String,
    /// A number, `"W:H"`, or `"W/H"`.
    pub value: RatioDescriptor,
}

/// Everything needed to build a [`ResizeSession`].
///
/// Every field is optional in the serialized form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Box size before any interaction.
    pub initial: Dimensions,
    /// Minimum size on each axis.
    pub floor: MinSize,
    /// Fixed axis for ratio switches.
    pub keep: KeepAxis,
    /// Preset list. Empty means the built-in presets.
    pub presets: Vec<PresetSettings>,
    /// Initially active preset, by value or label. `None` means the first.
    pub selected: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial: Dimensions::default(),
            floor: MinSize::default(),
            keep: KeepAxis::default(),
            presets: Vec::new(),
            selected: None,
        }
    }
}

impl Settings {
    /// Resolve presets and build the session.
    ///
    /// The initially selected preset is activated without rescaling
    /// `initial`.
    pub fn into_session(self) -> Result<ResizeSession, ResizeError> {
        let presets = self
            .presets
            .into_iter()
            .map(|p| Preset::new(p.label, p.value))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| log::warn!("rejected preset list: {err}"))?;

        let mut session = ResizeSession::new(self.initial, self.floor)
            .inspect_err(|err| log::warn!("rejected sizes: {err}"))?
            .with_keep_axis(self.keep);
        if !presets.is_empty() {
            session = session.with_presets(presets);
        }

        if let Some(value) = self.selected {
            let index = session
                .find_preset(&value)
                .inspect_err(|err| log::warn!("rejected selected preset {value:?}: {err}"))?;
            session.activate(index);
        }
        Ok(session)
    }
}
