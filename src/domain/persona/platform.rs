//! Per-platform calibration state.

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use super::catalog::{Axis, PlatformId};
use crate::domain::foundation::AxisValue;

/// The four slider readings for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct AxisSettings {
    pub formality: AxisValue,
    pub brevity: AxisValue,
    pub warmth: AxisValue,
    pub boldness: AxisValue,
}

impl AxisSettings {
    /// Reads one axis.
    pub fn get(&self, axis: Axis) -> AxisValue {
        match axis {
            Axis::Formality => self.formality,
            Axis::Brevity => self.brevity,
            Axis::Warmth => self.warmth,
            Axis::Boldness => self.boldness,
        }
    }

    /// Writes one axis.
    pub fn set(&mut self, axis: Axis, value: AxisValue) {
        match axis {
            Axis::Formality => self.formality = value,
            Axis::Brevity => self.brevity = value,
            Axis::Warmth => self.warmth = value,
            Axis::Boldness => self.boldness = value,
        }
    }
}

/// Enabled flag plus current calibration for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PlatformState {
    pub enabled: bool,
    #[serde(flatten)]
    pub axes: AxisSettings,
}

impl PlatformState {
    /// Disabled, with the catalog defaults for `id`.
    pub fn initial(id: PlatformId) -> Self {
        Self {
            enabled: false,
            axes: id.definition().default_axes,
        }
    }

    /// True if the axes still match the catalog defaults.
    pub fn is_at_defaults(&self, id: PlatformId) -> bool {
        self.axes == id.definition().default_axes
    }
}

/// One [`PlatformState`] per catalog platform.
///
/// Backed by a fixed array indexed by [`PlatformId::order_index`], so an entry
/// can never be added or removed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSettings {
    slots: [PlatformState; 6],
}

impl PlatformSettings {
    pub fn new() -> Self {
        let ids = PlatformId::all();
        Self {
            slots: std::array::from_fn(|i| PlatformState::initial(ids[i])),
        }
    }

    pub fn get(&self, id: PlatformId) -> &PlatformState {
        &self.slots[id.order_index()]
    }

    pub fn get_mut(&mut self, id: PlatformId) -> &mut PlatformState {
        &mut self.slots[id.order_index()]
    }

    /// Iterates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, &PlatformState)> {
        PlatformId::all().iter().copied().zip(self.slots.iter())
    }

    /// Enabled platforms in catalog order, regardless of toggle order.
    pub fn enabled(&self) -> Vec<PlatformId> {
        self.iter()
            .filter(|(_, state)| state.enabled)
            .map(|(id, _)| id)
            .collect()
    }
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for PlatformSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(id, state)| (id.as_str(), state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_settings_are_disabled_at_defaults() {
        let settings = PlatformSettings::new();
        for (id, state) in settings.iter() {
            assert!(!state.enabled);
            assert!(state.is_at_defaults(id));
        }
    }

    #[test]
    fn axis_get_set_touch_only_named_axis() {
        let mut axes = PlatformId::Email.definition().default_axes;
        axes.set(Axis::Warmth, AxisValue::new(99));

        assert_eq!(axes.get(Axis::Warmth).value(), 99);
        assert_eq!(axes.get(Axis::Formality).value(), 70);
        assert_eq!(axes.get(Axis::Brevity).value(), 45);
        assert_eq!(axes.get(Axis::Boldness).value(), 40);
    }

    #[test]
    fn enabled_follows_catalog_order() {
        let mut settings = PlatformSettings::new();
        settings.get_mut(PlatformId::Reddit).enabled = true;
        settings.get_mut(PlatformId::Twitter).enabled = true;

        assert_eq!(settings.enabled(), vec![PlatformId::Twitter, PlatformId::Reddit]);
    }

    #[test]
    fn serializes_as_map_keyed_by_platform_id() {
        let json = serde_json::to_value(PlatformSettings::new()).unwrap();
        let twitter = &json["twitter"];
        assert_eq!(twitter["enabled"], false);
        assert_eq!(twitter["formality"], 15);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
