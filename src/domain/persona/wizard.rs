//! WizardState aggregate - the full in-memory answer set of one session.
//!
//! Every user action maps to exactly one state-transition method here. None of
//! them can fail: axis values clamp, navigation clamps, and catalog ids are
//! already validated by the time they reach this type.

use serde::Serialize;

use super::catalog::{Axis, PlatformId, Tone, Topic};
use super::command::WizardCommand;
use super::identity::IdentityState;
use super::platform::{PlatformSettings, PlatformState};
use super::voice::VoiceState;
use crate::domain::foundation::{AxisValue, WizardStep};

/// Aggregate root for the persona wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    step: WizardStep,
    identity: IdentityState,
    voice: VoiceState,
    platforms: PlatformSettings,
    active_platform: PlatformId,
    copied: bool,
}

impl WizardState {
    /// Fresh session: first step, nothing answered, every platform disabled
    /// at its catalog defaults.
    pub fn new() -> Self {
        Self {
            step: WizardStep::first(),
            identity: IdentityState::default(),
            voice: VoiceState::default(),
            platforms: PlatformSettings::new(),
            active_platform: PlatformId::Twitter,
            copied: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn identity(&self) -> &IdentityState {
        &self.identity
    }

    pub fn voice(&self) -> &VoiceState {
        &self.voice
    }

    pub fn platforms(&self) -> &PlatformSettings {
        &self.platforms
    }

    pub fn platform(&self, id: PlatformId) -> &PlatformState {
        self.platforms.get(id)
    }

    pub fn active_platform(&self) -> PlatformId {
        self.active_platform
    }

    pub fn active_platform_state(&self) -> &PlatformState {
        self.platforms.get(self.active_platform)
    }

    /// Sliders are only shown for the active platform when it is enabled.
    pub fn is_active_platform_calibratable(&self) -> bool {
        self.active_platform_state().enabled
    }

    /// Enabled platforms in catalog order.
    pub fn enabled_platforms(&self) -> Vec<PlatformId> {
        self.platforms.enabled()
    }

    /// The quick-switch row only appears once two or more platforms are on.
    pub fn shows_platform_switcher(&self) -> bool {
        self.enabled_platforms().len() > 1
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn is_on_export_step(&self) -> bool {
        self.step == WizardStep::last()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Identity / voice text
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.identity.name = name.into();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.identity.role = role.into();
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.identity.bio = bio.into();
    }

    pub fn set_avoid(&mut self, avoid: impl Into<String>) {
        self.identity.avoid = avoid.into();
    }

    pub fn set_nogo(&mut self, nogo: impl Into<String>) {
        self.voice.nogo = nogo.into();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tags
    // ─────────────────────────────────────────────────────────────────────

    /// Returns true if the tone is selected afterwards.
    pub fn toggle_tone(&mut self, tone: Tone) -> bool {
        self.voice.toggle_tone(tone)
    }

    /// Returns true if the topic is selected afterwards.
    pub fn toggle_topic(&mut self, topic: Topic) -> bool {
        self.voice.toggle_topic(topic)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Platforms
    // ─────────────────────────────────────────────────────────────────────

    /// Flips the enabled flag. Returns the new value.
    pub fn toggle_platform(&mut self, id: PlatformId) -> bool {
        let state = self.platforms.get_mut(id);
        state.enabled = !state.enabled;
        state.enabled
    }

    /// Makes `id` the platform whose sliders are shown. May be disabled.
    pub fn select_platform(&mut self, id: PlatformId) {
        self.active_platform = id;
    }

    /// Sets one axis, clamping `value` into `[0, 100]`.
    pub fn set_axis(&mut self, id: PlatformId, axis: Axis, value: i64) -> AxisValue {
        let value = AxisValue::clamped(value);
        self.platforms.get_mut(id).axes.set(axis, value);
        value
    }

    /// Restores the four axes to catalog defaults; `enabled` is untouched.
    pub fn reset_platform_axes(&mut self, id: PlatformId) {
        self.platforms.get_mut(id).axes = id.definition().default_axes;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Jumps to `index`, clamped to the valid step range.
    pub fn go_to_step(&mut self, index: i64) -> WizardStep {
        self.step = WizardStep::from_index_clamped(index);
        self.step
    }

    pub fn advance_step(&mut self) -> WizardStep {
        self.step = self.step.next().unwrap_or(self.step);
        self.step
    }

    pub fn retreat_step(&mut self) -> WizardStep {
        self.step = self.step.previous().unwrap_or(self.step);
        self.step
    }

    // ─────────────────────────────────────────────────────────────────────
    // Copy confirmation
    // ─────────────────────────────────────────────────────────────────────

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    pub fn clear_copied(&mut self) {
        self.copied = false;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reducer
    // ─────────────────────────────────────────────────────────────────────

    /// Applies one presentation action.
    pub fn apply(&mut self, command: WizardCommand) {
        match command {
            WizardCommand::SetName { value } => self.set_name(value),
            WizardCommand::SetRole { value } => self.set_role(value),
            WizardCommand::SetBio { value } => self.set_bio(value),
            WizardCommand::SetAvoid { value } => self.set_avoid(value),
            WizardCommand::SetNogo { value } => self.set_nogo(value),
            WizardCommand::ToggleTone { tone } => {
                self.toggle_tone(tone);
            }
            WizardCommand::ToggleTopic { topic } => {
                self.toggle_topic(topic);
            }
            WizardCommand::TogglePlatform { platform } => {
                self.toggle_platform(platform);
            }
            WizardCommand::SelectPlatform { platform } => self.select_platform(platform),
            WizardCommand::SetAxis {
                platform,
                axis,
                value,
            } => {
                self.set_axis(platform, axis, value);
            }
            WizardCommand::ResetPlatformAxes { platform } => self.reset_platform_axes(platform),
            WizardCommand::GoToStep { index } => {
                self.go_to_step(index);
            }
            WizardCommand::AdvanceStep => {
                self.advance_step();
            }
            WizardCommand::RetreatStep => {
                self.retreat_step();
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ───────────────────────────────────────────────────────────────
    // Initial state
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_state_matches_catalog_defaults() {
        let state = WizardState::new();
        for id in PlatformId::all() {
            let p = state.platform(*id);
            assert!(!p.enabled, "{} should start disabled", id);
            assert_eq!(p.axes, id.definition().default_axes);
        }
        assert_eq!(state.step(), WizardStep::Identity);
        assert_eq!(state.active_platform(), PlatformId::Twitter);
        assert!(!state.is_copied());
        assert!(state.identity().is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Platforms
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn toggle_platform_flips_enabled() {
        let mut state = WizardState::new();
        assert!(state.toggle_platform(PlatformId::Discord));
        assert!(state.platform(PlatformId::Discord).enabled);
        assert!(!state.toggle_platform(PlatformId::Discord));
        assert!(!state.platform(PlatformId::Discord).enabled);
    }

    #[test]
    fn set_axis_clamps_out_of_range_values() {
        let mut state = WizardState::new();
        assert_eq!(state.set_axis(PlatformId::Email, Axis::Warmth, 250).value(), 100);
        assert_eq!(state.set_axis(PlatformId::Email, Axis::Boldness, -3).value(), 0);
        assert_eq!(state.set_axis(PlatformId::Email, Axis::Formality, 3_000_000_000).value(), 100);
        assert_eq!(state.set_axis(PlatformId::Email, Axis::Brevity, i64::MIN).value(), 0);
        assert_eq!(state.platform(PlatformId::Email).axes.warmth.value(), 100);
        assert_eq!(state.platform(PlatformId::Email).axes.boldness.value(), 0);
    }

    #[test]
    fn reset_restores_only_the_edited_platform() {
        let mut state = WizardState::new();
        state.toggle_platform(PlatformId::LinkedIn);
        state.set_axis(PlatformId::LinkedIn, Axis::Formality, 5);
        state.set_axis(PlatformId::Reddit, Axis::Brevity, 99);

        state.reset_platform_axes(PlatformId::LinkedIn);

        assert!(state.platform(PlatformId::LinkedIn).is_at_defaults(PlatformId::LinkedIn));
        assert!(state.platform(PlatformId::LinkedIn).enabled);
        assert_eq!(state.platform(PlatformId::Reddit).axes.brevity.value(), 99);
    }

    #[test]
    fn active_platform_may_be_disabled() {
        let mut state = WizardState::new();
        state.select_platform(PlatformId::Instagram);
        assert_eq!(state.active_platform(), PlatformId::Instagram);
        assert!(!state.is_active_platform_calibratable());

        state.toggle_platform(PlatformId::Instagram);
        assert!(state.is_active_platform_calibratable());
    }

    #[test]
    fn switcher_needs_two_enabled_platforms() {
        let mut state = WizardState::new();
        state.toggle_platform(PlatformId::Email);
        assert!(!state.shows_platform_switcher());
        state.toggle_platform(PlatformId::Twitter);
        assert!(state.shows_platform_switcher());
        assert_eq!(
            state.enabled_platforms(),
            vec![PlatformId::Twitter, PlatformId::Email]
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = WizardState::new();
        assert_eq!(state.retreat_step(), WizardStep::Identity);
        assert_eq!(state.go_to_step(10), WizardStep::Export);
        assert!(state.is_on_export_step());
        assert_eq!(state.advance_step(), WizardStep::Export);
        assert_eq!(state.retreat_step(), WizardStep::Platforms);
        assert_eq!(state.go_to_step(-1), WizardStep::Identity);
    }

    // ───────────────────────────────────────────────────────────────
    // Reducer
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn apply_routes_commands_to_mutators() {
        let mut state = WizardState::new();
        state.apply(WizardCommand::SetName { value: "Alex".into() });
        state.apply(WizardCommand::ToggleTone { tone: Tone::Direct });
        state.apply(WizardCommand::ToggleTopic { topic: Topic::Tech });
        state.apply(WizardCommand::TogglePlatform { platform: PlatformId::Twitter });
        state.apply(WizardCommand::SetAxis {
            platform: PlatformId::Twitter,
            axis: Axis::Formality,
            value: 42,
        });
        state.apply(WizardCommand::AdvanceStep);

        assert_eq!(state.identity().name, "Alex");
        assert!(state.voice().tones.contains(&Tone::Direct));
        assert!(state.voice().topics.contains(&Topic::Tech));
        assert!(state.platform(PlatformId::Twitter).enabled);
        assert_eq!(state.platform(PlatformId::Twitter).axes.formality.value(), 42);
        assert_eq!(state.step(), WizardStep::Voice);
    }

    #[test]
    fn copied_flag_round_trip() {
        let mut state = WizardState::new();
        state.mark_copied();
        assert!(state.is_copied());
        state.clear_copied();
        assert!(!state.is_copied());
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    fn any_platform() -> impl Strategy<Value = PlatformId> {
        prop::sample::select(PlatformId::all().to_vec())
    }

    fn any_axis() -> impl Strategy<Value = Axis> {
        prop::sample::select(Axis::all().to_vec())
    }

    fn any_tone() -> impl Strategy<Value = Tone> {
        prop::sample::select(Tone::all().to_vec())
    }

    #[derive(Debug, Clone)]
    enum Nav {
        GoTo(i64),
        Advance,
        Retreat,
    }

    fn any_nav() -> impl Strategy<Value = Nav> {
        prop_oneof![
            any::<i64>().prop_map(Nav::GoTo),
            Just(Nav::Advance),
            Just(Nav::Retreat),
        ]
    }

    proptest! {
        #[test]
        fn toggle_tone_twice_is_identity(
            initial in prop::collection::vec(any_tone(), 0..7),
            tone in any_tone(),
        ) {
            let mut state = WizardState::new();
            for t in initial {
                state.toggle_tone(t);
            }
            let before = state.voice().tones.clone();

            state.toggle_tone(tone);
            state.toggle_tone(tone);

            prop_assert_eq!(&state.voice().tones, &before);
        }

        #[test]
        fn reset_after_edits_restores_defaults(
            id in any_platform(),
            enable in any::<bool>(),
            edits in prop::collection::vec((any_axis(), -50i64..200), 0..20),
        ) {
            let mut state = WizardState::new();
            if enable {
                state.toggle_platform(id);
            }
            for (axis, value) in edits {
                state.set_axis(id, axis, value);
            }

            state.reset_platform_axes(id);

            prop_assert_eq!(state.platform(id).axes, id.definition().default_axes);
            prop_assert_eq!(state.platform(id).enabled, enable);
        }

        #[test]
        fn navigation_never_leaves_step_range(moves in prop::collection::vec(any_nav(), 0..40)) {
            let mut state = WizardState::new();
            for m in moves {
                match m {
                    Nav::GoTo(i) => { state.go_to_step(i); }
                    Nav::Advance => { state.advance_step(); }
                    Nav::Retreat => { state.retreat_step(); }
                }
                prop_assert!(state.step().order_index() <= 3);
            }
        }

        #[test]
        fn axis_values_stay_in_range(
            id in any_platform(),
            axis in any_axis(),
            value in any::<i64>(),
        ) {
            let mut state = WizardState::new();
            state.set_axis(id, axis, value);
            prop_assert!(state.platform(id).axes.get(axis).value() <= 100);
        }
    }
}
