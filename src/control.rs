//! UI control enablement state.
//!
//! Tracks which controls are active as the user moves through the
//! load → generate → clear cycle, as an explicit value the UI controller
//! owns and applies after each event, instead of ad-hoc toggling of
//! individual widgets from inside event handlers.

/// Enabled/disabled state of the generator's controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Controls {
    /// The generate button.
    pub generate: bool,
    /// The clear button.
    pub clear: bool,
    /// The read-aloud button.
    pub read_aloud: bool,
    /// The voice picker.
    pub voice_select: bool,
}

/// A user action that changes control enablement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UiEvent {
    /// A newly selected image finished loading onto the surface.
    ImageLoaded,
    /// The form was submitted and captions were drawn.
    MemeGenerated,
    /// The surface and form were cleared.
    Cleared,
}

impl Controls {
    /// State before any image is loaded: only generate is available.
    pub const fn initial() -> Self {
        Self {
            generate: true,
            clear: false,
            read_aloud: false,
            voice_select: false,
        }
    }

    /// Apply an event, returning the next state.
    pub fn apply(self, event: UiEvent) -> Self {
        match event {
            UiEvent::ImageLoaded => Self {
                generate: false,
                clear: true,
                read_aloud: true,
                voice_select: self.voice_select,
            },
            UiEvent::MemeGenerated => Self {
                generate: false,
                clear: true,
                read_aloud: true,
                voice_select: true,
            },
            UiEvent::Cleared => Self::initial(),
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_only_generate_enabled() {
        let c = Controls::initial();
        assert!(c.generate);
        assert!(!c.clear);
        assert!(!c.read_aloud);
        assert!(!c.voice_select);
    }

    #[test]
    fn loading_an_image_enables_clear_and_read() {
        let c = Controls::initial().apply(UiEvent::ImageLoaded);
        assert!(!c.generate);
        assert!(c.clear);
        assert!(c.read_aloud);
        assert!(!c.voice_select);
    }

    #[test]
    fn generating_enables_the_voice_picker() {
        let c = Controls::initial()
            .apply(UiEvent::ImageLoaded)
            .apply(UiEvent::MemeGenerated);
        assert!(!c.generate);
        assert!(c.clear);
        assert!(c.read_aloud);
        assert!(c.voice_select);
    }

    #[test]
    fn clearing_returns_to_the_initial_state() {
        let c = Controls::initial()
            .apply(UiEvent::ImageLoaded)
            .apply(UiEvent::MemeGenerated)
            .apply(UiEvent::Cleared);
        assert_eq!(c, Controls::initial());
    }

    #[test]
    fn generating_without_an_image_is_allowed() {
        // Captions can be drawn on an empty surface.
        let c = Controls::initial().apply(UiEvent::MemeGenerated);
        assert!(c.voice_select);
        assert!(c.read_aloud);
    }

    #[test]
    fn reloading_an_image_keeps_voice_picker_state() {
        let c = Controls::initial()
            .apply(UiEvent::MemeGenerated)
            .apply(UiEvent::ImageLoaded);
        assert!(c.voice_select);
    }
}
