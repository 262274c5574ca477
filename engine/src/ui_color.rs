use serde::{Deserialize, Serialize};

// Generates the UiColor enum together with its variable-name table
macro_rules! ui_colors {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Literal UI colors every theme defines, outside the per-channel colors.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum UiColor {
            $($variant),+
        }

        impl UiColor {
            pub const ALL: &'static [UiColor] = &[$(UiColor::$variant),+];

            /// Style variable name, without the `--` prefix
            pub fn name(self) -> &'static str {
                match self {
                    $(UiColor::$variant => $name),+
                }
            }
        }
    };
}

ui_colors! {
    PageMargin => "page-margin",
    EditorBackground => "editor-background",
    HoverPreview => "hover-preview",
    Playhead => "playhead",
    PrimaryText => "primary-text",
    SecondaryText => "secondary-text",
    InvertedText => "inverted-text",
    TextSelection => "text-selection",
    BoxSelectionFill => "box-selection-fill",
    LoopAccent => "loop-accent",
    LinkAccent => "link-accent",
    UiWidgetBackground => "ui-widget-background",
    UiWidgetFocus => "ui-widget-focus",
    PitchBackground => "pitch-background",
    Tonic => "tonic",
    FifthNote => "fifth-note",
    WhitePianoKey => "white-piano-key",
    BlackPianoKey => "black-piano-key",
    TrackEditorBgPitch => "track-editor-bg-pitch",
    TrackEditorBgPitchDim => "track-editor-bg-pitch-dim",
    TrackEditorBgNoise => "track-editor-bg-noise",
    TrackEditorBgNoiseDim => "track-editor-bg-noise-dim",
    TrackEditorBgMod => "track-editor-bg-mod",
    TrackEditorBgModDim => "track-editor-bg-mod-dim",
    MultiplicativeModSlider => "multiplicative-mod-slider",
    OverwritingModSlider => "overwriting-mod-slider",
    IndicatorPrimary => "indicator-primary",
    IndicatorSecondary => "indicator-secondary",
    Select2OptGroup => "select2-opt-group",
    InputBoxOutline => "input-box-outline",
    MuteButtonNormal => "mute-button-normal",
    MuteButtonMod => "mute-button-mod",
    ModLabelPrimary => "mod-label-primary",
    ModLabelSecondaryText => "mod-label-secondary-text",
    ModLabelPrimaryText => "mod-label-primary-text",
    DisabledNotePrimary => "disabled-note-primary",
    DisabledNoteSecondary => "disabled-note-secondary",
}

impl UiColor {
    /// Symbolic reference for surfaces that resolve style variables themselves
    pub fn reference(self) -> String {
        format!("var(--{})", self.name())
    }

    /// Variable whose value a host mirrors into its accent indicator on theme switch
    pub const ACCENT: UiColor = UiColor::UiWidgetBackground;
}
