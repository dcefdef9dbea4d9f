//! End-to-end meme flows: load → generate → read aloud → clear.
//!
//! Drives the planning modules the way a UI controller would, checking that
//! the composed command lists, control states, and speech plans agree at
//! each step.

use memelayout::speech::select_voice;
use memelayout::{
    CaptionSlot, Command, Controls, Meme, Placement, ReadAloud, UiEvent, Voice, VolumeLevel,
};

const SURFACE: (f64, f64) = (400.0, 400.0);

#[test]
fn loading_an_image_composes_background_and_fitted_image() {
    // User picks a 640×480 photo; the load handler redraws the surface.
    let commands = Meme::new(SURFACE.0, SURFACE.1)
        .image(640.0, 480.0)
        .compose()
        .unwrap();

    assert_eq!(commands[0], Command::Clear);
    assert!(matches!(commands[1], Command::Fill(_)));
    assert_eq!(
        commands[2],
        Command::DrawImage(Placement {
            width: 400.0,
            height: 300.0,
            start_x: 0.0,
            start_y: 50.0
        })
    );

    let controls = Controls::initial().apply(UiEvent::ImageLoaded);
    assert!(!controls.generate);
    assert!(controls.clear);
    assert!(controls.read_aloud);
}

#[test]
fn generating_adds_captions_over_the_same_placement() {
    let plain = Meme::new(SURFACE.0, SURFACE.1).image(640.0, 480.0);
    let captioned = plain.clone().top_text("ONE DOES NOT SIMPLY").bottom_text("SHIP ON FRIDAY");

    let before = plain.compose().unwrap();
    let after = captioned.compose().unwrap();

    // The first three commands are unchanged; captions append in band order.
    assert_eq!(&after[..3], &before[..]);
    let slots: Vec<_> = after
        .iter()
        .filter_map(|c| match c {
            Command::DrawCaption { slot, text, .. } => Some((*slot, text.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        slots,
        [
            (CaptionSlot::Top, "ONE DOES NOT SIMPLY"),
            (CaptionSlot::Bottom, "SHIP ON FRIDAY")
        ]
    );

    let controls = Controls::initial()
        .apply(UiEvent::ImageLoaded)
        .apply(UiEvent::MemeGenerated);
    assert!(controls.voice_select);
}

#[test]
fn read_aloud_speaks_the_generated_captions_in_order() {
    let voices = [
        Voice {
            name: "Daniel",
            lang: "en-GB",
            is_default: true,
        },
        Voice {
            name: "Karen",
            lang: "en-AU",
            is_default: false,
        },
    ];

    let plan = ReadAloud::new("ONE DOES NOT SIMPLY", "SHIP ON FRIDAY")
        .voice(select_voice(&voices, "Karen").copied())
        .volume_slider(67);

    let [first, second] = plan.utterances();
    assert_eq!(first.text, "ONE DOES NOT SIMPLY");
    assert_eq!(second.text, "SHIP ON FRIDAY");
    assert_eq!(first.voice.unwrap().lang, "en-AU");
    assert_eq!(first.volume, 0.67);
    assert_eq!(plan.volume_level(), VolumeLevel::High);
}

#[test]
fn clearing_resets_controls_and_the_frame() {
    let controls = Controls::initial()
        .apply(UiEvent::ImageLoaded)
        .apply(UiEvent::MemeGenerated)
        .apply(UiEvent::Cleared);
    assert_eq!(controls, Controls::initial());

    // A cleared frame has no image and no captions: clear is all that's left.
    let commands = Meme::new(SURFACE.0, SURFACE.1).compose().unwrap();
    assert_eq!(commands, [Command::Clear]);
}

#[test]
fn captions_compose_without_an_image() {
    // The form accepts text before any image is picked.
    let commands = Meme::new(SURFACE.0, SURFACE.1)
        .top_text("NO IMAGE")
        .compose()
        .unwrap();
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[1], Command::DrawCaption { .. }));
}

#[cfg(feature = "svg")]
#[test]
fn preview_reflects_the_composed_frame() {
    use memelayout::svg::render_preview_svg;

    let commands = Meme::new(SURFACE.0, SURFACE.1)
        .image(800.0, 400.0)
        .top_text("TOP")
        .compose()
        .unwrap();
    let svg = render_preview_svg(SURFACE.0, SURFACE.1, &commands);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"class="image""#));
    assert!(svg.contains(">TOP</text>"));
}
