#![cfg(feature = "test-utils")]

mod support;

use std::cell::Cell;
use std::rc::Rc;

use crate::support::tracing_init;
use resume_prompt::test_support::MockPlayer;
use resume_prompt::{
    resume_prompt, ClickEvent, Display, Element, ElementHandle, Player, PromptError, ResumePrompt,
    ResumePromptConfig,
};

/// Test fixture: a player with a rendered prompt and direct handles to
/// the default controls.
struct PromptFixture {
    player: Rc<MockPlayer>,
    overlay: ElementHandle,
    restart_button: ElementHandle,
    resume_button: ElementHandle,
    _prompt: ResumePrompt,
}

impl PromptFixture {
    fn new(player: Rc<MockPlayer>, config: ResumePromptConfig) -> Self {
        tracing_init();

        let prompt = resume_prompt(player.clone(), config).expect("prompt renders");

        let overlay = player
            .root()
            .borrow()
            .children
            .last()
            .cloned()
            .expect("overlay attached");
        let restart_button = find_by_class(&overlay, "restart-button").expect("restart control");
        let resume_button = find_by_class(&overlay, "resume-button").expect("resume control");

        PromptFixture {
            player,
            overlay,
            restart_button,
            resume_button,
            _prompt: prompt,
        }
    }

    fn display(&self) -> Display {
        self.overlay.borrow().style.display
    }

    fn opacity(&self) -> f32 {
        self.overlay.borrow().style.opacity
    }
}

fn find_by_class(element: &ElementHandle, class_fragment: &str) -> Option<ElementHandle> {
    if element.borrow().class_name.contains(class_fragment) {
        return Some(element.clone());
    }
    let children = element.borrow().children.clone();
    children
        .iter()
        .find_map(|child| find_by_class(child, class_fragment))
}

#[test]
fn construction_requires_a_resume_time() {
    tracing_init();

    for time in [0.0, -1.0, f64::NAN] {
        let config = ResumePromptConfig::with_time(time);
        match resume_prompt(MockPlayer::new(), config) {
            Err(PromptError::Configuration(_)) => {}
            other => panic!("expected configuration error, got {:?}", other.err()),
        }
    }
}

#[test]
fn end_to_end_resume_flow() {
    let fixture = PromptFixture::new(MockPlayer::new(), ResumePromptConfig::with_time(42.0));

    assert_eq!(fixture.display(), Display::Block);

    Element::click(&fixture.resume_button);

    // Seek requested at the saved position, prompt faded while the
    // seek is in flight, playback not yet started.
    assert_eq!(fixture.player.seeks(), vec![42.0]);
    assert_eq!(fixture.display(), Display::Block);
    assert_eq!(fixture.opacity(), 0.0);
    assert_eq!(fixture.player.play_count(), 0);

    fixture.player.fire_seeked();

    assert_eq!(fixture.display(), Display::None);
    assert_eq!(fixture.player.play_count(), 1);
    // One-shot subscription was consumed.
    assert_eq!(fixture.player.pending_seeked_count(), 0);
}

#[test]
fn end_to_end_restart_flow() {
    let fixture = PromptFixture::new(MockPlayer::new(), ResumePromptConfig::with_time(42.0));

    Element::click(&fixture.restart_button);

    assert_eq!(fixture.display(), Display::None);
    assert_eq!(fixture.player.play_count(), 1);
    assert!(fixture.player.seeks().is_empty());
}

#[test]
fn seeked_never_fires_leaves_prompt_faded() {
    let fixture = PromptFixture::new(MockPlayer::new(), ResumePromptConfig::with_time(42.0));

    Element::click(&fixture.resume_button);

    // Documented limitation: no timeout on the seeked wait.
    assert_eq!(fixture.display(), Display::Block);
    assert_eq!(fixture.opacity(), 0.0);
    assert_eq!(fixture.player.play_count(), 0);
    assert_eq!(fixture.player.pending_seeked_count(), 1);
}

#[test]
fn deferred_readiness_holds_the_resume_transition() {
    let player = MockPlayer::with_deferred_ready();
    let fixture = PromptFixture::new(player.clone(), ResumePromptConfig::with_time(7.5));

    Element::click(&fixture.resume_button);

    // No seek, no fade until the player is ready.
    assert!(player.seeks().is_empty());
    assert_eq!(fixture.opacity(), 1.0);

    player.fire_ready();
    assert_eq!(player.seeks(), vec![7.5]);
    assert_eq!(fixture.opacity(), 0.0);

    player.fire_seeked();
    assert_eq!(fixture.display(), Display::None);
    assert_eq!(player.play_count(), 1);
}

#[test]
fn caller_overrides_take_over_both_transitions() {
    let override_calls = Rc::new(Cell::new(0u32));

    let mut config = ResumePromptConfig::with_time(42.0);
    config.on_restart = Some(Rc::new({
        let override_calls = override_calls.clone();
        move |_: &ClickEvent| override_calls.set(override_calls.get() + 1)
    }));
    config.on_resume = Some(Rc::new({
        let override_calls = override_calls.clone();
        move |_: &ClickEvent| override_calls.set(override_calls.get() + 1)
    }));

    let fixture = PromptFixture::new(MockPlayer::new(), config);

    Element::click(&fixture.restart_button);
    Element::click(&fixture.resume_button);

    assert_eq!(override_calls.get(), 2);
    assert_eq!(fixture.player.play_count(), 0);
    assert!(fixture.player.seeks().is_empty());
}

#[test]
fn option_object_config_drives_the_rendered_overlay() {
    tracing_init();

    let config: ResumePromptConfig = serde_json::from_str(
        r#"{
            "resumeTimeSeconds": 120.0,
            "restartLabel": "From the top",
            "resumeLabel": "Pick up where you left off",
            "rootElementId": "watch_prompt"
        }"#,
    )
    .expect("option object parses");

    let player = MockPlayer::new();
    let _prompt = resume_prompt(player.clone(), config).unwrap();

    let overlay = player.root().borrow().children.last().cloned().unwrap();
    assert_eq!(overlay.borrow().id, "watch_prompt");

    let restart = find_by_class(&overlay, "restart-button").unwrap();
    assert_eq!(restart.borrow().text, "From the top");

    Element::click(&find_by_class(&overlay, "resume-button").unwrap());
    assert_eq!(player.seeks(), vec![120.0]);
}

#[test]
fn second_render_tracks_only_the_newest_overlay() {
    tracing_init();

    let player = MockPlayer::new();
    let first = resume_prompt(player.clone(), ResumePromptConfig::with_time(10.0)).unwrap();
    let second = resume_prompt(player.clone(), ResumePromptConfig::with_time(10.0)).unwrap();

    // Both overlays stay attached; rendering never detaches an earlier
    // overlay. Each prompt controls only the overlay it rendered last.
    let children = player.root().borrow().children.clone();
    assert_eq!(children.len(), 2);

    second.hide();
    assert_eq!(children[1].borrow().style.display, Display::None);
    assert_eq!(children[0].borrow().style.display, Display::Block);

    first.hide();
    assert_eq!(children[0].borrow().style.display, Display::None);
}

#[test]
fn big_play_button_is_superseded_and_preload_seek_fires() {
    tracing_init();

    let player = MockPlayer::with_big_play_button();
    let big_play_button =
        Player::big_play_button(&*player).expect("mock exposes the affordance");

    let mut config = ResumePromptConfig::with_time(33.0);
    config.preload_seek = true;

    let _prompt = resume_prompt(player.clone(), config).unwrap();

    assert_eq!(big_play_button.borrow().style.display, Display::None);
    assert_eq!(player.seeks(), vec![33.0]);
    assert_eq!(player.play_count(), 0);
}
