use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ResumePromptConfig;
use crate::element::{ClickEvent, ClickHandler, Display, Element, ElementHandle};
use crate::player::{Player, PlayerEvent};

/// Errors raised while constructing or rendering the prompt
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("resume prompt requires a positive resume time (got {0})")]
    Configuration(f64),
    #[error("overlay template error: {0}")]
    Template(String),
}

/// Single-slot registry for the overlay the prompt currently controls.
///
/// Only the most recently rendered overlay is tracked; every render
/// overwrites the slot without detaching the previous overlay from the
/// player. Visibility operations are silent no-ops while the slot is
/// empty.
#[derive(Clone, Default)]
struct OverlaySlot {
    inner: Rc<RefCell<Option<ElementHandle>>>,
}

impl OverlaySlot {
    fn track(&self, overlay: ElementHandle) {
        *self.inner.borrow_mut() = Some(overlay);
    }

    fn show(&self) {
        self.set_display(Display::Block);
    }

    fn hide(&self) {
        self.set_display(Display::None);
    }

    /// Zero the overlay's opacity without removing it from the layout,
    /// so it still blocks interaction with the player underneath.
    fn fade(&self) {
        if let Some(overlay) = self.inner.borrow().as_ref() {
            overlay.borrow_mut().style.opacity = 0.0;
            debug!("overlay faded");
        }
    }

    fn set_display(&self, value: Display) {
        if let Some(overlay) = self.inner.borrow().as_ref() {
            overlay.borrow_mut().style.display = value;
            debug!(display = ?value, "overlay display changed");
        }
    }
}

/// Restart-or-resume prompt bound to one host player.
///
/// Construct with [`ResumePrompt::new`] (or [`resume_prompt`] to
/// construct and render in one step), then call [`ResumePrompt::render`]
/// to attach the overlay. Exactly one of the restart/resume transitions
/// runs per instance; once it completes the overlay is hidden and the
/// player is playing. A dismissed prompt cannot be re-shown.
pub struct ResumePrompt {
    player: Rc<dyn Player>,
    config: Rc<ResumePromptConfig>,
    slot: OverlaySlot,
}

impl ResumePrompt {
    /// Validate the configuration and bind the prompt to `player`.
    ///
    /// Fails with [`PromptError::Configuration`] when the resume time is
    /// missing: zero, negative, and NaN all read as "not provided".
    /// Hides the player's big play button if it exposes one, and issues
    /// the preload seek when configured.
    pub fn new(player: Rc<dyn Player>, config: ResumePromptConfig) -> Result<Self, PromptError> {
        let time = config.resume_time_seconds;
        if time.is_nan() || time <= 0.0 {
            return Err(PromptError::Configuration(time));
        }

        if let Some(big_play_button) = player.big_play_button() {
            big_play_button.borrow_mut().style.display = Display::None;
            debug!("hid player big play button");
        }

        if config.preload_seek {
            info!(time, "preload seek requested");
            player.current_time(time);
        }

        Ok(ResumePrompt {
            player,
            config: Rc::new(config),
            slot: OverlaySlot::default(),
        })
    }

    /// Build the overlay and attach it as the last child of the player
    /// root, then show it.
    ///
    /// The new overlay overwrites the tracked slot. An overlay from an
    /// earlier render stays attached to the player but is no longer
    /// controllable; only the most recent overlay responds to
    /// [`show`](Self::show)/[`hide`](Self::hide)/[`fade`](Self::fade).
    pub fn render(&mut self) -> Result<(), PromptError> {
        let restart_button = self.build_restart_button();
        let resume_button = self.build_resume_button();
        let overlay = self.build_overlay(restart_button, resume_button);

        let root = self.player.el();
        if Rc::ptr_eq(&overlay, &root) {
            return Err(PromptError::Template(
                "overlay factory returned the player root element".to_string(),
            ));
        }

        self.slot.track(overlay.clone());
        Element::append_child(&root, overlay);
        info!("resume prompt rendered");

        self.show();
        Ok(())
    }

    pub fn show(&self) {
        self.slot.show();
    }

    pub fn hide(&self) {
        self.slot.hide();
    }

    pub fn fade(&self) {
        self.slot.fade();
    }

    /// Click handler for the restart control.
    ///
    /// An `on_restart` override replaces the default behavior entirely.
    /// The default waits for player readiness, hides the overlay, and
    /// plays from the current position; it does not seek. Callers that
    /// want restart to jump to zero install an override that seeks
    /// before playing.
    fn restart_handler(&self) -> ClickHandler {
        let player = Rc::clone(&self.player);
        let config = Rc::clone(&self.config);
        let slot = self.slot.clone();

        Rc::new(move |event: &ClickEvent| {
            if let Some(on_restart) = &config.on_restart {
                debug!("delegating restart to caller override");
                on_restart(event);
                return;
            }

            info!("restart chosen, waiting for player readiness");
            let slot = slot.clone();
            let player_ready = Rc::clone(&player);
            player.ready(Box::new(move || {
                slot.hide();
                player_ready.play();
                info!("overlay dismissed, playing from current position");
            }));
        })
    }

    /// Click handler for the resume control.
    ///
    /// An `on_resume` override replaces the default behavior entirely.
    /// The default waits for readiness, registers a one-shot seeked
    /// continuation that hides the overlay and starts playback, issues
    /// the seek, and fades the overlay while the seek is in flight.
    /// There is no timeout: if the player never signals seek completion
    /// the overlay stays faded.
    fn resume_handler(&self) -> ClickHandler {
        let player = Rc::clone(&self.player);
        let config = Rc::clone(&self.config);
        let slot = self.slot.clone();

        Rc::new(move |event: &ClickEvent| {
            if let Some(on_resume) = &config.on_resume {
                debug!("delegating resume to caller override");
                on_resume(event);
                return;
            }

            let time = config.resume_time_seconds;
            info!(time, "resume chosen, waiting for player readiness");
            let slot = slot.clone();
            let player_ready = Rc::clone(&player);
            player.ready(Box::new(move || {
                let slot_on_seeked = slot.clone();
                let player_on_seeked = Rc::clone(&player_ready);
                player_ready.one(
                    PlayerEvent::Seeked,
                    Box::new(move || {
                        slot_on_seeked.hide();
                        player_on_seeked.play();
                        info!("seek completed, overlay dismissed, playback resumed");
                    }),
                );

                player_ready.current_time(time);

                // Visually suppress the overlay, but keep it blocking
                // player interaction while the video loads.
                slot.fade();
            }));
        })
    }

    fn build_restart_button(&self) -> ElementHandle {
        let handler = self.restart_handler();

        if let Some(factory) = &self.config.build_restart_button {
            if let Some(element) = factory(Rc::clone(&handler)) {
                return element;
            }
            warn!("restart button factory returned no element, using default");
        }

        self.default_button(
            &self.config.restart_label,
            &self.config.restart_button_class_name,
            handler,
        )
    }

    fn build_resume_button(&self) -> ElementHandle {
        let handler = self.resume_handler();

        if let Some(factory) = &self.config.build_resume_button {
            if let Some(element) = factory(Rc::clone(&handler)) {
                return element;
            }
            warn!("resume button factory returned no element, using default");
        }

        self.default_button(
            &self.config.resume_label,
            &self.config.resume_button_class_name,
            handler,
        )
    }

    fn default_button(
        &self,
        label: &str,
        class_name: &str,
        handler: ClickHandler,
    ) -> ElementHandle {
        let mut button = Element::new("button");
        button.class_name = format!("{} {}", self.config.button_class_name, class_name);
        button.text = label.to_string();
        button
            .attributes
            .insert("type".to_string(), "button".to_string());
        button.on_click = Some(handler);
        button.into_handle()
    }

    /// Default layout: root container > action list > one item per button.
    fn build_overlay(
        &self,
        restart_button: ElementHandle,
        resume_button: ElementHandle,
    ) -> ElementHandle {
        if let Some(factory) = &self.config.build_overlay {
            if let Some(element) = factory(restart_button.clone(), resume_button.clone()) {
                return element;
            }
            warn!("overlay factory returned no element, using default layout");
        }

        let mut action_list = Element::new("ul");
        action_list.class_name = self.config.list_class_name.clone();
        let action_list = action_list.into_handle();

        for button in [restart_button, resume_button] {
            let mut item = Element::new("li");
            item.class_name = self.config.item_class_name.clone();
            let item = item.into_handle();
            Element::append_child(&item, button);
            Element::append_child(&action_list, item);
        }

        let mut overlay = Element::new("div");
        overlay.id = self.config.root_element_id.clone();
        overlay.class_name = self.config.root_class_name.clone();
        let overlay = overlay.into_handle();
        Element::append_child(&overlay, action_list);
        overlay
    }
}

/// Registration entry point: construct a prompt bound to `player` and
/// render it immediately.
pub fn resume_prompt(
    player: Rc<dyn Player>,
    config: ResumePromptConfig,
) -> Result<ResumePrompt, PromptError> {
    let mut prompt = ResumePrompt::new(player, config)?;
    prompt.render()?;
    Ok(prompt)
}
