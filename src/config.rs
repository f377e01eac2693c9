use std::rc::Rc;

use serde::Deserialize;

use crate::element::{ClickEvent, ClickHandler, ElementHandle};

/// Builds a custom restart/resume control, given the click handler to
/// wire into it. Returning `None` means "no usable element" and the
/// default button is built instead.
pub type ButtonFactory = Rc<dyn Fn(ClickHandler) -> Option<ElementHandle>>;

/// Builds a custom overlay container from the two controls. Same
/// fallback contract as [`ButtonFactory`].
pub type OverlayFactory = Rc<dyn Fn(ElementHandle, ElementHandle) -> Option<ElementHandle>>;

/// Full replacement for the default restart/resume transition. When
/// supplied, the component performs no seek, no playback, and no
/// visibility change of its own for that choice.
pub type ChoiceHandler = Rc<dyn Fn(&ClickEvent)>;

/// Options for the resume prompt. Immutable after construction.
///
/// The data fields deserialize from a camelCase option object; the hook
/// fields are attached programmatically.
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumePromptConfig {
    /// Previously-reached playback position, in seconds. Required;
    /// zero reads as "not provided" and fails construction.
    pub resume_time_seconds: f64,

    pub restart_label: String,
    pub resume_label: String,

    pub root_class_name: String,
    pub list_class_name: String,
    pub item_class_name: String,
    pub button_class_name: String,
    pub restart_button_class_name: String,
    pub resume_button_class_name: String,
    pub root_element_id: String,

    /// Seek to `resume_time_seconds` at construction time instead of
    /// waiting for the resume choice.
    pub preload_seek: bool,

    #[serde(skip)]
    pub build_restart_button: Option<ButtonFactory>,
    #[serde(skip)]
    pub build_resume_button: Option<ButtonFactory>,
    #[serde(skip)]
    pub build_overlay: Option<OverlayFactory>,
    #[serde(skip)]
    pub on_restart: Option<ChoiceHandler>,
    #[serde(skip)]
    pub on_resume: Option<ChoiceHandler>,
}

impl Default for ResumePromptConfig {
    fn default() -> Self {
        ResumePromptConfig {
            resume_time_seconds: 0.0,
            restart_label: "Restart Video".to_string(),
            resume_label: "Resume Video".to_string(),
            root_class_name: "resume-prompt".to_string(),
            list_class_name: "resume-prompt-action-list".to_string(),
            item_class_name: "resume-prompt-action-item".to_string(),
            button_class_name: "resume-prompt-button".to_string(),
            restart_button_class_name: "resume-prompt-restart-button".to_string(),
            resume_button_class_name: "resume-prompt-resume-button".to_string(),
            root_element_id: "resume_prompt".to_string(),
            preload_seek: false,
            build_restart_button: None,
            build_resume_button: None,
            build_overlay: None,
            on_restart: None,
            on_resume: None,
        }
    }
}

impl ResumePromptConfig {
    /// Convenience constructor for the common case of only supplying a
    /// resume time.
    pub fn with_time(resume_time_seconds: f64) -> Self {
        ResumePromptConfig {
            resume_time_seconds,
            ..Default::default()
        }
    }
}
