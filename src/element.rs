use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared handle to an element in the retained tree.
///
/// The component runs in a single-threaded, event-driven environment, so
/// elements are shared with `Rc` and mutated through `RefCell`.
pub type ElementHandle = Rc<RefCell<Element>>;

/// Callback wired to an element's click interaction.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent)>;

/// Display portion of an element's inline style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// Inline style of an element. Only the two properties the overlay
/// lifecycle touches are modeled.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub display: Display,
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            display: Display::Block,
            opacity: 1.0,
        }
    }
}

/// Interaction event delivered to click handlers.
#[derive(Clone, Debug, Default)]
pub struct ClickEvent {
    /// `id` of the element the interaction landed on (may be empty).
    pub target_id: String,
}

/// Minimal retained element: tag, identity, text, attributes, inline
/// style, children, and an optional click handler.
pub struct Element {
    pub tag: String,
    pub id: String,
    pub class_name: String,
    pub text: String,
    pub attributes: BTreeMap<String, String>,
    pub style: Style,
    pub children: Vec<ElementHandle>,
    pub on_click: Option<ClickHandler>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            id: String::new(),
            class_name: String::new(),
            text: String::new(),
            attributes: BTreeMap::new(),
            style: Style::default(),
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn into_handle(self) -> ElementHandle {
        Rc::new(RefCell::new(self))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(parent: &ElementHandle, child: ElementHandle) {
        parent.borrow_mut().children.push(child);
    }

    /// Dispatch a click on `handle`, invoking its handler if one is wired.
    ///
    /// The handler is cloned out before invocation so it may freely borrow
    /// other elements in the tree (including this one's ancestors).
    pub fn click(handle: &ElementHandle) {
        let (handler, event) = {
            let element = handle.borrow();
            let event = ClickEvent {
                target_id: element.id.clone(),
            };
            (element.on_click.clone(), event)
        };

        if let Some(handler) = handler {
            handler(&event);
        }
    }
}
