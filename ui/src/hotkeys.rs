//! Document-level keyboard and pointer plumbing.
//!
//! Global shortcuts are dispatched against a focus context instead of
//! inline tag checks: a shortcut like `/` only fires in
//! [`FocusContext::Default`], never while the user is typing in a text
//! control. Registration hands back a [`ListenerGuard`]; dropping it
//! detaches the listener, so a component that unmounts takes its
//! handlers with it.

/// Where keyboard focus currently sits, as far as shortcuts care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusContext {
    Default,
    EditingText,
}

/// Classify an element by tag name and contenteditable attribute.
pub fn classify_focus(tag_name: &str, contenteditable: Option<&str>) -> FocusContext {
    let tag = tag_name.to_ascii_uppercase();
    if tag == "INPUT" || tag == "TEXTAREA" || contenteditable == Some("true") {
        FocusContext::EditingText
    } else {
        FocusContext::Default
    }
}

/// The focus context of `document.activeElement`.
#[cfg(target_arch = "wasm32")]
pub fn focus_context() -> FocusContext {
    let Some(active) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
    else {
        return FocusContext::Default;
    };
    let editable = active.get_attribute("contenteditable");
    classify_focus(&active.tag_name(), editable.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_context() -> FocusContext {
    FocusContext::Default
}

/// Owns an attached document listener; dropping the guard detaches it.
///
/// Holding the registered closure inside the teardown keeps it alive
/// exactly as long as the listener is attached. A guard that is never
/// dropped is the old leak, so callers must keep it for the lifetime of
/// the component that registered it and no longer.
pub struct ListenerGuard {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn on_document_keydown(
    handler: impl FnMut(web_sys::KeyboardEvent) + 'static,
) -> ListenerGuard {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    ListenerGuard::new(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
    })
}

#[cfg(target_arch = "wasm32")]
pub fn on_document_mousedown(
    handler: impl FnMut(web_sys::MouseEvent) + 'static,
) -> ListenerGuard {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ = document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    }
    ListenerGuard::new(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        }
    })
}

/// Move keyboard focus to the element with `id`.
#[cfg(target_arch = "wasm32")]
pub fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = el.focus();
        }
    }
}

/// Drop keyboard focus from whatever holds it.
#[cfg(target_arch = "wasm32")]
pub fn blur_active() {
    use wasm_bindgen::JsCast;

    if let Some(active) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
    {
        if let Ok(el) = active.dyn_into::<web_sys::HtmlElement>() {
            let _ = el.blur();
        }
    }
}

/// Scroll the element with `id` into view, nearest edge.
#[cfg(target_arch = "wasm32")]
pub fn scroll_into_view(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_block(web_sys::ScrollLogicalPosition::Nearest);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Whether the event target sits inside the DOM subtree rooted at `root_id`.
#[cfg(target_arch = "wasm32")]
pub fn event_inside(root_id: &str, event_target: Option<web_sys::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(root_id))
    else {
        return false;
    };
    let Some(target) = event_target.and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    root.contains(Some(&target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_controls_are_editing_context() {
        assert_eq!(classify_focus("INPUT", None), FocusContext::EditingText);
        assert_eq!(classify_focus("textarea", None), FocusContext::EditingText);
        assert_eq!(classify_focus("DIV", Some("true")), FocusContext::EditingText);
    }

    #[test]
    fn buttons_and_links_are_default_context() {
        assert_eq!(classify_focus("BUTTON", None), FocusContext::Default);
        assert_eq!(classify_focus("A", None), FocusContext::Default);
        assert_eq!(classify_focus("DIV", Some("false")), FocusContext::Default);
    }

    #[test]
    fn guard_runs_teardown_exactly_once_on_drop() {
        use std::cell::Cell;
        use std::rc::Rc;

        let detached = Rc::new(Cell::new(0u32));
        let counter = detached.clone();
        let guard = ListenerGuard::new(move || counter.set(counter.get() + 1));

        assert_eq!(detached.get(), 0);
        drop(guard);
        assert_eq!(detached.get(), 1);
    }

    // Re-registering after teardown must leave one live handler, not two:
    // a second registration only ever coexists with a dropped guard.
    #[test]
    fn reregistration_after_drop_leaves_a_single_live_handler() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let live: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        live.borrow_mut().push("first");
        let first = {
            let live = live.clone();
            ListenerGuard::new(move || live.borrow_mut().retain(|name| *name != "first"))
        };

        // Component unmounts, then a fresh mount registers again.
        drop(first);
        live.borrow_mut().push("second");
        let _second = {
            let live = live.clone();
            ListenerGuard::new(move || live.borrow_mut().retain(|name| *name != "second"))
        };

        assert_eq!(live.borrow().as_slice(), ["second"]);
    }
}
