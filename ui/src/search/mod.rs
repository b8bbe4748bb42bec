//! Global search widget.
//!
//! Free-text query over projects, profiles, posts and technologies with a
//! trailing-edge debounce, one shared keyboard/mouse highlight, and a
//! document-level `/` shortcut. Results for the four categories are
//! flattened into one addressable list ([`flatten`]); the key contract
//! lives in [`keys`].
//!
//! Overlapping fetches are serialized by a sequence tag: every scheduled
//! fetch records the sequence it was issued under and drops its response if
//! a newer one has been issued since. That keeps "results shown belong to
//! the latest settled query" without network-level cancellation.

use dioxus::prelude::*;

use api::models::SearchResults;
use api::services::search as search_service;

pub mod flatten;
pub mod keys;

pub use flatten::{Category, FlattenedResults, SearchItem};
pub use keys::{EnterAction, MIN_QUERY_LEN};

use crate::hotkeys;
use crate::sleep_ms;
use crate::Icon;

const DEBOUNCE_MS: u32 = 300;
const MAX_SUGGESTIONS: usize = 5;

const ROOT_ID: &str = "global-search";
const INPUT_ID: &str = "global-search-input";

fn item_id(index: usize) -> String {
    format!("global-search-item-{index}")
}

/// Shared state bundle so the debounce task, the DOM listeners and the
/// rsx handlers all poke at the same signals.
#[derive(Clone, Copy)]
struct SearchState {
    query: Signal<String>,
    results: Signal<Option<SearchResults>>,
    suggestions: Signal<Vec<String>>,
    loading: Signal<bool>,
    open: Signal<bool>,
    focused: Signal<isize>,
    /// Gate serializing overlapping fetches; stale completions bail out.
    seq: Signal<keys::SequenceGate>,
}

impl SearchState {
    fn close(mut self) {
        self.open.set(false);
        self.focused.set(-1);
    }

    fn clear_and_close(mut self) {
        self.query.set(String::new());
        self.close();
    }
}

/// Restart the debounce window for the current query and fetch once it
/// settles. Search and suggestions are issued together.
fn schedule_search(mut state: SearchState) {
    let ticket = state.seq.write().issue();

    spawn(async move {
        sleep_ms(DEBOUNCE_MS).await;
        if !(state.seq)().is_current(ticket) {
            // Another keystroke restarted the window.
            return;
        }

        let query = (state.query)().trim().to_string();
        if !keys::searchable(&query) {
            state.results.set(None);
            state.suggestions.set(Vec::new());
            state.open.set(false);
            state.focused.set(-1);
            return;
        }

        state.loading.set(true);
        let (results, suggestions) = futures::join!(
            search_service::global(&query),
            search_service::suggestions(&query),
        );
        if !(state.seq)().is_current(ticket) {
            // A newer fetch was issued while this one was in flight.
            return;
        }
        state.loading.set(false);

        match (results, suggestions) {
            (Ok(results), Ok(suggestions)) => {
                state.results.set(Some(results));
                state.suggestions.set(suggestions.flatten());
                state.open.set(true);
                state.focused.set(-1);
            }
            (results, suggestions) => {
                // Keep whatever was on screen; no banner, no retry.
                if let Err(e) = results {
                    tracing::error!("search failed: {e}");
                }
                if let Err(e) = suggestions {
                    tracing::error!("suggestions failed: {e}");
                }
            }
        }
    });
}

/// Search box with a categorized dropdown panel.
///
/// `username` scopes blog post links to a portfolio owner when the widget
/// sits on a public portfolio page.
#[component]
pub fn GlobalSearch(#[props(default)] username: Option<String>) -> Element {
    let state = SearchState {
        query: use_signal(String::new),
        results: use_signal(|| None),
        suggestions: use_signal(Vec::new),
        loading: use_signal(|| false),
        open: use_signal(|| false),
        focused: use_signal(|| -1),
        seq: use_signal(keys::SequenceGate::default),
    };
    let SearchState {
        query,
        results,
        suggestions,
        loading,
        open,
        mut focused,
        ..
    } = state;

    let nav = use_navigator();

    let owner = username.clone();
    let flattened = use_memo(move || {
        FlattenedResults::new(&results().unwrap_or_default(), owner.as_deref())
    });

    // Document-level keyboard contract and click-outside dismissal. The
    // guards live in the hook slot, so unmounting this widget drops them
    // and detaches both listeners; a later mount starts from zero.
    #[cfg(target_arch = "wasm32")]
    let _listeners = use_hook(|| {
        let mut state = state;
        let keydown = hotkeys::on_document_keydown(move |evt: web_sys::KeyboardEvent| {
            match evt.key().as_str() {
                "/" => {
                    if hotkeys::focus_context() == hotkeys::FocusContext::Default {
                        evt.prevent_default();
                        hotkeys::focus_element(INPUT_ID);
                        state.open.set(true);
                        state.focused.set(-1);
                    }
                }
                "Escape" if state.open() => {
                    state.close();
                    hotkeys::blur_active();
                }
                "ArrowDown" if state.open() => {
                    evt.prevent_default();
                    let next = keys::step_down(state.focused(), flattened().len());
                    state.focused.set(next);
                    if next >= 0 {
                        hotkeys::scroll_into_view(&item_id(next as usize));
                    }
                }
                "ArrowUp" if state.open() => {
                    evt.prevent_default();
                    let next = keys::step_up(state.focused());
                    state.focused.set(next);
                    if next >= 0 {
                        hotkeys::scroll_into_view(&item_id(next as usize));
                    }
                }
                "Enter" if state.open() => {
                    match keys::resolve_enter(state.focused(), flattened().items(), &(state.query)()) {
                        EnterAction::Navigate(url) => {
                            evt.prevent_default();
                            state.clear_and_close();
                            nav.push(url.as_str());
                        }
                        EnterAction::FullSearch(q) => {
                            evt.prevent_default();
                            state.close();
                            nav.push(format!("/search?q={}", urlencoding::encode(&q)).as_str());
                        }
                        EnterAction::None => {}
                    }
                }
                _ => {}
            }
        });

        // Click outside closes the panel but keeps query and results.
        let mousedown = hotkeys::on_document_mousedown(move |evt: web_sys::MouseEvent| {
            if state.open() && !hotkeys::event_inside(ROOT_ID, evt.target()) {
                state.open.set(false);
            }
        });

        std::rc::Rc::new((keydown, mousedown))
    });

    // Row shared by result sections: one highlight state for keyboard and mouse.
    let activate = move |url: String| {
        state.clear_and_close();
        nav.push(url.as_str());
    };

    let rs = results().unwrap_or_default();
    let total = rs.total();
    let current_query = query();
    let panel_open = open() && keys::searchable(&current_query);

    rsx! {
        div {
            id: ROOT_ID,
            class: "global-search",

            div {
                class: "global-search-box",
                span {
                    class: "global-search-icon",
                    Icon { icon: crate::icons::FaMagnifyingGlass, width: 16, height: 16 }
                }
                input {
                    id: INPUT_ID,
                    class: "global-search-input",
                    r#type: "text",
                    value: "{current_query}",
                    placeholder: "Search projects, profiles, posts...  ( / )",
                    aria_label: "Search projects, profiles and posts",
                    autocomplete: "off",
                    oninput: move |evt: FormEvent| {
                        let mut state = state;
                        state.query.set(evt.value());
                        schedule_search(state);
                    },
                }
                if loading() {
                    span { class: "global-search-spinner" }
                }
            }

            if panel_open {
                div {
                    class: "global-search-panel",
                    role: "listbox",
                    aria_label: "Search results",

                    if total == 0 {
                        div { class: "global-search-empty", "No results for \"{current_query}\"" }
                    } else {
                        if !rs.projects.is_empty() {
                            div { class: "global-search-section",
                                div { class: "global-search-heading", "Projects ({rs.projects.len()})" }
                                for (i, project) in rs.projects.iter().take(flatten::MAX_PROJECTS).enumerate() {
                                    {
                                        let index = flattened().flat_index(Category::Projects, i).unwrap_or_default();
                                        let url = format!("/projects/{}", project.id);
                                        rsx! {
                                            div {
                                                key: "{project.id}",
                                                id: "{item_id(index)}",
                                                class: if focused() == index as isize { "global-search-row focused" } else { "global-search-row" },
                                                role: "option",
                                                aria_selected: focused() == index as isize,
                                                onmouseenter: move |_| focused.set(index as isize),
                                                onmouseleave: move |_| focused.set(-1),
                                                onclick: move |_| activate(url.clone()),
                                                div { class: "global-search-row-title", "{project.title}" }
                                                div { class: "global-search-row-sub", "{project.description}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if !rs.profiles.is_empty() {
                            div { class: "global-search-section",
                                div { class: "global-search-heading", "Profiles ({rs.profiles.len()})" }
                                for (i, profile) in rs.profiles.iter().take(flatten::MAX_PROFILES).enumerate() {
                                    {
                                        let index = flattened().flat_index(Category::Profiles, i).unwrap_or_default();
                                        let url = format!("/{}", profile.user.username);
                                        rsx! {
                                            div {
                                                key: "{profile.id}",
                                                id: "{item_id(index)}",
                                                class: if focused() == index as isize { "global-search-row focused" } else { "global-search-row" },
                                                role: "option",
                                                aria_selected: focused() == index as isize,
                                                onmouseenter: move |_| focused.set(index as isize),
                                                onmouseleave: move |_| focused.set(-1),
                                                onclick: move |_| activate(url.clone()),
                                                div { class: "global-search-row-title", "{profile.user.display_name()}" }
                                                div { class: "global-search-row-sub", "@{profile.user.username}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if !rs.posts.is_empty() {
                            div { class: "global-search-section",
                                div { class: "global-search-heading", "Posts ({rs.posts.len()})" }
                                for (i, post) in rs.posts.iter().take(flatten::MAX_POSTS).enumerate() {
                                    {
                                        let index = flattened().flat_index(Category::Posts, i).unwrap_or_default();
                                        let url = flattened()
                                            .get(index)
                                            .map(|item| item.url.clone())
                                            .unwrap_or_default();
                                        let excerpt = post.excerpt.clone().unwrap_or_default();
                                        rsx! {
                                            div {
                                                key: "{post.id}",
                                                id: "{item_id(index)}",
                                                class: if focused() == index as isize { "global-search-row focused" } else { "global-search-row" },
                                                role: "option",
                                                aria_selected: focused() == index as isize,
                                                onmouseenter: move |_| focused.set(index as isize),
                                                onmouseleave: move |_| focused.set(-1),
                                                onclick: move |_| activate(url.clone()),
                                                div { class: "global-search-row-title", "{post.title}" }
                                                div { class: "global-search-row-sub", "{excerpt}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if !rs.technologies.is_empty() {
                            div { class: "global-search-section",
                                div { class: "global-search-heading", "Technologies ({rs.technologies.len()})" }
                                div { class: "global-search-chips",
                                    for (i, tech) in rs.technologies.iter().take(flatten::MAX_TECHNOLOGIES).enumerate() {
                                        {
                                            let index = flattened().flat_index(Category::Technologies, i).unwrap_or_default();
                                            let url = format!("/projects?technology={}", tech.id);
                                            rsx! {
                                                button {
                                                    key: "{tech.id}",
                                                    id: "{item_id(index)}",
                                                    class: if focused() == index as isize { "global-search-chip focused" } else { "global-search-chip" },
                                                    aria_label: "Filter by {tech.name}",
                                                    onmouseenter: move |_| focused.set(index as isize),
                                                    onmouseleave: move |_| focused.set(-1),
                                                    onclick: move |_| activate(url.clone()),
                                                    "{tech.name}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if !suggestions().is_empty() {
                            div { class: "global-search-section global-search-suggestions",
                                div { class: "global-search-heading", "Suggestions" }
                                div { class: "global-search-chips",
                                    for suggestion in suggestions().into_iter().take(MAX_SUGGESTIONS) {
                                        button {
                                            key: "{suggestion}",
                                            class: "global-search-chip suggestion",
                                            onclick: move |_| {
                                                let mut state = state;
                                                state.query.set(suggestion.clone());
                                                schedule_search(state);
                                            },
                                            "{suggestion}"
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "global-search-footer",
                            button {
                                class: "global-search-all",
                                onclick: move |_| {
                                    let q = (state.query)().trim().to_string();
                                    state.clear_and_close();
                                    nav.push(format!("/search?q={}", urlencoding::encode(&q)).as_str());
                                },
                                "View all results ({total})"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{Post, Project, SearchProfile, Technology, UserSummary};

    // End-to-end over the pure model: "react" returns 2 projects, 1
    // profile, 0 posts, 4 technologies.
    #[test]
    fn react_scenario_flattens_to_seven_and_navigates_to_technology() {
        let results = SearchResults {
            projects: vec![
                Project { id: "p1".into(), title: "React dashboard".into(), ..Default::default() },
                Project { id: "p2".into(), title: "React widgets".into(), ..Default::default() },
            ],
            profiles: vec![SearchProfile {
                id: "pr1".into(),
                user: UserSummary { id: "u1".into(), username: "reactdev".into(), ..Default::default() },
            }],
            posts: vec![],
            technologies: (1..=4)
                .map(|i| Technology { id: format!("t{i}"), name: format!("Tech {i}"), ..Default::default() })
                .collect(),
        };
        let flat = FlattenedResults::new(&results, None);
        assert_eq!(flat.len(), 7);

        // Walk down to the first technology (flat index 3) and press Enter.
        let mut focused = -1;
        while focused < 3 {
            focused = keys::step_down(focused, flat.len());
        }
        assert_eq!(
            keys::resolve_enter(focused, flat.items(), "react"),
            EnterAction::Navigate("/projects?technology=t1".into())
        );
    }

    #[test]
    fn no_match_scenario_has_no_rows() {
        let results = SearchResults::default();
        assert_eq!(results.total(), 0);
        let flat = FlattenedResults::new(&results, None);
        assert!(flat.is_empty());
        // With nothing focused and a searchable query, Enter falls through
        // to the full results page.
        assert_eq!(
            keys::resolve_enter(-1, flat.items(), "zzz-no-match"),
            EnterAction::FullSearch("zzz-no-match".into())
        );
    }
}
