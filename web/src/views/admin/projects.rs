use dioxus::prelude::*;

use api::services::projects;
use futures::join;
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, LoadingSpinner, Pagination};
use ui::listing::{self, StatusFilter};
use ui::use_query;

const PER_PAGE_CHOICES: [usize; 3] = [5, 10, 25];

/// Project management table. Filtering and pagination are pure
/// client-side array work over the fetched list; every mutation refetches
/// instead of patching local state.
#[component]
pub fn AdminProjects() -> Element {
    let mut query = use_query(|| async {
        // The plain list only returns published projects.
        let (published, drafts, archived) =
            join!(projects::list(None), projects::drafts(), projects::archived());
        let mut all = published?;
        all.extend(drafts?);
        all.extend(archived?);
        Ok(all)
    });

    let mut status = use_signal(|| StatusFilter::All);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut per_page = use_signal(|| 10usize);
    let mut action_error = use_signal(|| None::<String>);
    // (id, title) pending deletion.
    let mut confirm_delete = use_signal(|| None::<(String, String)>);

    let all = query.data().unwrap_or_default();
    let filtered = listing::filter_projects(&all, status(), &search());
    let total = listing::total_pages(filtered.len(), per_page());
    let current = page().min(total.max(1));
    let visible = &filtered[listing::page_slice(filtered.len(), current, per_page())];

    let mut toggle_featured = move |id: String| {
        spawn(async move {
            match projects::toggle_featured(&id).await {
                Ok(_) => query.refetch(),
                Err(e) => action_error.set(Some(e.user_message())),
            }
        });
    };

    let mut clone_project = move |id: String| {
        spawn(async move {
            match projects::clone_project(&id).await {
                Ok(_) => query.refetch(),
                Err(e) => action_error.set(Some(e.user_message())),
            }
        });
    };

    let mut delete_project = move |id: String| {
        spawn(async move {
            match projects::delete(&id).await {
                Ok(()) => query.refetch(),
                Err(e) => action_error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div {
            class: "page-heading",
            h1 { "Projects" }
            Link { class: "btn btn-primary", to: "/admin/projects/new", "New project" }
        }

        if let Some(message) = action_error() {
            ErrorAlert { message, onclose: move |_| action_error.set(None) }
        }

        div {
            class: "list-controls",
            div {
                class: "filter-tabs",
                for filter in StatusFilter::ALL {
                    button {
                        key: "{filter.label()}",
                        class: if filter == status() { "filter-tab active" } else { "filter-tab" },
                        onclick: move |_| {
                            status.set(filter);
                            page.set(1);
                        },
                        "{filter.label()}"
                    }
                }
            }
            input {
                class: "field-input list-search",
                placeholder: "Filter by title or description",
                value: "{search()}",
                oninput: move |evt| {
                    search.set(evt.value());
                    page.set(1);
                },
            }
            select {
                class: "field-input per-page-select",
                onchange: move |evt| {
                    if let Ok(n) = evt.value().parse::<usize>() {
                        per_page.set(n);
                        page.set(1);
                    }
                },
                for n in PER_PAGE_CHOICES {
                    option { key: "{n}", value: "{n}", selected: n == per_page(), "{n} per page" }
                }
            }
        }

        if query.loading() {
            LoadingSpinner {}
        } else if let Some(e) = query.error() {
            ErrorAlert { message: e.user_message() }
        } else if filtered.is_empty() {
            p { class: "empty-note", "No projects match." }
        } else {
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Status" }
                        th { "Featured" }
                        th { "Updated" }
                        th { "" }
                    }
                }
                tbody {
                    for index in visible.iter().copied() {
                        {
                            let project = all[index].clone();
                            let id_for_star = project.id.clone();
                            let id_for_clone = project.id.clone();
                            let confirm_target = (project.id.clone(), project.title.clone());
                            rsx! {
                                tr {
                                    key: "{project.id}",
                                    td {
                                        Link { to: "/projects/{project.id}", "{project.title}" }
                                    }
                                    td {
                                        span {
                                            class: "status-badge status-{project.status.label().to_lowercase()}",
                                            "{project.status.label()}"
                                        }
                                    }
                                    td {
                                        button {
                                            class: if project.featured { "star-btn on" } else { "star-btn" },
                                            title: "Toggle featured",
                                            onclick: move |_| toggle_featured(id_for_star.clone()),
                                            if project.featured { "\u{2605}" } else { "\u{2606}" }
                                        }
                                    }
                                    td { "{project.updated_at}" }
                                    td {
                                        class: "row-actions",
                                        Link {
                                            class: "btn btn-ghost",
                                            to: "/admin/projects/{project.id}/edit",
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| clone_project(id_for_clone.clone()),
                                            "Clone"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            class: "danger-text",
                                            onclick: move |_| confirm_delete.set(Some(confirm_target.clone())),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                current: current,
                total: total,
                on_page: move |p| page.set(p),
            }
        }

        if let Some((id, title)) = confirm_delete() {
            ConfirmDialog {
                title: "Delete project",
                message: "Delete \u{201c}{title}\u{201d}? This cannot be undone.",
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete_project(id.clone());
                },
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
