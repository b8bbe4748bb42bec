use dioxus::prelude::*;

use api::services::profile;
use api::services::skills::{self, SkillInput};
use ui::components::{Button, ButtonVariant, ConfirmDialog, ErrorAlert, LoadingSpinner};
use ui::use_query;

/// Skills hang off the admin's profile; without one the page points at
/// the profile editor instead of offering a form that cannot save.
#[component]
pub fn AdminSkills() -> Element {
    let profile = use_query(profile::mine);
    let mut list = use_query(skills::mine);

    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut level = use_signal(|| 3u8);
    let mut error = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| None::<(String, String)>);

    let mut profile_id = use_signal(String::new);
    use_effect(move || {
        if let Some(p) = profile.data() {
            profile_id.set(p.id);
        }
    });

    let mut create = move |_| {
        let name_value = name().trim().to_string();
        let category_value = category().trim().to_string();
        if name_value.is_empty() || category_value.is_empty() {
            error.set(Some("Name and category are required".into()));
            return;
        }
        let target_profile = profile_id();
        if target_profile.is_empty() {
            error.set(Some("Create your profile first".into()));
            return;
        }
        spawn(async move {
            let input = SkillInput {
                name: Some(name_value),
                category: Some(category_value),
                level: Some(level()),
                icon: None,
            };
            match skills::create(&target_profile, &input).await {
                Ok(_) => {
                    name.set(String::new());
                    list.refetch();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut set_level = move |id: String, new_level: u8| {
        spawn(async move {
            let input = SkillInput {
                level: Some(new_level),
                ..Default::default()
            };
            match skills::update(&id, &input).await {
                Ok(_) => list.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let mut delete_skill = move |id: String| {
        spawn(async move {
            match skills::delete(&id).await {
                Ok(()) => list.refetch(),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        h1 { "Skills" }

        if let Some(message) = error() {
            ErrorAlert { message, onclose: move |_| error.set(None) }
        }

        if !profile.loading() && profile.data().is_none() {
            p {
                class: "empty-note",
                "Skills live on your profile. "
                Link { to: "/admin/profile", "Create it first." }
            }
        } else {
            form {
                class: "inline-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    create(());
                },
                input {
                    class: "field-input",
                    placeholder: "Skill name",
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "field-input",
                    placeholder: "Category (e.g. Backend)",
                    value: "{category()}",
                    oninput: move |evt| category.set(evt.value()),
                }
                select {
                    class: "field-input",
                    onchange: move |evt| {
                        if let Ok(n) = evt.value().parse::<u8>() {
                            level.set(n.clamp(1, 5));
                        }
                    },
                    for n in 1..=5u8 {
                        option { key: "{n}", value: "{n}", selected: n == level(), "Level {n}" }
                    }
                }
                Button { r#type: "submit", "Add skill" }
            }

            if list.loading() {
                LoadingSpinner {}
            } else if let Some(skills_list) = list.data() {
                if skills_list.is_empty() {
                    p { class: "empty-note", "No skills yet." }
                } else {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Level" }
                                th { "" }
                            }
                        }
                        tbody {
                            for skill in skills_list {
                                {
                                    let id_for_level = skill.id.clone();
                                    let confirm_target = (skill.id.clone(), skill.name.clone());
                                    rsx! {
                                        tr {
                                            key: "{skill.id}",
                                            td { "{skill.name}" }
                                            td { "{skill.category}" }
                                            td {
                                                select {
                                                    class: "field-input level-select",
                                                    onchange: move |evt| {
                                                        if let Ok(n) = evt.value().parse::<u8>() {
                                                            set_level(id_for_level.clone(), n.clamp(1, 5));
                                                        }
                                                    },
                                                    for n in 1..=5u8 {
                                                        option {
                                                            key: "{n}",
                                                            value: "{n}",
                                                            selected: n == skill.level,
                                                            "{n}"
                                                        }
                                                    }
                                                }
                                            }
                                            td {
                                                class: "row-actions",
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
                }
            }
        }

        if let Some((id, skill_name)) = confirm_delete() {
            ConfirmDialog {
                title: "Delete skill",
                message: "Remove \u{201c}{skill_name}\u{201d} from your profile?",
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete_skill(id.clone());
                },
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
