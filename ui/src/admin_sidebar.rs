use dioxus::prelude::*;

use crate::icons::{
    FaEnvelope, FaFolderOpen, FaHouse, FaListCheck, FaNewspaper, FaScrewdriverWrench,
    FaShieldHalved, FaTags, FaUser, FaUsers,
};
use crate::{use_auth, Icon, LogoutButton};

/// Admin panel navigation.
#[component]
pub fn AdminSidebar(current_path: String) -> Element {
    let auth = use_auth();
    // Dashboard only highlights on an exact match; everything else owns a
    // subtree (editors, detail pages).
    let class_for = |path: &str| {
        let active = if path == "/admin" {
            current_path == "/admin"
        } else {
            current_path.starts_with(path)
        };
        if active {
            "admin-nav-item active"
        } else {
            "admin-nav-item"
        }
    };

    rsx! {
        aside {
            class: "admin-sidebar",
            div {
                class: "admin-sidebar-user",
                if let Some(user) = auth().user {
                    span { class: "admin-sidebar-name", "{user.display_name()}" }
                    span { class: "admin-sidebar-email", "{user.email}" }
                }
            }

            nav {
                class: "admin-nav",
                Link { class: class_for("/admin"), to: "/admin",
                    Icon { icon: FaHouse, width: 14, height: 14 }
                    span { "Dashboard" }
                }
                Link { class: class_for("/admin/projects"), to: "/admin/projects",
                    Icon { icon: FaFolderOpen, width: 14, height: 14 }
                    span { "Projects" }
                }
                Link { class: class_for("/admin/posts"), to: "/admin/posts",
                    Icon { icon: FaNewspaper, width: 14, height: 14 }
                    span { "Blog" }
                }
                Link { class: class_for("/admin/tags"), to: "/admin/tags",
                    Icon { icon: FaTags, width: 14, height: 14 }
                    span { "Tags" }
                }
                Link { class: class_for("/admin/skills"), to: "/admin/skills",
                    Icon { icon: FaListCheck, width: 14, height: 14 }
                    span { "Skills" }
                }
                Link { class: class_for("/admin/technologies"), to: "/admin/technologies",
                    Icon { icon: FaScrewdriverWrench, width: 14, height: 14 }
                    span { "Technologies" }
                }
                Link { class: class_for("/admin/users"), to: "/admin/users",
                    Icon { icon: FaUsers, width: 14, height: 14 }
                    span { "Users" }
                }
                Link { class: class_for("/admin/messages"), to: "/admin/messages",
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    span { "Messages" }
                }
                Link { class: class_for("/admin/profile"), to: "/admin/profile",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { "Profile" }
                }
                Link { class: class_for("/admin/security"), to: "/admin/security",
                    Icon { icon: FaShieldHalved, width: 14, height: 14 }
                    span { "Security" }
                }
            }

            div {
                class: "admin-sidebar-footer",
                LogoutButton {}
            }
        }
    }
}
