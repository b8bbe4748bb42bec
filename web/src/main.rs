use dioxus::prelude::*;

use ui::AuthProvider;

use views::{
    AdminDashboard, AdminLayout, AdminMessages, AdminPostEdit, AdminPostNew, AdminPosts,
    AdminProfile, AdminProjectEdit, AdminProjectNew, AdminProjects, AdminSecurity, AdminSkills,
    AdminTags, AdminTechnologies, AdminUsers, Blog, BlogPost, ForgotPassword, Home, Login,
    Portfolio, PortfolioBlog, PortfolioBlogPost, ProjectDetail, Projects, PublicLayout, Register,
    SearchPage, VerifyEmail,
};

mod views;

/// Static paths are listed before the dynamic `/:username` portfolio
/// routes; route matching tries variants in order.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/verify-email/:token")]
        VerifyEmail { token: String },
        #[route("/search?:q")]
        SearchPage { q: String },
        #[route("/projects?:technology")]
        Projects { technology: String },
        #[route("/projects/:id")]
        ProjectDetail { id: String },
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogPost { slug: String },
    #[end_layout]

    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/projects")]
        AdminProjects {},
        #[route("/admin/projects/new")]
        AdminProjectNew {},
        #[route("/admin/projects/:id/edit")]
        AdminProjectEdit { id: String },
        #[route("/admin/posts")]
        AdminPosts {},
        #[route("/admin/posts/new")]
        AdminPostNew {},
        #[route("/admin/posts/:id/edit")]
        AdminPostEdit { id: String },
        #[route("/admin/tags")]
        AdminTags {},
        #[route("/admin/skills")]
        AdminSkills {},
        #[route("/admin/technologies")]
        AdminTechnologies {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/messages")]
        AdminMessages {},
        #[route("/admin/profile")]
        AdminProfile {},
        #[route("/admin/security")]
        AdminSecurity {},
    #[end_layout]

    // Portfolio routes match any remaining top-level segment; keep them last.
    #[layout(PublicLayout)]
        #[route("/:username")]
        Portfolio { username: String },
        #[route("/:username/blog")]
        PortfolioBlog { username: String },
        #[route("/:username/blog/:slug")]
        PortfolioBlogPost { username: String, slug: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting folio web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
