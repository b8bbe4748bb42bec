//! Route components, one module per page.

mod public_layout;
pub use public_layout::PublicLayout;

mod admin_layout;
pub use admin_layout::AdminLayout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod verify_email;
pub use verify_email::VerifyEmail;

mod search_page;
pub use search_page::SearchPage;

mod projects;
pub use projects::{ProjectDetail, Projects};

mod blog;
pub use blog::{Blog, BlogPost, PortfolioBlog, PortfolioBlogPost};

mod portfolio;
pub use portfolio::Portfolio;

mod admin;
pub use admin::{
    AdminDashboard, AdminMessages, AdminPostEdit, AdminPostNew, AdminPosts, AdminProfile,
    AdminProjectEdit, AdminProjectNew, AdminProjects, AdminSecurity, AdminSkills, AdminTags,
    AdminTechnologies, AdminUsers,
};
