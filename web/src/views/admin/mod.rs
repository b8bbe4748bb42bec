//! Admin panel pages. Everything here renders inside
//! [`super::AdminLayout`], which has already enforced the admin guard.

mod dashboard;
pub use dashboard::AdminDashboard;

mod projects;
pub use projects::AdminProjects;

mod project_editor;
pub use project_editor::{AdminProjectEdit, AdminProjectNew};

mod posts;
pub use posts::AdminPosts;

mod post_editor;
pub use post_editor::{AdminPostEdit, AdminPostNew};

mod tags;
pub use tags::AdminTags;

mod skills;
pub use skills::AdminSkills;

mod technologies;
pub use technologies::AdminTechnologies;

mod users;
pub use users::AdminUsers;

mod messages;
pub use messages::AdminMessages;

mod profile;
pub use profile::AdminProfile;

mod security;
pub use security::AdminSecurity;
