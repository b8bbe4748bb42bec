//! Flattened navigation list over categorized search results.
//!
//! The panel renders four categorized sections, but keyboard navigation
//! needs one ordered, index-addressable list. Categories are capped
//! (projects 3, profiles 3, posts 3, technologies 5) and concatenated in a
//! fixed order; a (category, item) → flat index lookup is built alongside so
//! rendering never has to search the list to find a row's index.

use std::collections::HashMap;

use api::models::SearchResults;

pub const MAX_PROJECTS: usize = 3;
pub const MAX_PROFILES: usize = 3;
pub const MAX_POSTS: usize = 3;
pub const MAX_TECHNOLOGIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Projects,
    Profiles,
    Posts,
    Technologies,
}

/// One navigable row: where Enter/click goes and what the row says.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchItem {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedResults {
    items: Vec<SearchItem>,
    index: HashMap<(Category, usize), usize>,
}

impl FlattenedResults {
    /// Build the flat list once per result-set change.
    ///
    /// `username` is the portfolio context, when there is one: post links go
    /// under `/{username}/blog/` instead of `/blog/`.
    pub fn new(results: &SearchResults, username: Option<&str>) -> Self {
        let mut items = Vec::new();
        let mut index = HashMap::new();

        for (i, project) in results.projects.iter().take(MAX_PROJECTS).enumerate() {
            index.insert((Category::Projects, i), items.len());
            items.push(SearchItem {
                url: format!("/projects/{}", project.id),
                label: project.title.clone(),
            });
        }

        for (i, profile) in results.profiles.iter().take(MAX_PROFILES).enumerate() {
            index.insert((Category::Profiles, i), items.len());
            items.push(SearchItem {
                url: format!("/{}", profile.user.username),
                label: profile.user.display_name(),
            });
        }

        for (i, post) in results.posts.iter().take(MAX_POSTS).enumerate() {
            index.insert((Category::Posts, i), items.len());
            let url = match username {
                Some(owner) => format!("/{owner}/blog/{}", post.slug),
                None => format!("/blog/{}", post.slug),
            };
            items.push(SearchItem {
                url,
                label: post.title.clone(),
            });
        }

        for (i, tech) in results.technologies.iter().take(MAX_TECHNOLOGIES).enumerate() {
            index.insert((Category::Technologies, i), items.len());
            items.push(SearchItem {
                url: format!("/projects?technology={}", tech.id),
                label: tech.name.clone(),
            });
        }

        Self { items, index }
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&SearchItem> {
        self.items.get(i)
    }

    /// Flat index of the `item`-th entry of `category`, if it made the cap.
    pub fn flat_index(&self, category: Category, item: usize) -> Option<usize> {
        self.index.get(&(category, item)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{Post, Project, SearchProfile, Technology, UserSummary};

    fn project(id: &str, title: &str) -> Project {
        Project {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    fn profile(username: &str, first: &str, last: &str) -> SearchProfile {
        SearchProfile {
            id: format!("profile-{username}"),
            user: UserSummary {
                id: format!("user-{username}"),
                username: username.into(),
                first_name: Some(first.into()),
                last_name: Some(last.into()),
                email: None,
            },
        }
    }

    fn post(slug: &str, title: &str) -> Post {
        Post {
            id: format!("post-{slug}"),
            title: title.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    fn tech(id: &str, name: &str) -> Technology {
        Technology {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn caps_each_category_and_preserves_order() {
        let results = SearchResults {
            projects: (0..5).map(|i| project(&format!("p{i}"), &format!("Project {i}"))).collect(),
            profiles: (0..4).map(|i| profile(&format!("user{i}"), "First", "Last")).collect(),
            posts: (0..4).map(|i| post(&format!("s{i}"), &format!("Post {i}"))).collect(),
            technologies: (0..7).map(|i| tech(&format!("t{i}"), &format!("Tech {i}"))).collect(),
        };
        let flat = FlattenedResults::new(&results, None);

        assert_eq!(flat.len(), 3 + 3 + 3 + 5);
        assert_eq!(flat.get(0).unwrap().url, "/projects/p0");
        assert_eq!(flat.get(3).unwrap().url, "/user0");
        assert_eq!(flat.get(6).unwrap().url, "/blog/s0");
        assert_eq!(flat.get(9).unwrap().url, "/projects?technology=t0");
        assert_eq!(flat.get(13).unwrap().url, "/projects?technology=t4");
    }

    #[test]
    fn length_is_sum_of_capped_categories() {
        let results = SearchResults {
            projects: vec![project("p1", "A"), project("p2", "B")],
            profiles: vec![profile("ada", "Ada", "Lovelace")],
            posts: vec![],
            technologies: (0..4).map(|i| tech(&format!("t{i}"), "T")).collect(),
        };
        let flat = FlattenedResults::new(&results, None);
        // min(3,2) + min(3,1) + min(3,0) + min(5,4)
        assert_eq!(flat.len(), 7);
        // [project, project, profile, tech, tech, tech, tech]
        assert_eq!(flat.get(3).unwrap().url, "/projects?technology=t0");
    }

    #[test]
    fn post_urls_respect_portfolio_context() {
        let results = SearchResults {
            posts: vec![post("hello-world", "Hello")],
            ..Default::default()
        };
        let bare = FlattenedResults::new(&results, None);
        assert_eq!(bare.get(0).unwrap().url, "/blog/hello-world");

        let scoped = FlattenedResults::new(&results, Some("ada"));
        assert_eq!(scoped.get(0).unwrap().url, "/ada/blog/hello-world");
    }

    #[test]
    fn flat_index_lookup_matches_positions() {
        let results = SearchResults {
            projects: vec![project("p1", "A")],
            profiles: vec![profile("ada", "Ada", "Lovelace")],
            posts: vec![post("s", "S")],
            technologies: vec![tech("t1", "Rust")],
        };
        let flat = FlattenedResults::new(&results, None);
        assert_eq!(flat.flat_index(Category::Projects, 0), Some(0));
        assert_eq!(flat.flat_index(Category::Profiles, 0), Some(1));
        assert_eq!(flat.flat_index(Category::Posts, 0), Some(2));
        assert_eq!(flat.flat_index(Category::Technologies, 0), Some(3));
        // Beyond the cap never indexes.
        assert_eq!(flat.flat_index(Category::Projects, 3), None);
    }

    #[test]
    fn profile_label_falls_back_to_username() {
        let mut pr = profile("grace", "", "");
        pr.user.first_name = None;
        pr.user.last_name = None;
        let results = SearchResults {
            profiles: vec![pr],
            ..Default::default()
        };
        let flat = FlattenedResults::new(&results, None);
        assert_eq!(flat.get(0).unwrap().label, "grace");
    }
}
