//! Client-side project list filtering and pagination.
//!
//! Pure, deterministic array processing: status filter, then a
//! case-insensitive substring match on title and description, then
//! fixed-size page slicing. The admin project list owns the signals; this
//! module owns the math.

use api::models::{Project, ProjectStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
    Archived,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Published,
        StatusFilter::Draft,
        StatusFilter::Archived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Published => "Published",
            StatusFilter::Draft => "Drafts",
            StatusFilter::Archived => "Archived",
        }
    }

    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => status == ProjectStatus::Published,
            StatusFilter::Draft => status == ProjectStatus::Draft,
            StatusFilter::Archived => status == ProjectStatus::Archived,
        }
    }
}

/// Status filter, then case-insensitive substring match on title and
/// description. Indices into the source slice, in source order.
pub fn filter_projects(projects: &[Project], filter: StatusFilter, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p.status))
        .filter(|(_, p)| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Number of pages for `len` items. Zero items is zero pages.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Half-open index range of `page` (1-based) into a list of `len` items.
pub fn page_slice(len: usize, page: usize, per_page: usize) -> std::ops::Range<usize> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

/// Page-number buttons: at most five, centered on the current page when
/// possible, clamped at both ends.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    if total <= 5 {
        return (1..=total).collect();
    }
    let start = if current <= 3 {
        1
    } else if current >= total - 2 {
        total - 4
    } else {
        current - 2
    };
    (start..start + 5).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, description: &str, status: ProjectStatus) -> Project {
        Project {
            id: title.to_lowercase(),
            title: title.into(),
            description: description.into(),
            status,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("Folio", "portfolio SPA", ProjectStatus::Published),
            project("Raytracer", "toy renderer", ProjectStatus::Draft),
            project("Old Blog", "retired site", ProjectStatus::Archived),
            project("Portfolio v2", "rewrite", ProjectStatus::Published),
        ]
    }

    #[test]
    fn filtered_never_exceeds_total() {
        let projects = sample();
        for filter in StatusFilter::ALL {
            for query in ["", "port", "zzz", "RENDERER"] {
                let filtered = filter_projects(&projects, filter, query);
                assert!(filtered.len() <= projects.len());
            }
        }
    }

    #[test]
    fn status_then_substring_match_is_case_insensitive() {
        let projects = sample();
        let hits = filter_projects(&projects, StatusFilter::Published, "PORTFOLIO");
        // "Folio" matches on description, "Portfolio v2" on title.
        assert_eq!(hits, vec![0, 3]);

        let none = filter_projects(&projects, StatusFilter::Draft, "portfolio");
        assert!(none.is_empty());
    }

    #[test]
    fn page_slice_never_exceeds_per_page() {
        for len in 0..30 {
            for per_page in [1, 5, 10] {
                for page in 1..6 {
                    let range = page_slice(len, page, per_page);
                    assert!(range.len() <= per_page);
                    assert!(range.end <= len);
                }
            }
        }
    }

    #[test]
    fn page_slice_covers_the_tail() {
        // 23 items, 10 per page: pages of 10, 10, 3.
        assert_eq!(page_slice(23, 1, 10), 0..10);
        assert_eq!(page_slice(23, 2, 10), 10..20);
        assert_eq!(page_slice(23, 3, 10), 20..23);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn page_window_is_centered_and_clamped() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn page_window_never_exceeds_five() {
        for total in 0..20 {
            for current in 1..=total.max(1) {
                assert!(page_window(current, total).len() <= 5);
            }
        }
    }
}
