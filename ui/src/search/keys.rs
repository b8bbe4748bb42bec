//! Keyboard model for the search panel, kept free of DOM types so the
//! contract is unit-testable.
//!
//! `focused == -1` means no row is highlighted.

/// Minimum trimmed query length that triggers a search.
pub const MIN_QUERY_LEN: usize = 2;

/// ArrowDown: advance one row, never past the last.
pub fn step_down(focused: isize, len: usize) -> isize {
    if len == 0 {
        return -1;
    }
    (focused + 1).min(len as isize - 1)
}

/// ArrowUp: back one row, never below the first.
pub fn step_up(focused: isize) -> isize {
    (focused - 1).max(0)
}

/// Whether a trimmed query is long enough to search on.
pub fn searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Orders overlapping debounced fetches. Every scheduled fetch takes a
/// ticket from [`SequenceGate::issue`]; the ticket authorizes work only
/// while [`SequenceGate::is_current`] still holds — checked once when the
/// debounce timer expires and again when the response lands. A ticket
/// that has gone stale at either checkpoint is dropped, so out-of-order
/// resolutions can never overwrite newer results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceGate {
    latest: u64,
}

impl SequenceGate {
    /// Claim the next sequence, invalidating every earlier ticket.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// What Enter does given the current highlight and query.
#[derive(Debug, Clone, PartialEq)]
pub enum EnterAction {
    /// Navigate to a result row's URL; the widget clears the query and closes.
    Navigate(String),
    /// No highlighted row but a searchable query: go to the full results page.
    FullSearch(String),
    None,
}

pub fn resolve_enter(
    focused: isize,
    items: &[super::flatten::SearchItem],
    query: &str,
) -> EnterAction {
    if focused >= 0 {
        if let Some(item) = items.get(focused as usize) {
            return EnterAction::Navigate(item.url.clone());
        }
    }
    let trimmed = query.trim();
    if focused < 0 && searchable(trimmed) {
        return EnterAction::FullSearch(trimmed.to_string());
    }
    EnterAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::flatten::SearchItem;

    fn items(n: usize) -> Vec<SearchItem> {
        (0..n)
            .map(|i| SearchItem {
                url: format!("/projects/p{i}"),
                label: format!("Project {i}"),
            })
            .collect()
    }

    #[test]
    fn arrow_down_clamps_at_last_row() {
        let mut focused = -1;
        for _ in 0..10 {
            focused = step_down(focused, 4);
        }
        assert_eq!(focused, 3);
    }

    #[test]
    fn arrow_down_on_empty_list_stays_unfocused() {
        assert_eq!(step_down(-1, 0), -1);
    }

    #[test]
    fn arrow_up_clamps_at_zero() {
        assert_eq!(step_up(0), 0);
        assert_eq!(step_up(-1), 0);
        assert_eq!(step_up(2), 1);
    }

    #[test]
    fn enter_on_focused_row_navigates_there() {
        let items = items(7);
        assert_eq!(
            resolve_enter(3, &items, "react"),
            EnterAction::Navigate("/projects/p3".into())
        );
    }

    #[test]
    fn enter_without_focus_goes_to_full_search() {
        let items = items(2);
        assert_eq!(
            resolve_enter(-1, &items, "  react  "),
            EnterAction::FullSearch("react".into())
        );
    }

    #[test]
    fn enter_with_short_query_does_nothing() {
        assert_eq!(resolve_enter(-1, &[], " r "), EnterAction::None);
    }

    #[test]
    fn searchable_requires_two_trimmed_chars() {
        assert!(!searchable(""));
        assert!(!searchable(" a "));
        assert!(searchable("ab"));
        assert!(searchable("  ab  "));
    }

    #[test]
    fn keystroke_burst_leaves_only_the_last_ticket_current() {
        let mut gate = SequenceGate::default();
        let first = gate.issue();
        let second = gate.issue();
        let third = gate.issue();
        // Only the last keystroke of the burst survives to fetch.
        assert!(!gate.is_current(first));
        assert!(!gate.is_current(second));
        assert!(gate.is_current(third));
    }

    #[test]
    fn in_flight_response_goes_stale_once_a_newer_fetch_is_issued() {
        let mut gate = SequenceGate::default();
        let slow = gate.issue();
        // Timer expires while still current: the fetch goes out.
        assert!(gate.is_current(slow));
        // Another keystroke schedules before the slow response lands.
        let fast = gate.issue();
        assert!(!gate.is_current(slow));
        assert!(gate.is_current(fast));
    }
}
