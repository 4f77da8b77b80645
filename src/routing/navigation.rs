use crate::routing::Resolution;

/// Identifies one navigation. Results carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct NavigationTicket(u64);

/// What the shell should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationView {
    Target(Resolution),
    LoadingIndicator,
}

/// Tracks the latest navigation for one view so that a late result from an
/// abandoned navigation is dropped, and a still-loading navigation keeps the
/// previous content on screen instead of flashing not-found.
#[derive(Debug, Default)]
pub struct NavigationState {
    latest: u64,
    settled: Option<Resolution>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> NavigationTicket {
        self.latest += 1;
        NavigationTicket(self.latest)
    }

    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a classification result. Returns `None` when the ticket is
    /// stale and the result was discarded.
    pub fn settle(&mut self, ticket: NavigationTicket, resolution: Resolution) -> Option<NavigationView> {
        if !self.is_current(ticket) {
            log::debug!("discarding stale navigation result {:?}", ticket);
            return None;
        }

        if !resolution.is_loading() {
            self.settled = Some(resolution);
        }

        Some(self.view())
    }

    pub fn view(&self) -> NavigationView {
        match &self.settled {
            Some(resolution) => NavigationView::Target(resolution.clone()),
            None => NavigationView::LoadingIndicator,
        }
    }
}
