//! Selection Controller
//!
//! Drives the detail view. Closing keeps the item around until the exit
//! animation has finished; the caller clears it later with the returned ticket.

/// Proof of a specific close; stale once the user selects again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    item: Option<T>,
    open: bool,
    generation: u64,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            item: None,
            open: false,
            generation: 0,
        }
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail view with `item`
    pub fn select(&mut self, item: T) {
        self.item = Some(item);
        self.open = true;
        self.generation += 1;
    }

    /// Hide the detail view, retaining the item for the exit animation
    pub fn close(&mut self) -> CloseTicket {
        self.open = false;
        CloseTicket(self.generation)
    }

    /// Drop the retained item unless something was selected after `ticket`
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if self.open || ticket.0 != self.generation {
            return false;
        }
        self.item = None;
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Selected item, also while the close animation runs
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_close() {
        let mut selection = Selection::new();
        selection.select("oats");
        assert!(selection.is_open());
        assert_eq!(selection.item(), Some(&"oats"));

        let ticket = selection.close();
        assert!(!selection.is_open());
        assert_eq!(selection.item(), Some(&"oats"));

        assert!(selection.finish_close(ticket));
        assert_eq!(selection.item(), None);
    }

    #[test]
    fn test_reopen_survives_stale_ticket() {
        let mut selection = Selection::new();
        selection.select("oats");
        let ticket = selection.close();
        selection.select("salad");

        assert!(!selection.finish_close(ticket));
        assert!(selection.is_open());
        assert_eq!(selection.item(), Some(&"salad"));
    }

    #[test]
    fn test_reselect_then_close_again() {
        let mut selection = Selection::new();
        selection.select("oats");
        let stale = selection.close();
        selection.select("oats");
        let fresh = selection.close();

        assert!(!selection.finish_close(stale));
        assert!(selection.finish_close(fresh));
        assert_eq!(selection.item(), None);
    }
}
