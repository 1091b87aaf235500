use std::sync::Mutex;

use indicatif::{MultiProgress, ProgressDrawTarget};

use dashkit_request::Surface;

use crate::spinner::Spinner;

/// Resolved set of board regions; the handle handed back to success
/// continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSet {
    names: Vec<String>,
}

impl RegionSet {
    /// Names of the matched regions, in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// The terminal UI tree: one shared draw area with named regions that
/// requests mount busy indicators into.
pub struct Board {
    multi: MultiProgress,
    regions: Mutex<Vec<String>>,
}

impl Board {
    /// Board drawing to stderr (indicatif's default target).
    pub fn new() -> Self {
        Self::with_multi(MultiProgress::new())
    }

    /// Board that draws nothing; for headless runs and tests.
    pub fn hidden() -> Self {
        Self::with_multi(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    fn with_multi(multi: MultiProgress) -> Self {
        Self {
            multi,
            regions: Mutex::new(Vec::new()),
        }
    }

    /// Register a named region. Registering a name twice is a no-op.
    pub fn region(&self, name: impl Into<String>) -> &Self {
        let name = name.into();
        let mut regions = self.regions.lock().unwrap_or_else(|e| e.into_inner());
        if !regions.contains(&name) {
            regions.push(name);
        }
        self
    }

    /// Resolve a selector: an exact region name, or a prefix glob when
    /// it ends in `*` (`"machines.*"`). Unknown selectors resolve to an
    /// empty set.
    fn resolve(&self, selector: &str) -> Vec<String> {
        let regions = self.regions.lock().unwrap_or_else(|e| e.into_inner());
        match selector.strip_suffix('*') {
            Some(prefix) => regions
                .iter()
                .filter(|name| name.starts_with(prefix))
                .cloned()
                .collect(),
            None => regions
                .iter()
                .filter(|name| name.as_str() == selector)
                .cloned()
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Board {
    type Region = RegionSet;
    type Indicator = Spinner;

    fn select(&self, selector: &str) -> RegionSet {
        RegionSet {
            names: self.resolve(selector),
        }
    }

    fn mount(&self, region: &RegionSet) -> Spinner {
        Spinner::mounted(&self.multi, region.names())
    }
}

#[cfg(test)]
mod tests {
    use dashkit_request::{Indicator, Surface};

    use super::Board;

    fn board() -> Board {
        let board = Board::hidden();
        board
            .region("machines.map")
            .region("machines.table")
            .region("alerts");
        board
    }

    #[test]
    fn test_select_exact_name() {
        let set = board().select("machines.map");
        assert_eq!(set.names(), ["machines.map"]);
    }

    #[test]
    fn test_select_prefix_glob() {
        let set = board().select("machines.*");
        assert_eq!(set.names(), ["machines.map", "machines.table"]);
    }

    #[test]
    fn test_select_unknown_is_empty() {
        assert!(board().select("widgets.clock").is_empty());
    }

    #[test]
    fn test_duplicate_registration_is_a_noop() {
        let board = board();
        board.region("alerts");
        assert_eq!(board.select("alerts").len(), 1);
    }

    #[test]
    fn test_spinner_mounts_one_bar_per_region() {
        let board = board();
        let set = board.select("machines.*");
        let spinner = board.mount(&set);
        assert_eq!(spinner.bars().len(), 2);
    }

    #[test]
    fn test_stop_finishes_every_bar() {
        let board = board();
        let set = board.select("machines.*");
        let spinner = board.mount(&set);
        spinner.spin();

        let handles: Vec<_> = spinner.bars().to_vec();
        spinner.stop();
        assert!(handles.iter().all(|bar| bar.is_finished()));
    }

    #[test]
    fn test_empty_selection_still_mounts_detached() {
        let board = board();
        let set = board.select("nowhere");
        let spinner = board.mount(&set);
        spinner.spin();
        spinner.stop();
    }
}
