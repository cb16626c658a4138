//! Algorithm names, complexity labels and driver construction

use crate::algorithm::drivers::{BubbleSort, InsertionSort, QuickSort, SelectionSort, SortDriver};
use crate::io::error::{Result, configuration_error};
use std::fmt;

/// Name that leaves a lane without an algorithm
pub const NO_ALGORITHM: &str = "none";

/// The sorting algorithms a lane can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Adjacent swaps with early exit
    Bubble,
    /// Minimum selection
    Selection,
    /// Backward insertion
    Insertion,
    /// Lomuto quick sort
    Quick,
}

struct Entry {
    algorithm: Algorithm,
    name: &'static str,
    alias: &'static str,
    complexity: &'static str,
    build: fn() -> Box<dyn SortDriver>,
}

fn build_bubble() -> Box<dyn SortDriver> {
    Box::new(BubbleSort::default())
}

fn build_selection() -> Box<dyn SortDriver> {
    Box::new(SelectionSort::default())
}

fn build_insertion() -> Box<dyn SortDriver> {
    Box::new(InsertionSort::default())
}

fn build_quick() -> Box<dyn SortDriver> {
    Box::new(QuickSort::default())
}

static REGISTRY: [Entry; 4] = [
    Entry {
        algorithm: Algorithm::Bubble,
        name: "bubbleSort",
        alias: "bubble",
        complexity: "O(n²)",
        build: build_bubble,
    },
    Entry {
        algorithm: Algorithm::Selection,
        name: "selectionSort",
        alias: "selection",
        complexity: "O(n²)",
        build: build_selection,
    },
    Entry {
        algorithm: Algorithm::Insertion,
        name: "insertionSort",
        alias: "insertion",
        complexity: "O(n²)",
        build: build_insertion,
    },
    Entry {
        algorithm: Algorithm::Quick,
        name: "quickSort",
        alias: "quick",
        complexity: "O(n log n)",
        build: build_quick,
    },
];

impl Algorithm {
    /// Every algorithm, in display order
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Selection, Self::Insertion, Self::Quick];

    fn entry(self) -> &'static Entry {
        match self {
            Self::Bubble => &REGISTRY[0],
            Self::Selection => &REGISTRY[1],
            Self::Insertion => &REGISTRY[2],
            Self::Quick => &REGISTRY[3],
        }
    }

    /// Look an algorithm up by its name or short alias, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        REGISTRY
            .iter()
            .find(|entry| {
                entry.name.eq_ignore_ascii_case(name) || entry.alias.eq_ignore_ascii_case(name)
            })
            .map(|entry| entry.algorithm)
    }

    /// Canonical name, as used by the option controls
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Average-case complexity label shown next to the lane
    pub fn complexity(self) -> &'static str {
        self.entry().complexity
    }

    /// Fresh driver positioned before its first comparison
    pub fn driver(self) -> Box<dyn SortDriver> {
        (self.entry().build)()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the algorithm name assigned to `lane`
///
/// `none` leaves the lane empty, which only lanes after the first may be.
///
/// # Errors
///
/// Returns [`crate::VisualizerError::Configuration`] for unknown names and for
/// `none` on lane 0
pub fn resolve_assignment(lane: usize, name: &str) -> Result<Option<Algorithm>> {
    if name.trim().eq_ignore_ascii_case(NO_ALGORITHM) {
        return if lane == 0 {
            Err(configuration_error(lane, &name))
        } else {
            Ok(None)
        };
    }
    Algorithm::from_name(name)
        .map(Some)
        .ok_or_else(|| configuration_error(lane, &name))
}
