/// A cost threshold with the thing the money could have bought instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub threshold: f64,
    pub label: &'static str,
}

impl Milestone {
    pub fn announcement(&self) -> String {
        format!("This meeting could have paid for {}", self.label)
    }
}

/// Fixed catalog, ascending by threshold.
pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        threshold: 15.0,
        label: "a couple of coffees ☕️",
    },
    Milestone {
        threshold: 75.0,
        label: "a new video game 🎮",
    },
    Milestone {
        threshold: 500.0,
        label: "a PlayStation 5 🕹️",
    },
    Milestone {
        threshold: 2000.0,
        label: "a vacation to Mexico ✈️",
    },
];

/// Announces milestones strictly in catalog order, each at most once.
///
/// Each `check` advances by at most one entry, so a cost that jumps past
/// several thresholds at once surfaces them over successive checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MilestoneTracker {
    last_index: Option<usize>,
}

impl MilestoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the last announced milestone, `None` before the first.
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    pub fn last_reached(&self) -> Option<&'static Milestone> {
        self.last_index.and_then(|idx| MILESTONES.get(idx))
    }

    pub fn check(&mut self, current_cost: f64) -> Option<&'static Milestone> {
        let next = self.last_index.map_or(0, |idx| idx + 1);
        let milestone = MILESTONES.get(next)?;
        if current_cost >= milestone.threshold {
            self.last_index = Some(next);
            Some(milestone)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.last_index = None;
    }
}
