use std::time::Duration;

use itertools::Itertools;

use crate::{Solve, Stat, StatsError, average_of, best_average_of};

/// Current and best average for one window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSummary {
    pub size: usize,
    pub current: Option<Stat>,
    pub best: Option<Stat>,
}

/// Statistics over a whole session of solves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub count: usize,
    pub dnf_count: usize,
    pub best_single: Option<Stat>,
    pub worst_single: Option<Stat>,
    /// Mean over the solves that finished.
    pub mean: Option<Duration>,
    pub windows: Vec<WindowSummary>,
}

impl SessionSummary {
    pub fn new(solves: &[Solve], windows: &[usize]) -> Result<SessionSummary, StatsError> {
        let results = solves.iter().map(Solve::result).collect_vec();
        let finished = results.iter().filter_map(|r| r.time()).collect_vec();

        let mean = u32::try_from(finished.len())
            .ok()
            .filter(|&n| n > 0)
            .map(|n| finished.iter().sum::<Duration>() / n);

        let windows = windows
            .iter()
            .map(|&size| {
                Ok(WindowSummary {
                    size,
                    current: average_of(solves, size)?,
                    best: best_average_of(solves, size)?,
                })
            })
            .collect::<Result<Vec<_>, StatsError>>()?;

        Ok(SessionSummary {
            count: solves.len(),
            dnf_count: results.len() - finished.len(),
            best_single: results.iter().min().copied(),
            worst_single: results.iter().max().copied(),
            mean,
            windows,
        })
    }
}
