#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Solve records and the averages speedcubers track over them.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
    time::Duration,
};

use itertools::Itertools;
use log::trace;
use thiserror::Error;

mod summary;

pub use summary::{SessionSummary, WindowSummary};

const PLUS_TWO: Duration = Duration::from_secs(2);

/// A penalty attached to a solve.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Penalty {
    #[default]
    None,
    /// Two seconds are added to the recorded time.
    PlusTwo,
    /// Did not finish.
    Dnf,
}

/// One recorded solve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Solve {
    pub time: Duration,
    pub penalty: Penalty,
}

/// A single result or an average, with DNF ordered after every time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stat {
    Time(Duration),
    Dnf,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("An average needs at least 3 solves, got a window of {0}")]
    WindowTooSmall(usize),
    #[error("A mean needs at least 1 solve")]
    EmptyWindow,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid solve time {0:?}, expected e.g. `12.34`, `1:02.50`, `12.34+` or `DNF(12.34)`")]
pub struct SolveParseError(pub String);

impl Solve {
    pub fn new(time: Duration) -> Solve {
        Solve {
            time,
            penalty: Penalty::None,
        }
    }

    #[must_use]
    pub fn with_penalty(self, penalty: Penalty) -> Solve {
        Solve { penalty, ..self }
    }

    /// The time that counts towards statistics.
    pub fn result(&self) -> Stat {
        match self.penalty {
            Penalty::None => Stat::Time(self.time),
            Penalty::PlusTwo => Stat::Time(self.time + PLUS_TWO),
            Penalty::Dnf => Stat::Dnf,
        }
    }
}

impl Display for Solve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.penalty {
            Penalty::None => write!(f, "{}", Stat::Time(self.time)),
            Penalty::PlusTwo => write!(f, "{}+", Stat::Time(self.time + PLUS_TWO)),
            Penalty::Dnf => write!(f, "DNF({})", Stat::Time(self.time)),
        }
    }
}

impl FromStr for Solve {
    type Err = SolveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || SolveParseError(s.to_owned());

        if s.eq_ignore_ascii_case("dnf") {
            return Ok(Solve::new(Duration::ZERO).with_penalty(Penalty::Dnf));
        }
        if let Some(inner) = s
            .strip_prefix("DNF(")
            .or_else(|| s.strip_prefix("dnf("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let time = parse_time(inner).ok_or_else(err)?;
            return Ok(Solve::new(time).with_penalty(Penalty::Dnf));
        }
        if let Some(inner) = s.strip_suffix('+') {
            // The displayed time already includes the penalty
            let time = parse_time(inner)
                .and_then(|time| time.checked_sub(PLUS_TWO))
                .ok_or_else(err)?;
            return Ok(Solve::new(time).with_penalty(Penalty::PlusTwo));
        }
        parse_time(s).map(Solve::new).ok_or_else(err)
    }
}

/// Parse `ss.xx`, `m:ss.xx` or `h:mm:ss.xx` to millisecond precision.
fn parse_time(s: &str) -> Option<Duration> {
    let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let mut seconds = 0_u64;
    for (i, part) in whole.split(':').enumerate() {
        if part.is_empty() || !is_digits(part) {
            return None;
        }
        let value: u64 = part.parse().ok()?;
        // Only the leading field may exceed a minute or an hour
        if i > 0 && value >= 60 {
            return None;
        }
        seconds = seconds.checked_mul(60)?.checked_add(value)?;
    }
    if !is_digits(fraction) {
        return None;
    }
    let millis = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'));

    Some(Duration::from_secs(seconds) + Duration::from_millis(millis))
}

impl Stat {
    pub fn time(self) -> Option<Duration> {
        match self {
            Stat::Time(time) => Some(time),
            Stat::Dnf => None,
        }
    }

    pub fn is_dnf(self) -> bool {
        self == Stat::Dnf
    }
}

impl PartialOrd for Stat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Stat::Time(a), Stat::Time(b)) => a.cmp(b),
            (Stat::Time(_), Stat::Dnf) => Ordering::Less,
            (Stat::Dnf, Stat::Time(_)) => Ordering::Greater,
            (Stat::Dnf, Stat::Dnf) => Ordering::Equal,
        }
    }
}

impl Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Stat::Time(time) = self else {
            return f.write_str("DNF");
        };
        let centis = (time.as_millis() + 5) / 10;
        let (minutes, centis) = (centis / 6000, centis % 6000);
        if minutes > 0 {
            write!(f, "{minutes}:{:02}.{:02}", centis / 100, centis % 100)
        } else {
            write!(f, "{}.{:02}", centis / 100, centis % 100)
        }
    }
}

/// How many results are dropped from each end of an average of `n`.
pub fn trim_count(n: usize) -> usize {
    n.div_ceil(20)
}

/// The trimmed average of the last `n` solves: the best and worst
/// [`trim_count`] results are dropped and the rest are averaged. DNF when a
/// DNF survives the trimming. `None` when there are fewer than `n` solves.
pub fn average_of(solves: &[Solve], n: usize) -> Result<Option<Stat>, StatsError> {
    if n < 3 {
        return Err(StatsError::WindowTooSmall(n));
    }
    Ok(last_window(solves, n).map(trimmed_average))
}

/// The plain mean of the last `n` solves. DNF if any of them is a DNF.
pub fn mean_of(solves: &[Solve], n: usize) -> Result<Option<Stat>, StatsError> {
    if n == 0 {
        return Err(StatsError::EmptyWindow);
    }
    Ok(last_window(solves, n).map(|window| mean(window.iter().map(Solve::result))))
}

/// The best trimmed average of `n` consecutive solves anywhere in `solves`.
pub fn best_average_of(solves: &[Solve], n: usize) -> Result<Option<Stat>, StatsError> {
    if n < 3 {
        return Err(StatsError::WindowTooSmall(n));
    }
    Ok(solves.windows(n).map(trimmed_average).min())
}

fn last_window(solves: &[Solve], n: usize) -> Option<&[Solve]> {
    solves.len().checked_sub(n).map(|start| &solves[start..])
}

fn trimmed_average(window: &[Solve]) -> Stat {
    let trim = trim_count(window.len());
    let sorted = window.iter().map(Solve::result).sorted().collect_vec();
    let counting = &sorted[trim..sorted.len() - trim];
    trace!(
        target: "solve_stats",
        "Averaging {} of {} results, trimming {trim} from each end",
        counting.len(),
        window.len()
    );
    mean(counting.iter().copied())
}

fn mean(results: impl Iterator<Item = Stat>) -> Stat {
    let mut total = Duration::ZERO;
    let mut count = 0_u32;
    for result in results {
        match result {
            Stat::Time(time) => total += time,
            Stat::Dnf => return Stat::Dnf,
        }
        count += 1;
    }
    if count == 0 {
        return Stat::Dnf;
    }
    Stat::Time(total / count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(times: &[u64]) -> Vec<Solve> {
        times
            .iter()
            .map(|&t| Solve::new(Duration::from_secs(t)))
            .collect()
    }

    fn stat(millis: u64) -> Stat {
        Stat::Time(Duration::from_millis(millis))
    }

    #[test]
    fn test_trim_count() {
        assert_eq!(trim_count(3), 1);
        assert_eq!(trim_count(5), 1);
        assert_eq!(trim_count(12), 1);
        assert_eq!(trim_count(50), 3);
        assert_eq!(trim_count(100), 5);
    }

    #[test]
    fn test_average_of_five() {
        let solves = secs(&[10, 12, 11, 30, 9]);
        assert_eq!(average_of(&solves, 5), Ok(Some(stat(11000))));
        assert_eq!(average_of(&solves[1..], 5), Ok(None));
    }

    #[test]
    fn test_average_uses_last_solves() {
        let solves = secs(&[1, 10, 10, 10, 10, 10]);
        assert_eq!(average_of(&solves, 5), Ok(Some(stat(10000))));
    }

    #[test]
    fn test_single_dnf_is_trimmed() {
        let mut solves = secs(&[10, 12, 11, 13, 9]);
        solves[3].penalty = Penalty::Dnf;
        assert_eq!(average_of(&solves, 5), Ok(Some(stat(11000))));

        solves[0].penalty = Penalty::Dnf;
        assert_eq!(average_of(&solves, 5), Ok(Some(Stat::Dnf)));
    }

    #[test]
    fn test_plus_two_counts() {
        let mut solves = secs(&[10, 10, 10]);
        solves[1].penalty = Penalty::PlusTwo;
        assert_eq!(mean_of(&solves, 3), Ok(Some(Stat::Time(Duration::from_secs(32) / 3))));
        assert_eq!(average_of(&solves, 3), Ok(Some(stat(10000))));
    }

    #[test]
    fn test_mean_with_dnf() {
        let mut solves = secs(&[10, 11, 12]);
        assert_eq!(mean_of(&solves, 3), Ok(Some(stat(11000))));
        solves[2].penalty = Penalty::Dnf;
        assert_eq!(mean_of(&solves, 3), Ok(Some(Stat::Dnf)));
        assert_eq!(mean_of(&solves, 2), Ok(Some(Stat::Dnf)));
        assert_eq!(mean_of(&solves, 0), Err(StatsError::EmptyWindow));
    }

    #[test]
    fn test_window_too_small() {
        let solves = secs(&[10, 11]);
        assert_eq!(average_of(&solves, 2), Err(StatsError::WindowTooSmall(2)));
        assert_eq!(best_average_of(&solves, 1), Err(StatsError::WindowTooSmall(1)));
    }

    #[test]
    fn test_best_average() {
        let solves = secs(&[20, 20, 20, 10, 10, 10, 20]);
        assert_eq!(best_average_of(&solves, 3), Ok(Some(stat(10000))));
        assert_eq!(best_average_of(&solves[..2], 3), Ok(None));
    }

    #[test]
    fn test_dnf_sorts_last() {
        assert!(Stat::Dnf > stat(1_000_000_000));
        assert_eq!([Stat::Dnf, stat(2000), stat(1000)].iter().min(), Some(&stat(1000)));
    }

    #[test]
    fn test_display() {
        assert_eq!(stat(9_876).to_string(), "9.88");
        assert_eq!(stat(12_300).to_string(), "12.30");
        assert_eq!(stat(62_500).to_string(), "1:02.50");
        assert_eq!(Stat::Dnf.to_string(), "DNF");

        let solve = Solve::new(Duration::from_millis(12_340));
        assert_eq!(solve.to_string(), "12.34");
        assert_eq!(solve.with_penalty(Penalty::PlusTwo).to_string(), "14.34+");
        assert_eq!(solve.with_penalty(Penalty::Dnf).to_string(), "DNF(12.34)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("12.34".parse(), Ok(Solve::new(Duration::from_millis(12_340))));
        assert_eq!("1:02.5".parse(), Ok(Solve::new(Duration::from_millis(62_500))));
        assert_eq!(
            "14.5+".parse(),
            Ok(Solve::new(Duration::from_millis(12_500)).with_penalty(Penalty::PlusTwo))
        );
        assert_eq!(
            "DNF(9.00)".parse(),
            Ok(Solve::new(Duration::from_secs(9)).with_penalty(Penalty::Dnf))
        );
        assert_eq!("dnf".parse::<Solve>().map(|s| s.result()), Ok(Stat::Dnf));
        assert!("abc".parse::<Solve>().is_err());
        assert!("-3".parse::<Solve>().is_err());
        assert!("1.0+".parse::<Solve>().is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_fields() {
        assert_eq!("75.00".parse(), Ok(Solve::new(Duration::from_secs(75))));
        assert_eq!("59:59.99".parse(), Ok(Solve::new(Duration::from_millis(3_599_990))));
        assert_eq!("1:00:00".parse(), Ok(Solve::new(Duration::from_secs(3600))));
        assert!("1:75.00".parse::<Solve>().is_err());
        assert!("1:60".parse::<Solve>().is_err());
        assert!("1:60:00".parse::<Solve>().is_err());
        assert!("DNF(2:99.00)".parse::<Solve>().is_err());
    }

    #[test]
    fn test_is_dnf() {
        assert!(Stat::Dnf.is_dnf());
        assert!(!stat(9_000).is_dnf());
        assert!(Solve::new(Duration::ZERO).with_penalty(Penalty::Dnf).result().is_dnf());
    }
}
