use std::time::Duration;

use solve_stats::{Penalty, SessionSummary, Solve, Stat, StatsError};

fn parse_all(times: &str) -> Vec<Solve> {
    times
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect()
}

#[test_log::test]
fn test_session_summary() {
    let solves = parse_all("12.00 DNF(9.00) 11.00 13.00+ 10.00 14.00 9.50");
    let summary = SessionSummary::new(&solves, &[5, 12]).unwrap();

    assert_eq!(summary.count, 7);
    assert_eq!(summary.dnf_count, 1);
    assert_eq!(summary.best_single, Some(Stat::Time(Duration::from_millis(9_500))));
    assert_eq!(summary.worst_single, Some(Stat::Dnf));
    // 12 + 11 + 13 + 10 + 14 + 9.5 over six finished solves
    assert_eq!(summary.mean, Some(Duration::from_millis(69_500) / 6));

    let ao5 = &summary.windows[0];
    assert_eq!(ao5.size, 5);
    // Last five: 11, 13, 10, 14, 9.5 -> 10, 11, 13
    assert_eq!(ao5.current, Some(Stat::Time(Duration::from_millis(34_000) / 3)));
    // Earlier windows average 12.00 and 12.67
    assert_eq!(ao5.best, Some(Stat::Time(Duration::from_millis(34_000) / 3)));

    let ao12 = &summary.windows[1];
    assert_eq!(ao12.current, None);
    assert_eq!(ao12.best, None);
}

#[test_log::test]
fn test_plus_two_round_trips_through_text() {
    let solves = parse_all("13.00+");
    assert_eq!(solves[0].penalty, Penalty::PlusTwo);
    assert_eq!(solves[0].time, Duration::from_secs(11));
    assert_eq!(solves[0].to_string(), "13.00+");
}

#[test_log::test]
fn test_empty_session() {
    let summary = SessionSummary::new(&[], &[5]).unwrap();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.mean, None);
    assert_eq!(summary.best_single, None);
    assert_eq!(summary.windows[0].current, None);

    assert_eq!(
        SessionSummary::new(&[], &[2]),
        Err(StatsError::WindowTooSmall(2))
    );
}
