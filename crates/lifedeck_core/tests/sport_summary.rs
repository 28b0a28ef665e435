use lifedeck_core::service::summary::{
    journal_count_series, sport_minutes_series, sport_overview, weekly_sport_overview,
    FreeStanding,
};
use lifedeck_core::{JournalEntry, MemoryPreferences, SportGoal, SportRepository, SportSession};

const D: i64 = 20_377;

#[test]
fn sessions_of_deleted_goal_load_and_count_as_free_standing() {
    let prefs = MemoryPreferences::new();
    let repo = SportRepository::new(&prefs);
    repo.add_goal(SportGoal::new(1, "running", 3, 30)).unwrap();
    repo.add_goal(SportGoal::new(2, "swimming", 2, 45)).unwrap();
    repo.log_session(SportSession::new(10, D, Some(1), 35, 3))
        .unwrap();
    repo.log_session(SportSession::new(11, D - 1, Some(2), 50, 4))
        .unwrap();
    repo.log_session(SportSession::new(12, D - 2, None, 20, 2))
        .unwrap();

    repo.remove_goal(2).unwrap();

    let goals = repo.list_goals().unwrap();
    let sessions = repo.list_sessions().unwrap();
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[1].goal_id, Some(2));

    let overview = weekly_sport_overview(&goals, &sessions, D);
    assert_eq!(overview.goals.len(), 1);
    assert_eq!(overview.goals[0].sessions, 1);
    assert_eq!(overview.goals[0].minutes, 35);
    assert_eq!(
        overview.free_standing,
        FreeStanding {
            sessions: 2,
            minutes: 70
        }
    );
}

#[test]
fn goal_progress_counts_only_sessions_meeting_minute_target() {
    let goals = vec![SportGoal::new(1, "cycling", 2, 40)];
    let sessions = vec![
        SportSession::new(1, D, Some(1), 45, 3),
        SportSession::new(2, D - 2, Some(1), 20, 2),
        SportSession::new(3, D - 3, Some(1), 60, 5),
        SportSession::new(4, D - 10, Some(1), 90, 5),
    ];

    let overview = sport_overview(&goals, &sessions, D, 7);
    let progress = &overview.goals[0];
    assert_eq!(progress.sessions, 3);
    assert_eq!(progress.sessions_meeting_target, 2);
    assert!(progress.is_met());
}

#[test]
fn minutes_series_sums_same_day_sessions() {
    let sessions = vec![
        SportSession::new(1, D, None, 15, 2),
        SportSession::new(2, D, Some(99), 25, 3),
        SportSession::new(3, D - 2, None, 10, 1),
    ];

    let series = sport_minutes_series(&sessions, D, 3);
    assert_eq!(series.days, vec![D - 2, D - 1, D]);
    assert_eq!(series.values, vec![10, 0, 40]);
    assert_eq!(series.total(), 50);
}

#[test]
fn journal_series_counts_entries_per_day() {
    let entries = vec![
        JournalEntry::new(1, D, "a"),
        JournalEntry::new(2, D, "b"),
        JournalEntry::new(3, D - 6, "c"),
        JournalEntry::new(4, D - 7, "outside"),
    ];

    let series = journal_count_series(&entries, D, 7);
    assert_eq!(series.values, vec![1, 0, 0, 0, 0, 0, 2]);
    assert_eq!(series.active_days(), 2);
}

#[test]
fn minute_totals_saturate_on_huge_sessions() {
    let sessions = vec![
        SportSession::new(1, D, Some(1), i64::MAX, 3),
        SportSession::new(2, D, Some(1), 1, 3),
        SportSession::new(3, D, None, i64::MAX, 3),
        SportSession::new(4, D, None, 1, 3),
    ];
    let goals = vec![SportGoal::new(1, "running", 3, 30)];

    let series = sport_minutes_series(&sessions, D, 1);
    assert_eq!(series.values, vec![i64::MAX]);
    assert_eq!(series.total(), i64::MAX);

    let overview = sport_overview(&goals, &sessions, D, 1);
    assert_eq!(overview.goals[0].minutes, i64::MAX);
    assert_eq!(overview.free_standing.minutes, i64::MAX);
}

