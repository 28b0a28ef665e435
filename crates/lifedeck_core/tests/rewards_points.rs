use lifedeck_core::prefs::PrefsResult;
use lifedeck_core::{
    ClaimOutcome, FixedClock, RepoError, Habit, HabitRepository, MemoryPreferences, PointsSnapshot,
    PreferenceArea, PrefsError, Reward, RewardRepository, RewardsService, Routine,
    RoutineRepository, Task, TaskRepository,
};

const D: i64 = 20_377;

fn habit_done_on(id: i64, streak: i64, last_done_day: i64, points: i64) -> Habit {
    let mut habit = Habit::new(id, format!("habit-{id}"));
    habit.streak = streak;
    habit.last_done_day = Some(last_done_day);
    habit.points = points;
    habit
}

fn seed_scenario(prefs: &MemoryPreferences) {
    let tasks = TaskRepository::new(prefs);
    let mut done = Task::new(1, "done").with_points(10);
    done.done = true;
    tasks.add(done).unwrap();
    tasks.add(Task::new(2, "open").with_points(99)).unwrap();

    HabitRepository::new(prefs)
        .add(habit_done_on(3, 3, D, 5))
        .unwrap();
}

#[test]
fn scenario_totals_task_and_todays_habit_points() {
    let prefs = MemoryPreferences::new();
    seed_scenario(&prefs);
    let service = RewardsService::new(&prefs);

    let breakdown = service.breakdown(D);
    assert_eq!(breakdown.task_points, 10);
    assert_eq!(breakdown.habit_points, 15);
    assert_eq!(breakdown.routine_points, 0);
    assert_eq!(breakdown.available(), 25);
    assert_eq!(service.available_points(&FixedClock::at_day(D)), 25);
}

#[test]
fn claimability_compares_against_target() {
    let available = 25;
    assert!(Reward::new(1, "book", 20).is_claimable(available));
    assert!(!Reward::new(2, "trip", 30).is_claimable(available));

    let mut claimed = Reward::new(3, "coffee", 5);
    claimed.is_claimed = true;
    assert!(!claimed.is_claimable(available));
}

#[test]
fn stale_habit_contributes_nothing() {
    let snapshot = PointsSnapshot {
        habits: vec![habit_done_on(1, 40, D - 1, 50)],
        ..PointsSnapshot::default()
    };

    assert_eq!(snapshot.breakdown(D).habit_points, 0);
}

#[test]
fn done_tasks_count_regardless_of_date() {
    let mut old = Task::new(1, "last year").with_points(4);
    old.done = true;
    old.date = "2025-01-01".to_string();
    let snapshot = PointsSnapshot {
        tasks: vec![old],
        ..PointsSnapshot::default()
    };

    assert_eq!(snapshot.breakdown(D).task_points, 4);
}

#[test]
fn routines_score_like_habits() {
    let prefs = MemoryPreferences::new();
    let routines = RoutineRepository::new(&prefs);
    routines.add(Routine::new(1, "morning", 2)).unwrap();
    routines.add(Routine::new(2, "evening", 7)).unwrap();
    routines.mark_done(1, D - 1).unwrap();
    routines.mark_done(1, D).unwrap();
    routines.mark_done(2, D - 3).unwrap();

    let breakdown = RewardsService::new(&prefs).breakdown(D);
    assert_eq!(breakdown.routine_points, 2 * 2);
}

#[test]
fn claim_is_permanent_and_does_not_spend_points() {
    let prefs = MemoryPreferences::new();
    seed_scenario(&prefs);
    let rewards = RewardRepository::new(&prefs);
    rewards.add(Reward::new(10, "book", 20)).unwrap();
    rewards.add(Reward::new(11, "snack", 20)).unwrap();
    rewards.add(Reward::new(12, "trip", 30)).unwrap();
    let service = RewardsService::new(&prefs);
    let clock = FixedClock::at_day(D);

    assert!(matches!(
        service.claim(10, &clock).unwrap(),
        ClaimOutcome::Claimed(reward) if reward.is_claimed
    ));
    assert_eq!(service.claim(10, &clock).unwrap(), ClaimOutcome::AlreadyClaimed);
    assert_eq!(
        service.claim(12, &clock).unwrap(),
        ClaimOutcome::InsufficientPoints {
            available: 25,
            target: 30
        }
    );

    assert_eq!(service.available_points(&clock), 25);
    let claimable: Vec<_> = service
        .claimable(25)
        .unwrap()
        .into_iter()
        .map(|reward| reward.id)
        .collect();
    assert_eq!(claimable, vec![11]);
}

/// Serves the task slot from memory and fails every other read.
struct TasksOnly {
    inner: MemoryPreferences,
}

impl PreferenceArea for TasksOnly {
    fn get_string(&self, namespace: &str, slot_key: &str) -> PrefsResult<String> {
        if namespace == "tasks" {
            self.inner.get_string(namespace, slot_key)
        } else {
            Err(PrefsError::Unavailable(format!("{namespace} offline")))
        }
    }

    fn set_string(&self, namespace: &str, slot_key: &str, value: &str) -> PrefsResult<()> {
        self.inner.set_string(namespace, slot_key, value)
    }
}

#[test]
fn failing_store_contributes_zero_instead_of_error() {
    let inner = MemoryPreferences::new();
    seed_scenario(&inner);
    let prefs = TasksOnly { inner };

    let service = RewardsService::new(&prefs);
    assert_eq!(service.available_points(&FixedClock::at_day(D)), 10);
}

#[test]
fn huge_stored_points_saturate_instead_of_overflowing() {
    let prefs = MemoryPreferences::new();
    prefs
        .set_string("habits", "habits_v1", "1||h||||1||true||2||100||9223372036854775807")
        .unwrap();
    let tasks = TaskRepository::new(&prefs);
    let mut big = Task::new(2, "big").with_points(i64::MAX);
    big.done = true;
    let mut small = Task::new(3, "small").with_points(1);
    small.done = true;
    tasks.save_all(&[big, small]).unwrap();

    let breakdown = RewardsService::new(&prefs).breakdown(100);
    assert_eq!(breakdown.habit_points, i64::MAX);
    assert_eq!(breakdown.task_points, i64::MAX);
    assert_eq!(breakdown.available(), i64::MAX);
}

#[test]
fn claiming_unknown_reward_is_not_found() {
    let prefs = MemoryPreferences::new();
    let service = RewardsService::new(&prefs);

    assert!(matches!(
        service.claim(404, &FixedClock::at_day(D)),
        Err(RepoError::NotFound {
            schema: "reward",
            id: 404
        })
    ));
}
