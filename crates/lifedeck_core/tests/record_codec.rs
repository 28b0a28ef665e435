use lifedeck_core::{
    decode_line, encode_line, DecodeError, Habit, HabitPlan, JournalEntry, JournalTemplate,
    MoodEntry, PlanStatus, Reward, Routine, SportGoal, SportSession, Task,
};

#[test]
fn task_roundtrip_preserves_every_field() {
    let mut task = Task::new(1_700_000_000_000, "file taxes").with_points(10);
    task.description = "before friday".to_string();
    task.date = "2026-10-16".to_string();
    task.done = true;

    let line = encode_line(&task);
    assert_eq!(
        line,
        "1700000000000||file taxes||before friday||true||2026-10-16||10"
    );
    assert_eq!(decode_line::<Task>(&line).unwrap(), task);
}

#[test]
fn journal_roundtrip_keeps_tag_order() {
    let mut entry = JournalEntry::new(42, 20_000, "a good day");
    entry.template = JournalTemplate::Gratitude;
    entry.is_favorite = true;
    entry.tags = vec!["family".to_string(), "work".to_string()];
    entry.content = "walked by the river".to_string();

    let decoded: JournalEntry = decode_line(&encode_line(&entry)).unwrap();
    assert_eq!(decoded, entry);
    assert_eq!(decoded.tags, vec!["family", "work"]);
}

#[test]
fn habit_plan_roundtrip_keeps_status() {
    let mut plan = HabitPlan::new(7, "read daily");
    plan.why = "learn".to_string();
    plan.cue = "after dinner".to_string();
    plan.frequency_per_week = 5;
    plan.status = PlanStatus::Paused;

    let decoded: HabitPlan = decode_line(&encode_line(&plan)).unwrap();
    assert_eq!(decoded, plan);
}

#[test]
fn habit_roundtrip_preserves_streak_columns() {
    let habit = Habit {
        id: 11,
        name: "stretch".to_string(),
        description: "ten minutes".to_string(),
        target_per_day: 0,
        enabled: false,
        streak: 4,
        last_done_day: Some(20_377),
        points: 6,
    };

    let line = encode_line(&habit);
    assert_eq!(line, "11||stretch||ten minutes||0||false||4||20377||6");
    assert_eq!(decode_line::<Habit>(&line).unwrap(), habit);

    let never = Habit::new(12, "floss");
    assert_eq!(decode_line::<Habit>(&encode_line(&never)).unwrap(), never);
}

#[test]
fn routine_roundtrip_preserves_every_field() {
    let mut routine = Routine::new(21, "evening", 3);
    routine.streak = 9;
    routine.last_done_day = Some(20_000);

    let line = encode_line(&routine);
    assert_eq!(line, "21||evening||9||20000||3");
    assert_eq!(decode_line::<Routine>(&line).unwrap(), routine);
}

#[test]
fn sport_goal_roundtrip_keeps_raw_targets() {
    let goal = SportGoal {
        id: 31,
        name: "running".to_string(),
        target_sessions_per_week: 3,
        target_minutes_per_session: -5,
    };

    let decoded: SportGoal = decode_line(&encode_line(&goal)).unwrap();
    assert_eq!(decoded, goal);
}

#[test]
fn sport_session_roundtrip_with_and_without_goal() {
    let with_goal = SportSession::new(41, 20_377, Some(31), 45, 4);
    let free = SportSession::new(42, 20_376, None, 20, 2);

    let line = encode_line(&free);
    assert_eq!(line, "42||20376||||20||2");
    assert_eq!(decode_line::<SportSession>(&line).unwrap(), free);
    assert_eq!(
        decode_line::<SportSession>(&encode_line(&with_goal)).unwrap(),
        with_goal
    );
}

#[test]
fn reward_roundtrip_preserves_claim_flag() {
    let mut reward = Reward::new(51, "cinema", 120);
    reward.description = "with friends".to_string();
    reward.is_claimed = true;

    let line = encode_line(&reward);
    assert_eq!(line, "51||cinema||with friends||120||true");
    assert_eq!(decode_line::<Reward>(&line).unwrap(), reward);
}

#[test]
fn mood_roundtrip_preserves_every_field() {
    let entry = MoodEntry::new(61, 20_377, 2, 5).with_note("rainy");

    let line = encode_line(&entry);
    assert_eq!(line, "61||20377||2||5||rainy");
    assert_eq!(decode_line::<MoodEntry>(&line).unwrap(), entry);
}

#[test]
fn newline_in_text_becomes_space() {
    let entry = MoodEntry::new(3, 100, 4, 2).with_note("slept badly\nbut ok");

    let decoded: MoodEntry = decode_line(&encode_line(&entry)).unwrap();
    assert_eq!(decoded.note, "slept badly but ok");
}

#[test]
fn out_of_range_scales_are_clamped_on_read() {
    let mood: MoodEntry = decode_line("1||100||9||0||legacy").unwrap();
    assert_eq!(mood.mood, 5);
    assert_eq!(mood.energy, 1);

    let session: SportSession = decode_line("2||100||||30||12").unwrap();
    assert_eq!(session.intensity, 5);
    assert_eq!(session.goal_id, None);
}

#[test]
fn habit_line_without_streak_columns_gets_defaults() {
    let habit: Habit = decode_line("5||stretch||morning||2||true").unwrap();

    assert_eq!(habit.name, "stretch");
    assert_eq!(habit.target_per_day, 2);
    assert!(habit.enabled);
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.last_done_day, None);
    assert_eq!(habit.points, 0);
}

#[test]
fn unparsable_numeric_field_falls_back_without_dropping_record() {
    let reward: Reward = decode_line("9||cinema||||lots||false").unwrap();

    assert_eq!(reward.title, "cinema");
    assert_eq!(reward.target_points, 0);
    assert!(!reward.is_claimed);
}

#[test]
fn short_line_and_bad_id_are_decode_errors() {
    assert!(matches!(
        decode_line::<Task>("1||only title"),
        Err(DecodeError::TooFewFields {
            schema: "task",
            expected: 5,
            found: 2
        })
    ));
    assert!(matches!(
        decode_line::<Task>("x||title||desc||false||"),
        Err(DecodeError::InvalidId { .. })
    ));
}
