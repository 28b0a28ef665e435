use lifedeck_core::{
    MemoryPreferences, PreferenceArea, PrefsError, RecordStore, StoreError, StoredRecord, Task,
};
use lifedeck_core::prefs::PrefsResult;

fn raw_tasks(prefs: &MemoryPreferences) -> String {
    let slot = Task::SLOT;
    prefs.get_string(slot.namespace, slot.slot_key).unwrap()
}

fn write_raw_tasks(prefs: &MemoryPreferences, value: &str) {
    let slot = Task::SLOT;
    prefs.set_string(slot.namespace, slot.slot_key, value).unwrap();
}

#[test]
fn missing_or_blank_slot_loads_empty() {
    let prefs = MemoryPreferences::new();
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);
    assert!(store.load().unwrap().is_empty());

    write_raw_tasks(&prefs, "  \n\n ");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn malformed_line_is_dropped_and_rest_loads() {
    let prefs = MemoryPreferences::new();
    write_raw_tasks(&prefs, "1||good||desc||false||2026-01-01||3\n2||short");
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);

    let report = store.load_report().unwrap();
    assert_eq!(report.dropped_lines, 1);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].title, "good");
}

#[test]
fn save_of_load_is_idempotent() {
    let prefs = MemoryPreferences::new();
    write_raw_tasks(
        &prefs,
        "3||c||||true||||0\n1||a||||false||||5\nbroken\n2||b||x||false||2026-02-02||1",
    );
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);

    let first = store.load().unwrap();
    store.save(&first).unwrap();
    let second = store.load().unwrap();

    assert_eq!(first, second);
    let ids: Vec<_> = second.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let raw_after_first_save = raw_tasks(&prefs);
    store.save(&second).unwrap();
    assert_eq!(raw_tasks(&prefs), raw_after_first_save);
}

#[test]
fn save_writes_in_given_order_one_line_per_record() {
    let prefs = MemoryPreferences::new();
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);

    store
        .save(&[Task::new(2, "second"), Task::new(1, "first")])
        .unwrap();

    assert_eq!(
        raw_tasks(&prefs),
        "2||second||||false||||0\n1||first||||false||||0"
    );
}

#[test]
fn replace_keeps_position_and_reports_miss() {
    let prefs = MemoryPreferences::new();
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);
    store.append(Task::new(1, "a")).unwrap();
    store.append(Task::new(2, "b")).unwrap();
    store.append(Task::new(3, "c")).unwrap();

    assert!(store.replace(Task::new(2, "b2")).unwrap());
    assert!(!store.replace(Task::new(9, "ghost")).unwrap());

    let titles: Vec<_> = store.load().unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["a", "b2", "c"]);
}

#[test]
fn remove_excludes_record_from_collection() {
    let prefs = MemoryPreferences::new();
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);
    store.append(Task::new(1, "a")).unwrap();
    store.append(Task::new(2, "b")).unwrap();

    assert_eq!(store.remove(1).unwrap(), 1);
    assert_eq!(store.remove(1).unwrap(), 0);
    let remaining = store.load().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}

struct BrokenPreferences;

impl PreferenceArea for BrokenPreferences {
    fn get_string(&self, _namespace: &str, _slot_key: &str) -> PrefsResult<String> {
        Err(PrefsError::Unavailable("disk gone".to_string()))
    }

    fn set_string(&self, _namespace: &str, _slot_key: &str, _value: &str) -> PrefsResult<()> {
        Err(PrefsError::Unavailable("disk gone".to_string()))
    }
}

#[test]
fn backend_failure_surfaces_as_store_error() {
    let prefs = BrokenPreferences;
    let store: RecordStore<'_, Task> = RecordStore::new(&prefs);

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Prefs { namespace: "tasks", .. }));
    assert!(store.save(&[]).is_err());
}
