use stickynote_core::{
    BoardConfig, KeyValueStore, MemoryKeyValueStore, Note, NoteColor, NotePersistence, NoteStore,
    ProjectionView, SqliteKeyValueStore, DEFAULT_STORAGE_KEY, MAX_NOTE_ID,
};

type MemoryStore = NoteStore<MemoryKeyValueStore, ProjectionView>;

fn empty_store() -> MemoryStore {
    NoteStore::open(
        MemoryKeyValueStore::new(),
        ProjectionView::new(),
        &BoardConfig::default(),
    )
}

fn persisted(store: &MemoryStore) -> Vec<Note> {
    let bytes = store
        .persistence()
        .store()
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .unwrap_or_else(|| b"[]".to_vec());
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn groceries_scenario() {
    let mut store = empty_store();
    assert!(store.is_empty());
    assert!(store.view().board().placeholder_visible);

    store.create("Groceries", "Milk").unwrap();
    assert_eq!(store.notes(), &[Note::new(1, "Groceries", "Milk")]);
    assert_eq!(store.notes()[0].color, NoteColor::default());

    assert!(store.update_color(1, NoteColor::parse("#fffa65").unwrap()));
    assert_eq!(store.notes()[0].color.as_str(), "#fffa65");

    assert!(store.delete(1));
    assert!(store.notes().is_empty());
    assert!(persisted(&store).is_empty());
    assert!(store.view().board().placeholder_visible);
}

#[test]
fn blank_create_is_rejected_and_single_field_notes_are_accepted() {
    let mut store = empty_store();

    assert!(store.create("", "").is_none());
    assert!(store.is_empty());

    let title_only = store.create("A", "").unwrap();
    assert_eq!(store.len(), 1);
    let text_only = store.create("", "B").unwrap();
    assert_eq!(store.len(), 2);

    assert_eq!((title_only.id, text_only.id), (1, 2));
    assert_eq!(store.view().board().cards[0].title.as_deref(), Some("A"));
    assert_eq!(store.view().board().cards[1].title, None);
}

#[test]
fn ids_are_not_reused_after_deleting_a_middle_note() {
    let mut store = empty_store();
    store.create("one", "").unwrap();
    store.create("two", "").unwrap();
    store.create("three", "").unwrap();
    store.delete(2);

    let fourth = store.create("four", "").unwrap();
    assert_eq!(fourth.id, 4);
    assert_eq!(
        store.notes().iter().map(|note| note.id).collect::<Vec<_>>(),
        vec![1, 3, 4]
    );
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut store = empty_store();
    store.create("keep", "me").unwrap();
    let before = store.notes().to_vec();
    let renders = store.view().render_count();

    assert!(!store.update(42, "x", "y"));
    assert!(!store.update_color(42, NoteColor::parse("#000").unwrap()));
    assert!(!store.delete(42));

    assert_eq!(store.notes(), before.as_slice());
    assert_eq!(store.view().render_count(), renders);
}

#[test]
fn update_preserves_id_and_color() {
    let mut store = empty_store();
    store.create("draft", "").unwrap();
    store.update_color(1, NoteColor::parse("#ccff90").unwrap());

    assert!(store.update(1, "final", "body"));
    let note = store.get(1).unwrap();
    assert_eq!(note.title, "final");
    assert_eq!(note.text, "body");
    assert_eq!(note.color.as_str(), "#ccff90");
}

#[test]
fn persisted_state_tracks_memory_after_every_mutation() {
    let mut store = empty_store();
    let steps: Vec<Box<dyn Fn(&mut MemoryStore)>> = vec![
        Box::new(|s: &mut MemoryStore| {
            s.create("a", "1");
        }),
        Box::new(|s: &mut MemoryStore| {
            s.create("", "2");
        }),
        Box::new(|s: &mut MemoryStore| {
            s.update(1, "a2", "1b");
        }),
        Box::new(|s: &mut MemoryStore| {
            s.update_color(2, NoteColor::parse("#d7aefb").unwrap());
        }),
        Box::new(|s: &mut MemoryStore| {
            s.delete(1);
        }),
        Box::new(|s: &mut MemoryStore| {
            s.create("c", "");
        }),
    ];

    for step in steps {
        step(&mut store);
        assert_eq!(persisted(&store), store.notes());
        assert_eq!(store.view().board().cards.len(), store.len());
    }
}

#[test]
fn reopen_restores_collection_from_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    {
        let kv = SqliteKeyValueStore::open(&path).unwrap();
        let mut store = NoteStore::open(kv, ProjectionView::new(), &BoardConfig::default());
        store.create("persist", "me").unwrap();
        store.create("and", "me").unwrap();
    }

    let kv = SqliteKeyValueStore::open(&path).unwrap();
    let store = NoteStore::open(kv, ProjectionView::new(), &BoardConfig::default());
    assert_eq!(store.len(), 2);
    assert_eq!(store.view().board().cards[1].text, "me");
    assert!(!store.view().board().placeholder_visible);
}

#[test]
fn corrupt_state_opens_empty_and_next_save_overwrites_it() {
    let kv = MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, "{broken");
    let mut store = NoteStore::open(kv, ProjectionView::new(), &BoardConfig::default());
    assert!(store.is_empty());

    store.create("fresh", "").unwrap();
    assert_eq!(persisted(&store), store.notes());
}

#[test]
fn save_then_load_round_trips() {
    let mut colored = Note::new(5, "t", "multi\nline");
    colored.color = NoteColor::parse("#FDCFE8").unwrap();
    let collections = vec![
        Vec::new(),
        vec![Note::new(1, "only", "")],
        vec![colored, Note::new(2, "", "\"quoted\" <b>")],
    ];

    for notes in collections {
        let mut persistence = NotePersistence::new(MemoryKeyValueStore::new());
        persistence.save(&notes).unwrap();
        assert_eq!(persistence.load(), notes);
    }
}

#[test]
fn out_of_range_persisted_id_loads_empty_and_create_starts_over() {
    let seeded = format!(
        r##"[{{"id":{},"title":"a","text":"","color":"#fff"}}]"##,
        u64::MAX
    );
    let kv = MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, seeded);
    let mut store = NoteStore::open(kv, ProjectionView::new(), &BoardConfig::default());
    assert!(store.is_empty());

    let created = store.create("b", "").unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(persisted(&store), store.notes());
}

#[test]
fn highest_id_blocks_further_creates_but_keeps_existing_notes() {
    let seeded = format!(
        r##"[{{"id":7,"title":"low","text":"","color":"#fff"}},{{"id":{MAX_NOTE_ID},"title":"top","text":"","color":"#fff"}}]"##
    );
    let kv = MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, seeded);
    let mut store = NoteStore::open(kv, ProjectionView::new(), &BoardConfig::default());
    assert_eq!(store.len(), 2);

    assert!(store.create("overflow", "").is_none());
    assert_eq!(store.len(), 2);

    assert!(store.delete(MAX_NOTE_ID));
    let created = store.create("after", "").unwrap();
    assert_eq!(created.id, 8);
}
