use chrono::Duration;
use speculate2::speculate;
use todolists::db::SessionStore;
use todolists::models::*;
use uuid::Uuid;

fn sample_session() -> SessionData {
    let mut list = TodoList::new("Groceries");
    list.push_todo("milk");
    let mut data = SessionData {
        lists: vec![list],
        flashes: vec![],
    };
    data.flash(FlashKind::Success, "The list has been created.");
    data
}

speculate! {
    before {
        let store = SessionStore::open_memory().expect("Failed to create in-memory store");
        store.migrate().expect("Failed to run migrations");
    }

    describe "load" {
        it "returns None for a session that was never saved" {
            assert!(store.load(Uuid::new_v4()).expect("Query failed").is_none());
        }

        it "returns what was saved" {
            let id = Uuid::new_v4();
            let data = sample_session();
            store.save(id, &data).expect("Failed to save");

            let loaded = store.load(id).expect("Query failed").expect("session");
            assert_eq!(loaded, data);
        }
    }

    describe "save" {
        it "replaces an existing session" {
            let id = Uuid::new_v4();
            store.save(id, &sample_session()).expect("Failed to save");
            store.save(id, &SessionData::default()).expect("Failed to save");

            let loaded = store.load(id).expect("Query failed").expect("session");
            assert!(loaded.lists.is_empty());
            assert_eq!(store.count().expect("Query failed"), 1);
        }

        it "keeps sessions isolated from each other" {
            let a = Uuid::new_v4();
            let b = Uuid::new_v4();
            store.save(a, &sample_session()).expect("Failed to save");
            store.save(b, &SessionData::default()).expect("Failed to save");

            assert_eq!(store.load(a).expect("Query failed").expect("session").lists.len(), 1);
            assert!(store.load(b).expect("Query failed").expect("session").lists.is_empty());
        }

        it "records when the session was last written" {
            let id = Uuid::new_v4();
            assert!(store.last_updated(id).expect("Query failed").is_none());

            store.save(id, &sample_session()).expect("Failed to save");
            let updated = store.last_updated(id).expect("Query failed").expect("timestamp");
            assert!(chrono::Utc::now() - updated < Duration::minutes(1));
        }
    }

    describe "delete" {
        it "removes the session" {
            let id = Uuid::new_v4();
            store.save(id, &sample_session()).expect("Failed to save");

            assert!(store.delete(id).expect("Failed to delete"));
            assert!(store.load(id).expect("Query failed").is_none());
        }

        it "returns false for an unknown session" {
            assert!(!store.delete(Uuid::new_v4()).expect("Failed to delete"));
        }
    }

    describe "prune_idle" {
        it "keeps recently written sessions" {
            store.save(Uuid::new_v4(), &sample_session()).expect("Failed to save");
            assert_eq!(store.prune_idle(Duration::hours(1)).expect("Prune failed"), 0);
            assert_eq!(store.count().expect("Query failed"), 1);
        }

        it "removes sessions idle past the limit" {
            store.save(Uuid::new_v4(), &sample_session()).expect("Failed to save");
            std::thread::sleep(std::time::Duration::from_millis(20));

            assert_eq!(store.prune_idle(Duration::milliseconds(5)).expect("Prune failed"), 1);
            assert_eq!(store.count().expect("Query failed"), 0);
        }

        it "refuses a non-positive idle limit and keeps fresh sessions" {
            store.save(Uuid::new_v4(), &sample_session()).expect("Failed to save");

            assert!(store.prune_idle(Duration::seconds(-5)).is_err());
            assert!(store.prune_idle(Duration::zero()).is_err());
            assert_eq!(store.count().expect("Query failed"), 1);
        }

        it "prunes nothing when the cutoff predates every timestamp" {
            store.save(Uuid::new_v4(), &sample_session()).expect("Failed to save");

            let removed = store
                .prune_idle(Duration::seconds(9_000_000_000_000))
                .expect("Prune failed");
            assert_eq!(removed, 0);
            assert_eq!(store.count().expect("Query failed"), 1);
        }
    }

    describe "file-backed store" {
        it "persists sessions across reopen" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("sessions").join("todos.db");
            let id = Uuid::new_v4();

            {
                let store = SessionStore::open(path.clone()).expect("Failed to open");
                store.migrate().expect("Failed to migrate");
                store.save(id, &sample_session()).expect("Failed to save");
            }

            let reopened = SessionStore::open(path).expect("Failed to reopen");
            reopened.migrate().expect("Failed to migrate");
            let loaded = reopened.load(id).expect("Query failed").expect("session");
            assert_eq!(loaded.lists[0].title, "Groceries");
        }
    }
}
