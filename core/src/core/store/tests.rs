mod common {
    use crate::core::store::Store;
    use crate::types::{Config, Email, MovieId, MovieRecord, Session};
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    pub(super) fn create_test_store() -> (Store, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            base_path: temp_dir.path().to_path_buf(),
        };
        let store = Store::open(&config).unwrap();
        (store, temp_dir)
    }

    pub(super) fn make_movie(title: &str, age_secs: i64) -> MovieRecord {
        MovieRecord {
            id: MovieId::generate(),
            title: title.to_string(),
            year: 2020,
            rating: 7.5,
            poster: String::new(),
            url: "#".to_string(),
            file_size: None,
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    pub(super) fn make_session(email: &str) -> Session {
        Session {
            email: Email::try_from(email).unwrap(),
            display_name: "Jane".to_string(),
            avatar_url: "https://ui-avatars.com/api/?name=Jane".to_string(),
        }
    }
}

mod catalog {
    use super::common::{create_test_store, make_movie};

    #[test]
    fn test_absent_catalog_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.load_catalog().unwrap().is_none());
    }

    #[test]
    fn test_catalog_round_trip() {
        let (mut store, _temp) = create_test_store();
        let catalog = vec![make_movie("First", 0), make_movie("Second", 100)];

        store.save_catalog(&catalog).unwrap();

        let loaded = store.load_catalog().unwrap().unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_save_replaces_whole_catalog() {
        let (mut store, _temp) = create_test_store();

        store.save_catalog(&[make_movie("Old", 0)]).unwrap();
        let replacement = vec![make_movie("New", 0)];
        store.save_catalog(&replacement).unwrap();

        let loaded = store.load_catalog().unwrap().unwrap();
        assert_eq!(loaded, replacement);
    }

    #[test]
    fn test_empty_catalog_round_trips() {
        let (mut store, _temp) = create_test_store();

        store.save_catalog(&[]).unwrap();

        let loaded = store.load_catalog().unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_catalog_survives_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = crate::types::Config {
            base_path: temp_dir.path().to_path_buf(),
        };
        let catalog = vec![make_movie("Persisted", 0)];

        {
            let mut store = crate::core::store::Store::open(&config).unwrap();
            store.save_catalog(&catalog).unwrap();
        }

        let store = crate::core::store::Store::open(&config).unwrap();
        assert_eq!(store.load_catalog().unwrap().unwrap(), catalog);
    }
}

mod session {
    use super::common::{create_test_store, make_session};

    #[test]
    fn test_absent_session_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn test_session_round_trip() {
        let (mut store, _temp) = create_test_store();
        let session = make_session("jane@example.com");

        store.save_session(&session).unwrap();

        let loaded = store.load_session().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_clear_session() {
        let (mut store, _temp) = create_test_store();

        store.save_session(&make_session("jane@example.com")).unwrap();
        store.clear_session().unwrap();

        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn test_clear_absent_session_is_noop() {
        let (mut store, _temp) = create_test_store();
        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }
}
