use super::*;
use crate::types::{MovieId, MovieRecord};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn make_movie(title: &str, age_secs: i64) -> MovieRecord {
    MovieRecord {
        id: MovieId::generate(),
        title: title.to_string(),
        year: 2020,
        rating: 7.0,
        poster: String::new(),
        url: "#".to_string(),
        file_size: None,
        created_at: base_time() - Duration::seconds(age_secs),
    }
}

/// `n` records with strictly decreasing timestamps, named "m0".."m{n-1}".
fn make_catalog(n: usize) -> Vec<MovieRecord> {
    (0..n)
        .map(|i| make_movie(&format!("m{i}"), i as i64 * 100))
        .collect()
}

mod paging {
    use super::*;

    #[test]
    fn test_four_seeds_fit_one_page() {
        let movies = make_catalog(4);
        let mut state = PageState::new(8);

        let view = compute_view(&movies, &mut state);

        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items.len(), 4);
        assert!(!view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn test_nine_records_split_eight_then_one() {
        let movies = make_catalog(9);
        let mut state = PageState::new(8);

        let first = compute_view(&movies, &mut state);
        assert_eq!(first.items.len(), 8);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next);
        assert!(!first.has_prev);

        state.step(PageStep::Next, movies.len());
        let second = compute_view(&movies, &mut state);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.current_page, 2);
        assert!(!second.has_next);
        assert!(second.has_prev);
        assert_eq!(second.items[0].title, "m8");
    }

    #[test]
    fn test_empty_catalog_renders_empty_state() {
        let mut state = PageState::new(8);

        let view = compute_view(&[], &mut state);

        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert!(view.items.is_empty());
        assert!(!view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(16, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
    }
}

mod clamping {
    use super::*;

    #[test]
    fn test_view_never_leaves_valid_page_range() {
        for len in 0..30 {
            for page_size in 1..5 {
                let movies = make_catalog(len);
                let mut state = PageState::new(page_size);
                state.current_page = 99;

                let view = compute_view(&movies, &mut state);

                let max_page = total_pages(len, page_size).max(1);
                assert!(view.current_page >= 1);
                assert!(view.current_page <= max_page);
                assert_eq!(state.current_page, view.current_page);
            }
        }
    }

    #[test]
    fn test_next_saturates_at_last_page() {
        let movies = make_catalog(9);
        let mut state = PageState::new(8);

        for _ in 0..10 {
            state.step(PageStep::Next, movies.len());
        }

        let view = compute_view(&movies, &mut state);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_prev_saturates_at_first_page() {
        let movies = make_catalog(9);
        let mut state = PageState::new(8);

        for _ in 0..10 {
            state.step(PageStep::Prev, movies.len());
        }

        let view = compute_view(&movies, &mut state);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_step_ignored_on_empty_catalog() {
        let mut state = PageState::new(8);
        state.step(PageStep::Next, 0);
        assert_eq!(state.current_page, 1);
    }
}

mod ordering {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        // Collection order is oldest-first here; display must reverse it.
        let mut movies = make_catalog(3);
        movies.reverse();
        let mut state = PageState::new(8);

        let view = compute_view(&movies, &mut state);

        assert_eq!(view.items[0].title, "m0");
        assert_eq!(view.items[1].title, "m1");
        assert_eq!(view.items[2].title, "m2");
    }

    #[test]
    fn test_equal_timestamps_keep_collection_order() {
        let movies = vec![
            make_movie("first", 0),
            make_movie("second", 0),
            make_movie("third", 0),
        ];
        let mut state = PageState::new(8);

        let view = compute_view(&movies, &mut state);

        assert_eq!(view.items[0].title, "first");
        assert_eq!(view.items[1].title, "second");
        assert_eq!(view.items[2].title, "third");
    }

    #[test]
    fn test_sort_does_not_mutate_catalog() {
        let movies = make_catalog(3);
        let before = movies.clone();
        let mut state = PageState::new(8);

        let _ = compute_view(&movies, &mut state);

        assert_eq!(movies, before);
    }
}

mod posters {
    use super::*;

    #[test]
    fn test_empty_poster_falls_back_to_placeholder() {
        let movie = make_movie("no poster", 0);
        assert_eq!(poster_or_placeholder(&movie), PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_declared_poster_is_kept() {
        let mut movie = make_movie("with poster", 0);
        movie.poster = "https://example.com/p.jpg".to_string();
        assert_eq!(poster_or_placeholder(&movie), "https://example.com/p.jpg");
    }

    #[test]
    fn test_fallback_leaves_record_untouched() {
        let movie = make_movie("no poster", 0);
        let _ = poster_or_placeholder(&movie);
        assert_eq!(movie.poster, "");
    }
}
