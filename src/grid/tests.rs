//! Grid Module Tests
//!
//! Validates the explicit table state: pagination math, sort cycling,
//! filtering, and parameter decoding.

#[cfg(test)]
mod tests {
    use crate::grid::state::{
        Column, DEFAULT_PER_PAGE, Direction, GridParams, GridState, MAX_PER_PAGE,
    };
    use crate::query::types::SearchRecord;

    fn record(text: &str, work: &str) -> SearchRecord {
        SearchRecord {
            text: text.to_string(),
            work: work.to_string(),
        }
    }

    fn records(count: usize) -> Vec<SearchRecord> {
        (0..count)
            .map(|i| record(&format!("snippet {:02}", i), &format!("work {:02}", i)))
            .collect()
    }

    // ============================================================
    // PAGINATION TESTS
    // ============================================================

    #[test]
    fn test_apply_slices_first_page() {
        let records = records(12);
        let grid = GridState::default();

        let view = grid.apply(&records);

        assert_eq!(view.rows.len(), DEFAULT_PER_PAGE);
        assert_eq!(view.total, 12);
        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.rows[0].text, "snippet 00");
    }

    #[test]
    fn test_apply_last_page_is_partial() {
        let records = records(12);
        let grid = GridState {
            page: 3,
            ..GridState::default()
        };

        let view = grid.apply(&records);

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].text, "snippet 10");
    }

    #[test]
    fn test_apply_clamps_page_into_range() {
        let records = records(12);
        let grid = GridState {
            page: 99,
            ..GridState::default()
        };

        let view = grid.apply(&records);

        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_apply_empty_set_has_one_empty_page() {
        let grid = GridState::default();

        let view = grid.apply(&[]);

        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 1);
        assert!(view.rows.is_empty());
    }

    // ============================================================
    // FILTER TESTS
    // ============================================================

    #[test]
    fn test_filter_matches_both_columns_case_insensitive() {
        let records = vec![
            record("I love thee", "Sonnet 1"),
            record("plain text", "LOVESONG"),
            record("nothing here", "Sonnet 2"),
        ];
        let grid = GridState {
            filter: Some("LOVE".to_string()),
            ..GridState::default()
        };

        let view = grid.apply(&records);

        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_filter_counts_drive_pagination() {
        let mut records = records(12);
        records[7].text = "the needle".to_string();
        let grid = GridState {
            filter: Some("needle".to_string()),
            ..GridState::default()
        };

        let view = grid.apply(&records);

        assert_eq!(view.total, 1);
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_filter_params_reset_page() {
        // The filter form submits without a page field
        let params = GridParams {
            filter: Some("needle".to_string()),
            per: Some(5),
            ..GridParams::default()
        };

        let grid = GridState::from_params(&params);

        assert_eq!(grid.page, 1);
        assert_eq!(grid.filter.as_deref(), Some("needle"));
    }

    // ============================================================
    // SORT TESTS
    // ============================================================

    #[test]
    fn test_sort_ascending_descending() {
        let records = vec![record("bravo", "2"), record("alpha", "3"), record("Charlie", "1")];

        let ascending = GridState {
            sort: Some((Column::Text, Direction::Ascending)),
            ..GridState::default()
        };
        let view = ascending.apply(&records);
        assert_eq!(view.rows[0].text, "alpha");
        assert_eq!(view.rows[2].text, "Charlie");

        let descending = GridState {
            sort: Some((Column::Work, Direction::Descending)),
            ..GridState::default()
        };
        let view = descending.apply(&records);
        assert_eq!(view.rows[0].work, "3");
    }

    #[test]
    fn test_sort_cycles_three_states() {
        let first = GridState::next_sort(None, Column::Text);
        assert_eq!(first, Some((Column::Text, Direction::Ascending)));

        let second = GridState::next_sort(first, Column::Text);
        assert_eq!(second, Some((Column::Text, Direction::Descending)));

        let third = GridState::next_sort(second, Column::Text);
        assert_eq!(third, None);
    }

    #[test]
    fn test_sort_switching_columns_restarts_cycle() {
        let current = Some((Column::Text, Direction::Descending));

        let next = GridState::next_sort(current, Column::Work);

        assert_eq!(next, Some((Column::Work, Direction::Ascending)));
    }

    // ============================================================
    // PARAMETER DECODING TESTS
    // ============================================================

    #[test]
    fn test_from_params_defaults() {
        let grid = GridState::from_params(&GridParams::default());

        assert_eq!(grid, GridState::default());
    }

    #[test]
    fn test_from_params_decodes_sort() {
        let params = GridParams {
            sort: Some("work".to_string()),
            dir: Some("desc".to_string()),
            ..GridParams::default()
        };

        let grid = GridState::from_params(&params);

        assert_eq!(grid.sort, Some((Column::Work, Direction::Descending)));
    }

    #[test]
    fn test_from_params_sort_without_direction_is_ascending() {
        let params = GridParams {
            sort: Some("text".to_string()),
            ..GridParams::default()
        };

        let grid = GridState::from_params(&params);

        assert_eq!(grid.sort, Some((Column::Text, Direction::Ascending)));
    }

    #[test]
    fn test_from_params_rejects_unknown_sort() {
        let params = GridParams {
            sort: Some("score".to_string()),
            dir: Some("asc".to_string()),
            ..GridParams::default()
        };

        let grid = GridState::from_params(&params);

        assert_eq!(grid.sort, None);
    }

    #[test]
    fn test_from_params_clamps_page_and_per() {
        let params = GridParams {
            page: Some(0),
            per: Some(100_000),
            ..GridParams::default()
        };

        let grid = GridState::from_params(&params);

        assert_eq!(grid.page, 1);
        assert_eq!(grid.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_from_params_blank_filter_is_none() {
        let params = GridParams {
            filter: Some("   ".to_string()),
            ..GridParams::default()
        };

        let grid = GridState::from_params(&params);

        assert_eq!(grid.filter, None);
    }

    // ============================================================
    // SELF-LINK TESTS
    // ============================================================

    #[test]
    fn test_query_string_round_trip() {
        let grid = GridState {
            page: 2,
            per_page: 10,
            sort: Some((Column::Text, Direction::Descending)),
            filter: Some("to be".to_string()),
        };

        assert_eq!(
            grid.query_string(),
            "page=2&per=10&sort=text&dir=desc&filter=to%20be"
        );
    }

    #[test]
    fn test_query_string_omits_unset_state() {
        assert_eq!(GridState::default().query_string(), "page=1&per=5");
    }
}
