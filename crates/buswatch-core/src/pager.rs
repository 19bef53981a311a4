//! Page/row cursor arithmetic over the arrival table.

/// Rows shown per board page.
pub const ROWS_PER_PAGE: usize = 7;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageCursor {
    pub page: usize,
    pub row: usize,
}

impl PageCursor {
    pub const fn home() -> Self {
        Self { page: 0, row: 0 }
    }
}

/// Bounded cursor motion. Every move takes the live row count, so page
/// math always follows the latest refresh.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pager {
    rows_per_page: usize,
}

impl Pager {
    pub const fn new(rows_per_page: usize) -> Self {
        Self {
            rows_per_page: if rows_per_page == 0 { 1 } else { rows_per_page },
        }
    }

    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn linear(&self, cursor: PageCursor) -> usize {
        cursor.page * self.rows_per_page + cursor.row
    }

    pub fn decompose(&self, linear: usize) -> PageCursor {
        PageCursor {
            page: linear / self.rows_per_page,
            row: linear % self.rows_per_page,
        }
    }

    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.rows_per_page)
    }

    pub fn move_up(&self, cursor: PageCursor) -> PageCursor {
        let linear = self.linear(cursor);
        if linear == 0 {
            return cursor;
        }
        self.decompose(linear - 1)
    }

    pub fn move_down(&self, cursor: PageCursor, row_count: usize) -> PageCursor {
        let linear = self.linear(cursor);
        if linear + 1 >= row_count {
            return cursor;
        }
        self.decompose(linear + 1)
    }

    /// Whole-page jump toward the first page; earlier pages are always
    /// full, so the row carries over unchanged.
    pub fn page_back(&self, cursor: PageCursor) -> PageCursor {
        if cursor.page == 0 {
            return cursor;
        }
        PageCursor {
            page: cursor.page - 1,
            row: cursor.row,
        }
    }

    /// Whole-page jump toward the last page, clamping the row to the rows
    /// that exist there.
    pub fn page_forward(&self, cursor: PageCursor, row_count: usize) -> PageCursor {
        let next_page = cursor.page + 1;
        let page_start = next_page * self.rows_per_page;
        if page_start >= row_count {
            return cursor;
        }

        let last_row = (row_count - 1 - page_start).min(self.rows_per_page - 1);
        PageCursor {
            page: next_page,
            row: cursor.row.min(last_row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let pager = Pager::new(6);
        assert_eq!(pager.page_count(7), 2);
        assert_eq!(pager.page_count(6), 1);
        assert_eq!(pager.page_count(13), 3);
        assert_eq!(pager.page_count(0), 0);
    }

    #[test]
    fn decompose_splits_linear_index() {
        let pager = Pager::new(7);
        assert_eq!(pager.decompose(0), PageCursor::home());
        assert_eq!(pager.decompose(6), PageCursor { page: 0, row: 6 });
        assert_eq!(pager.decompose(7), PageCursor { page: 1, row: 0 });
        assert_eq!(pager.linear(PageCursor { page: 2, row: 3 }), 17);
    }

    #[test]
    fn move_down_stops_at_last_row() {
        let pager = Pager::new(6);
        let cursor = pager.decompose(6);
        assert_eq!(cursor, PageCursor { page: 1, row: 0 });
        assert_eq!(pager.move_down(cursor, 7), cursor);
    }

    #[test]
    fn move_up_stops_at_home() {
        let pager = Pager::new(6);
        assert_eq!(pager.move_up(PageCursor::home()), PageCursor::home());
    }

    #[test]
    fn moves_cross_page_boundaries() {
        let pager = Pager::new(7);
        let last_of_first = PageCursor { page: 0, row: 6 };
        assert_eq!(
            pager.move_down(last_of_first, 21),
            PageCursor { page: 1, row: 0 }
        );
        assert_eq!(pager.move_up(PageCursor { page: 1, row: 0 }), last_of_first);
    }

    #[test]
    fn move_down_respects_row_count_inside_page() {
        let pager = Pager::new(7);
        let cursor = PageCursor { page: 0, row: 2 };
        assert_eq!(pager.move_down(cursor, 3), cursor);
        assert_eq!(
            pager.move_down(cursor, 4),
            PageCursor { page: 0, row: 3 }
        );
    }

    #[test]
    fn page_forward_clamps_row_to_target_page() {
        let pager = Pager::new(7);
        let cursor = PageCursor { page: 0, row: 6 };

        assert_eq!(
            pager.page_forward(cursor, 10),
            PageCursor { page: 1, row: 2 }
        );
        assert_eq!(
            pager.page_forward(PageCursor { page: 1, row: 2 }, 10),
            PageCursor { page: 1, row: 2 }
        );
        assert_eq!(
            pager.page_back(PageCursor { page: 1, row: 2 }),
            PageCursor { page: 0, row: 2 }
        );
        assert_eq!(pager.page_back(cursor), cursor);
    }
}
