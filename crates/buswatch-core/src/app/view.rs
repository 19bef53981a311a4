impl<TP, IN> BusBoardApp<TP, IN>
where
    TP: TransportPort,
    IN: InputProvider,
{
    pub fn new(transport: TP, input: IN, mut config: BoardConfig, app_title: &'static str) -> Self {
        config.refresh_interval_secs = config.refresh_interval_secs.max(1);
        config.failure_retry_secs = config.failure_retry_secs.max(1);

        Self {
            transport,
            input,
            link: LinkMonitor::new(config.refresh_interval_secs),
            stops: StopDirectory::new(config.configured_stop_id),
            config,
            app_title,
            feed: FeedSnapshot::new(),
            pager: Pager::new(ROWS_PER_PAGE),
            cursor: PageCursor::home(),
            ui: UiState::Board { zoomed: false },
            pending_redraw: true,
            request_in_flight: false,
            next_request_in_secs: FIRST_REFRESH_AFTER_SECS,
            stop_list_stale: true,
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        match self.ui {
            UiState::Board { zoomed } => {
                let mut rows = [BoardRow::default(); ROWS_PER_PAGE];
                let mut count = 0usize;

                let row_count = self.feed.row_count();
                let stale_minutes = self.link.stale_minutes();
                let limit = eta::approach_limit(self.stops.active_distance_m().unwrap_or(0));
                let page_start = self.cursor.page * self.pager.rows_per_page();
                let page_end = row_count.min(page_start + self.pager.rows_per_page());

                for index in page_start..page_end {
                    let Some(arrival) = self.feed.row(index) else {
                        break;
                    };
                    let eta_minutes = eta::extrapolated(arrival.eta_minutes, stale_minutes);
                    rows[count] = BoardRow {
                        line: arrival.line.as_str(),
                        destination: arrival.destination.as_str(),
                        eta_minutes,
                        color_slot: line_color_slot(arrival.line.as_str()),
                        highlighted: eta_minutes <= limit,
                    };
                    count += 1;
                }

                f(Screen::Board {
                    title: self.title(),
                    rows: &rows[..count],
                    cursor_row: self.cursor.row.min(count.saturating_sub(1)),
                    page: self.page_info(),
                    zoomed: zoomed && count > 0,
                    online: self.link.is_online(),
                    seconds_since_update: self.link.seconds_since_success(),
                });
            }
            UiState::StopSelect { cursor } => {
                let mut rows = [StopRow::default(); NUM_STOPS];
                let mut count = 0usize;

                for stop in self.stops.stops() {
                    rows[count] = StopRow {
                        name: stop.name.as_str(),
                        distance_m: stop.distance_m,
                        active: Some(count) == self.stops.active_index(),
                    };
                    count += 1;
                }

                f(Screen::StopSelect {
                    title: self.title(),
                    rows: &rows[..count],
                    cursor: cursor.min(count.saturating_sub(1)),
                });
            }
        }
    }

    pub fn title(&self) -> &str {
        self.stops.title().unwrap_or(self.app_title)
    }

    pub fn link_state(&self) -> LinkState {
        self.link.state()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current: self.cursor.page + 1,
            total: self.pager.page_count(self.feed.row_count()).max(1),
        }
    }

    pub fn with_transport_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut TP) -> R,
    {
        f(&mut self.transport)
    }

    pub fn with_input_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut IN) -> R,
    {
        f(&mut self.input)
    }
}
