impl<TP, IN> BusBoardApp<TP, IN>
where
    TP: TransportPort,
    IN: InputProvider,
{
    fn process_inputs(&mut self) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider failed, dropping poll");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent) {
        match self.ui {
            UiState::Board { zoomed } => self.apply_board_input(zoomed, event),
            UiState::StopSelect { cursor } => self.apply_stop_select_input(cursor, event),
        }
    }

    fn apply_board_input(&mut self, zoomed: bool, event: InputEvent) {
        let row_count = self.feed.row_count();

        match event {
            InputEvent::Up => self.move_cursor(self.pager.move_up(self.cursor)),
            InputEvent::Down => self.move_cursor(self.pager.move_down(self.cursor, row_count)),
            InputEvent::LongUp => self.move_cursor(self.pager.page_back(self.cursor)),
            InputEvent::LongDown => {
                self.move_cursor(self.pager.page_forward(self.cursor, row_count))
            }
            InputEvent::Select => {
                if row_count > 0 {
                    self.ui = UiState::Board { zoomed: !zoomed };
                    self.pending_redraw = true;
                    debug!("ui: zoom {}", if zoomed { "off" } else { "on" });
                }
            }
            InputEvent::Back => self.enter_stop_select(),
            InputEvent::Shake => self.request_refresh(),
        }
    }

    fn apply_stop_select_input(&mut self, cursor: usize, event: InputEvent) {
        match event {
            InputEvent::Up => {
                if cursor > 0 {
                    self.ui = UiState::StopSelect { cursor: cursor - 1 };
                    self.pending_redraw = true;
                }
            }
            InputEvent::Down => {
                if cursor + 1 < self.stops.len() {
                    self.ui = UiState::StopSelect { cursor: cursor + 1 };
                    self.pending_redraw = true;
                }
            }
            InputEvent::Select => self.commit_stop_selection(cursor),
            InputEvent::Back => self.enter_board(),
            InputEvent::Shake => self.request_refresh(),
            InputEvent::LongUp | InputEvent::LongDown => {}
        }
    }

    fn move_cursor(&mut self, next: PageCursor) {
        if next != self.cursor {
            self.cursor = next;
            self.pending_redraw = true;
        }
    }

    fn enter_stop_select(&mut self) {
        let cursor = self.stops.active_index().unwrap_or(0);
        self.stop_list_stale = true;
        self.ui = UiState::StopSelect { cursor };
        self.pending_redraw = true;
        debug!("ui: enter stop select cursor={}", cursor);
    }

    fn enter_board(&mut self) {
        self.ui = UiState::Board { zoomed: false };
        self.pending_redraw = true;
    }

    fn commit_stop_selection(&mut self, cursor: usize) {
        if let Some(stop) = self.stops.stop_at(cursor) {
            let id = stop.id;
            debug!("ui: stop committed id={} name={:?}", id, stop.name.as_str());
            self.stops.set_configured_id(id);
            self.config.configured_stop_id = id;
            self.cursor = PageCursor::home();
            self.request_refresh();
        }

        self.enter_board();
    }
}
