impl<TP, IN> BusBoardApp<TP, IN>
where
    TP: TransportPort,
    IN: InputProvider,
{
    /// Advances one wall-clock second: drains input, updates the link
    /// estimate, and runs the refresh schedule.
    pub fn tick_second(&mut self) -> TickResult {
        self.process_inputs();

        if self.link.tick_second().is_some() {
            self.pending_redraw = true;
        }

        // Extrapolated ETAs move on whole-minute boundaries.
        if !self.link.is_online() && self.link.seconds_since_success() % 60 == 0 {
            self.pending_redraw = true;
        }

        self.advance_refresh_schedule();
        self.take_redraw()
    }

    /// Drains pending input between ticks for lower button latency.
    pub fn poll_input(&mut self) -> TickResult {
        self.process_inputs();
        self.take_redraw()
    }

    /// Feeds one inbound message field to the app. Any recognized key
    /// counts as a successful refresh.
    pub fn on_message_field(&mut self, key: u32, value: &str) -> TickResult {
        let Ok(key) = MessageKey::try_from(key) else {
            debug!("msg: ignoring unknown key={}", key);
            return TickResult::NoRender;
        };

        self.request_in_flight = false;
        if self.link.mark_success().is_some() {
            self.pending_redraw = true;
        }

        match key {
            MessageKey::StopData => {
                self.stops.decode(value);
                self.stop_list_stale = false;
            }
            MessageKey::ArrivalData => self.apply_arrival_payload(value),
        }

        self.pending_redraw = true;
        self.take_redraw()
    }

    /// Host callback when the outbound request could not be delivered.
    pub fn on_send_failed(&mut self) {
        self.request_in_flight = false;
        self.next_request_in_secs = self
            .next_request_in_secs
            .min(self.config.failure_retry_secs);
        warn!(
            "refresh: send failed, next attempt in {}s",
            self.next_request_in_secs
        );
    }

    pub fn on_send_succeeded(&mut self) {
        debug!("refresh: request delivered");
    }

    /// Host callback when an inbound message had to be dropped.
    pub fn on_inbox_dropped(&mut self) {
        warn!("msg: inbound message dropped");
    }

    /// Requests an update now unless one is already outstanding.
    pub fn request_refresh(&mut self) {
        if self.request_in_flight {
            debug!("refresh: request already in flight");
            return;
        }

        let request = UpdateRequest {
            stop_id: self.stops.configured_id(),
            refresh_stop_list: self.stop_list_stale,
        };

        match self.transport.request_update(request) {
            Ok(()) => {
                self.request_in_flight = true;
                self.next_request_in_secs = self.config.refresh_interval_secs;
                debug!(
                    "refresh: requested stop_id={} refresh_stop_list={}",
                    request.stop_id, request.refresh_stop_list
                );
            }
            Err(_) => {
                self.next_request_in_secs = self.config.failure_retry_secs;
                warn!("refresh: request rejected, retrying sooner");
            }
        }
    }

    fn apply_arrival_payload(&mut self, payload: &str) {
        let prev = focus::capture(&self.feed, self.pager.linear(self.cursor));
        self.feed.decode(payload);

        match prev
            .as_ref()
            .and_then(|focus| focus::rescore(focus, &self.feed))
        {
            Some(index) => self.cursor = self.pager.decompose(index),
            None => {
                self.cursor = PageCursor::home();
                if let UiState::Board { zoomed: true } = self.ui {
                    self.ui = UiState::Board { zoomed: false };
                }
            }
        }
    }

    fn advance_refresh_schedule(&mut self) {
        if self.next_request_in_secs > 1 {
            self.next_request_in_secs -= 1;
            return;
        }

        self.next_request_in_secs = self.config.refresh_interval_secs;
        self.request_refresh();
    }

    fn take_redraw(&mut self) -> TickResult {
        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }
}
