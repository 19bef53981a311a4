//! Application state machine for the departure board and stop selection.

use log::{debug, warn};

use crate::{
    eta,
    feed::FeedSnapshot,
    focus,
    input::{InputEvent, InputProvider},
    link::{LinkMonitor, LinkState},
    pager::{PageCursor, Pager, ROWS_PER_PAGE},
    render::{BoardRow, PageInfo, Screen, StopRow, line_color_slot},
    stops::{AUTO_STOP_ID, NUM_STOPS, StopDirectory},
    transport::{MessageKey, TransportPort, UpdateRequest},
};

const FIRST_REFRESH_AFTER_SECS: u32 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardConfig {
    pub refresh_interval_secs: u32,
    pub failure_retry_secs: u32,
    pub configured_stop_id: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 30,
            failure_retry_secs: 5,
            configured_stop_id: AUTO_STOP_ID,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Board { zoomed: bool },
    StopSelect { cursor: usize },
}

pub struct BusBoardApp<TP, IN>
where
    TP: TransportPort,
    IN: InputProvider,
{
    transport: TP,
    input: IN,
    config: BoardConfig,
    app_title: &'static str,
    feed: FeedSnapshot,
    stops: StopDirectory,
    pager: Pager,
    cursor: PageCursor,
    link: LinkMonitor,
    ui: UiState,
    pending_redraw: bool,
    request_in_flight: bool,
    next_request_in_secs: u32,
    stop_list_stale: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
