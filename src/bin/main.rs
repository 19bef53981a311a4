use buswatch_core::{
    app::{BoardConfig, BusBoardApp, TickResult},
    input::{InputEvent, InputProvider},
    transport::{TransportPort, UpdateRequest},
};
use log::{LevelFilter, info};

use feed_script::Reply;

#[path = "main/feed_script.rs"]
mod feed_script;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "Buswatch";
const SIM_SECONDS: u32 = 180;
const REFRESH_INTERVAL_SECS: u32 = 10;
const FAILURE_RETRY_SECS: u32 = 3;
const REPLY_DELAY_SECS: u32 = 1;

// (second, event) pairs played back against the app clock.
const INPUT_SCRIPT: &[(u32, InputEvent)] = &[
    (5, InputEvent::Down),
    (6, InputEvent::Down),
    (8, InputEvent::Select),
    (11, InputEvent::Select),
    (14, InputEvent::LongDown),
    (17, InputEvent::LongUp),
    (30, InputEvent::Back),
    (31, InputEvent::Down),
    (33, InputEvent::Select),
    (72, InputEvent::Shake),
];

struct SimInput {
    script: &'static [(u32, InputEvent)],
    cursor: usize,
    now: u32,
}

impl SimInput {
    const fn new(script: &'static [(u32, InputEvent)]) -> Self {
        Self {
            script,
            cursor: 0,
            now: 0,
        }
    }

    fn advance_to(&mut self, second: u32) {
        self.now = second;
    }
}

impl InputProvider for SimInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(&(at, event)) = self.script.get(self.cursor) else {
            return Ok(None);
        };
        if at > self.now {
            return Ok(None);
        }
        self.cursor += 1;
        info!("input: t={}s event={:?}", at, event);
        Ok(Some(event))
    }
}

/// Stands in for the phone bridge; the main loop picks requests up and
/// answers them through the feed script.
struct SimTransport {
    pending: Option<UpdateRequest>,
}

impl SimTransport {
    const fn new() -> Self {
        Self { pending: None }
    }
}

impl TransportPort for SimTransport {
    type Error = ();

    fn request_update(&mut self, request: UpdateRequest) -> Result<(), Self::Error> {
        self.pending = Some(request);
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Delivery {
    Field {
        at: u32,
        key: u32,
        payload: &'static str,
    },
    Failed {
        at: u32,
    },
}

impl Delivery {
    fn due_at(self) -> u32 {
        match self {
            Self::Field { at, .. } | Self::Failed { at } => at,
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let config = BoardConfig {
        refresh_interval_secs: REFRESH_INTERVAL_SECS,
        failure_retry_secs: FAILURE_RETRY_SECS,
        ..BoardConfig::default()
    };
    let mut app = BusBoardApp::new(
        SimTransport::new(),
        SimInput::new(INPUT_SCRIPT),
        config,
        TITLE,
    );

    let mut inbox: Vec<Delivery> = Vec::new();
    let mut request_ordinal = 0usize;

    info!(
        "sim: running {}s, refresh every {}s, retry after {}s",
        SIM_SECONDS, REFRESH_INTERVAL_SECS, FAILURE_RETRY_SECS
    );

    for second in 1..=SIM_SECONDS {
        app.with_input_mut(|input| input.advance_to(second));

        let mut render = app.tick_second() == TickResult::RenderRequested;

        let mut index = 0;
        while index < inbox.len() {
            if inbox[index].due_at() > second {
                index += 1;
                continue;
            }
            match inbox.remove(index) {
                Delivery::Field { key, payload, .. } => {
                    if app.on_message_field(key, payload) == TickResult::RenderRequested {
                        render = true;
                    }
                }
                Delivery::Failed { .. } => app.on_send_failed(),
            }
        }

        if let Some(request) = app.with_transport_mut(|port| port.pending.take()) {
            info!(
                "sim: request #{} t={}s stop_id={} refresh_stop_list={}",
                request_ordinal, second, request.stop_id, request.refresh_stop_list
            );
            match feed_script::reply_for(&request, request_ordinal) {
                Reply::Fields(fields) => {
                    for (key, payload) in fields {
                        inbox.push(Delivery::Field {
                            at: second + REPLY_DELAY_SECS,
                            key,
                            payload,
                        });
                    }
                }
                Reply::Timeout { after_secs } => {
                    inbox.push(Delivery::Failed {
                        at: second + after_secs,
                    });
                }
            }
            request_ordinal += 1;
        }

        if render {
            app.with_screen(|screen| terminal::draw(&screen, second));
        }
    }

    info!(
        "sim: finished after {}s, {} requests sent",
        SIM_SECONDS, request_ordinal
    );
}
