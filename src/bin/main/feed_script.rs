//! Canned phone-side replies for the simulator.

use buswatch_core::transport::{MessageKey, UpdateRequest};

pub(super) enum Reply {
    Fields(Vec<(u32, &'static str)>),
    Timeout { after_secs: u32 },
}

const MARKET_STREET_ID: i32 = 1002;

const DOWNTOWN_STOPS: &str =
    "Central Station;150;1001;Market Street;340;1002;Harbor Gate;520;1003;";

const DOWNTOWN_ARRIVALS: [&str; 3] = [
    "9;12;Central Station;3;9;Airport;7;33;Harbor Gate;11;12;Central Station;15;\
     45;University;18;9;Airport;22;7;Old Town;26;33;Harbor Gate;31;12;Central Station;38;",
    "9;9;Airport;6;33;Harbor Gate;10;12;Central Station;14;45;University;17;\
     9;Airport;21;7;Old Town;25;33;Harbor Gate;30;12;Central Station;37;41;Stadium;44;",
    "8;33;Harbor Gate;9;9;Airport;5;12;Central Station;13;45;University;16;\
     9;Airport;20;7;Old Town;24;33;Harbor Gate;29;12;Central Station;36;",
];

const MARKET_ARRIVALS: [&str; 2] = [
    "5;22;Riverside;4;22;Riverside;12;8;Museum;9;51;Airport Express;16;8;Museum;23;",
    "5;8;Museum;8;22;Riverside;3;51;Airport Express;15;22;Riverside;11;8;Museum;22;",
];

/// Maps the nth outbound request to a scripted reply. Ordinal 2 is
/// rejected right away; 5 through 10 go unanswered long enough to force
/// the board offline.
pub(super) fn reply_for(request: &UpdateRequest, ordinal: usize) -> Reply {
    match ordinal {
        2 => return Reply::Timeout { after_secs: 1 },
        5..=10 => return Reply::Timeout { after_secs: 8 },
        _ => {}
    }

    let arrivals: &[&str] = if request.stop_id == MARKET_STREET_ID {
        &MARKET_ARRIVALS
    } else {
        &DOWNTOWN_ARRIVALS
    };

    let mut fields = Vec::new();
    if request.refresh_stop_list {
        fields.push((MessageKey::StopData.code(), DOWNTOWN_STOPS));
    }
    fields.push((
        MessageKey::ArrivalData.code(),
        arrivals[ordinal % arrivals.len()],
    ));
    Reply::Fields(fields)
}
