//! Connectivity estimation from refresh success timing.

use log::info;

/// Link status derived from time since the last successful refresh.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkState {
    Online,
    Offline,
}

/// State change, reported exactly once per flip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkTransition {
    Lost,
    Restored,
}

/// Counts seconds since the last successful refresh and flips between
/// Online and Offline around a threshold of one and a half refresh
/// intervals.
pub struct LinkMonitor {
    seconds_since_success: u32,
    state: LinkState,
    offline_after_secs: u32,
}

impl LinkMonitor {
    pub const fn new(refresh_interval_secs: u32) -> Self {
        Self {
            seconds_since_success: 0,
            state: LinkState::Online,
            offline_after_secs: refresh_interval_secs.saturating_mul(3) / 2,
        }
    }

    pub fn tick_second(&mut self) -> Option<LinkTransition> {
        self.seconds_since_success = self.seconds_since_success.saturating_add(1);

        if self.state == LinkState::Online && self.seconds_since_success > self.offline_after_secs
        {
            self.state = LinkState::Offline;
            info!(
                "link: offline after {}s without a refresh",
                self.seconds_since_success
            );
            return Some(LinkTransition::Lost);
        }

        None
    }

    pub fn mark_success(&mut self) -> Option<LinkTransition> {
        self.seconds_since_success = 0;

        if self.state == LinkState::Offline {
            self.state = LinkState::Online;
            info!("link: back online");
            return Some(LinkTransition::Restored);
        }

        None
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_online(&self) -> bool {
        self.state == LinkState::Online
    }

    pub fn seconds_since_success(&self) -> u32 {
        self.seconds_since_success
    }

    /// Whole minutes of staleness driving ETA extrapolation; zero while
    /// online.
    pub fn stale_minutes(&self) -> u32 {
        match self.state {
            LinkState::Online => 0,
            LinkState::Offline => self.seconds_since_success / 60,
        }
    }
}
