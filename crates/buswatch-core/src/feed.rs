//! Fixed-capacity arrival table decoded from the feed payload.

use heapless::String;
use log::debug;

use crate::wire::WireReader;

pub const NUM_BUSES: usize = 21;
pub const LINE_BYTES: usize = 5;
pub const DEST_BYTES: usize = 31;

/// One decoded arrival row. Rewritten wholesale on every refresh.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BusArrival {
    pub line: String<LINE_BYTES>,
    pub destination: String<DEST_BYTES>,
    pub eta_minutes: i16,
}

impl BusArrival {
    const EMPTY: Self = Self {
        line: String::new(),
        destination: String::new(),
        eta_minutes: 0,
    };
}

/// Arrival table with an authoritative transmitted count.
///
/// The feed may report more rows than fit; slots at and beyond
/// `row_count()` are empty no matter what the buffer holds.
pub struct FeedSnapshot {
    entries: [BusArrival; NUM_BUSES],
    transmitted_count: usize,
}

impl FeedSnapshot {
    pub const fn new() -> Self {
        Self {
            entries: [BusArrival::EMPTY; NUM_BUSES],
            transmitted_count: 0,
        }
    }

    /// Decodes a `count;` plus `line;destination;eta;` payload, replacing
    /// all previous rows.
    pub fn decode(&mut self, payload: &str) {
        self.clear();

        let mut reader = WireReader::new(payload);
        self.transmitted_count = reader.read_int().max(0) as usize;

        let mut parsed = 0usize;
        for entry in self.entries.iter_mut() {
            if reader.at_end() {
                break;
            }
            reader.read_into(&mut entry.line);
            reader.read_into(&mut entry.destination);
            entry.eta_minutes = clamp_eta(reader.read_int());
            parsed += 1;
        }

        debug!(
            "feed: decoded transmitted={} parsed={} rows={}",
            self.transmitted_count,
            parsed,
            self.row_count()
        );
    }

    pub fn clear(&mut self) {
        self.entries = [BusArrival::EMPTY; NUM_BUSES];
        self.transmitted_count = 0;
    }

    /// Rows that are logically present: the transmitted count capped at
    /// capacity.
    pub fn row_count(&self) -> usize {
        self.transmitted_count.min(NUM_BUSES)
    }

    pub fn transmitted_count(&self) -> usize {
        self.transmitted_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn row(&self, index: usize) -> Option<&BusArrival> {
        if index < self.row_count() {
            self.entries.get(index)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &BusArrival> {
        self.entries.iter().take(self.row_count())
    }
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_eta(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
