//! Stop directory decoded from the stop-list payload.

use heapless::{String, Vec};
use log::debug;

use crate::wire::WireReader;

pub const NUM_STOPS: usize = 10;
pub const STOP_NAME_BYTES: usize = 31;

/// Configured id meaning "use whatever stop the feed ranks closest".
pub const AUTO_STOP_ID: i32 = -1;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BusStop {
    pub name: String<STOP_NAME_BYTES>,
    pub distance_m: i32,
    pub id: i32,
    pub auto_detected: bool,
}

/// Nearby stops plus the derived active entry that titles the board.
pub struct StopDirectory {
    stops: Vec<BusStop, NUM_STOPS>,
    configured_id: i32,
    active_index: Option<usize>,
}

impl StopDirectory {
    pub const fn new(configured_id: i32) -> Self {
        Self {
            stops: Vec::new(),
            configured_id,
            active_index: None,
        }
    }

    /// Decodes repeating `name;distance;id;` triples, replacing all
    /// previous entries, then re-derives the active stop.
    pub fn decode(&mut self, payload: &str) {
        self.stops.clear();

        let mut reader = WireReader::new(payload);
        while !reader.at_end() && !self.stops.is_full() {
            let mut stop = BusStop::default();
            reader.read_into(&mut stop.name);
            stop.distance_m = reader.read_int();
            stop.id = reader.read_int();
            let _ = self.stops.push(stop);
        }

        self.refresh_active();
        debug!(
            "stops: decoded count={} configured_id={} active={:?}",
            self.stops.len(),
            self.configured_id,
            self.active_index
        );
    }

    pub fn set_configured_id(&mut self, id: i32) {
        self.configured_id = id;
        self.refresh_active();
    }

    pub fn configured_id(&self) -> i32 {
        self.configured_id
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stop_at(&self, index: usize) -> Option<&BusStop> {
        self.stops.get(index)
    }

    pub fn stops(&self) -> &[BusStop] {
        &self.stops
    }

    pub fn active(&self) -> Option<&BusStop> {
        self.active_index.and_then(|index| self.stops.get(index))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Name shown above the board; `None` until a usable stop is known.
    pub fn title(&self) -> Option<&str> {
        self.active().map(|stop| stop.name.as_str())
    }

    /// Walk distance to the active stop, if one is known.
    pub fn active_distance_m(&self) -> Option<i32> {
        self.active().map(|stop| stop.distance_m)
    }

    fn refresh_active(&mut self) {
        for stop in self.stops.iter_mut() {
            stop.auto_detected = false;
        }

        self.active_index = if self.configured_id == AUTO_STOP_ID {
            match self.stops.first_mut() {
                Some(first) => {
                    first.auto_detected = true;
                    Some(0)
                }
                None => None,
            }
        } else {
            self.stops
                .iter()
                .position(|stop| stop.id == self.configured_id)
        };
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use super::*;

    const TWO_STOPS: &str = "Central Station;120;4711;Market St;310;4712;";

    #[test]
    fn decodes_stop_triples() {
        let mut directory = StopDirectory::new(AUTO_STOP_ID);
        directory.decode(TWO_STOPS);

        assert_eq!(directory.len(), 2);
        let second = directory.stop_at(1).unwrap();
        assert_eq!(second.name.as_str(), "Market St");
        assert_eq!(second.distance_m, 310);
        assert_eq!(second.id, 4712);
    }

    #[test]
    fn auto_id_flags_first_stop() {
        let mut directory = StopDirectory::new(AUTO_STOP_ID);
        directory.decode(TWO_STOPS);

        assert_eq!(directory.active_index(), Some(0));
        assert!(directory.active().unwrap().auto_detected);
        assert_eq!(directory.title(), Some("Central Station"));
        assert_eq!(directory.active_distance_m(), Some(120));
    }

    #[test]
    fn configured_id_selects_matching_stop() {
        let mut directory = StopDirectory::new(4712);
        directory.decode(TWO_STOPS);

        assert_eq!(directory.active_index(), Some(1));
        assert!(!directory.active().unwrap().auto_detected);
        assert_eq!(directory.title(), Some("Market St"));
    }

    #[test]
    fn unknown_configured_id_leaves_no_active_stop() {
        let mut directory = StopDirectory::new(9999);
        directory.decode(TWO_STOPS);

        assert_eq!(directory.active_index(), None);
        assert_eq!(directory.title(), None);
        assert_eq!(directory.active_distance_m(), None);
    }

    #[test]
    fn reselect_switches_active_stop() {
        let mut directory = StopDirectory::new(AUTO_STOP_ID);
        directory.decode(TWO_STOPS);

        directory.set_configured_id(4712);
        assert_eq!(directory.title(), Some("Market St"));
        assert!(!directory.stop_at(0).unwrap().auto_detected);
    }

    #[test]
    fn capacity_overflow_keeps_first_entries() {
        let mut payload: heapless::String<512> = heapless::String::new();
        for idx in 0..12 {
            let _ = write!(payload, "Stop {};{};{};", idx, idx * 100, 1000 + idx);
        }

        let mut directory = StopDirectory::new(AUTO_STOP_ID);
        directory.decode(&payload);

        assert_eq!(directory.len(), NUM_STOPS);
        assert_eq!(directory.stop_at(9).unwrap().id, 1009);
        assert!(directory.stop_at(10).is_none());
    }

    #[test]
    fn decode_replaces_previous_entries() {
        let mut directory = StopDirectory::new(AUTO_STOP_ID);
        directory.decode(TWO_STOPS);
        directory.decode("Harbor Gate;520;4713;");

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.title(), Some("Harbor Gate"));
    }
}
