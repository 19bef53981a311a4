//! Board view models handed to the host renderer.

/// Color buckets a renderer may map line badges onto.
pub const LINE_COLOR_SLOTS: u8 = 10;

/// Stable `[0, LINE_COLOR_SLOTS)` bucket for a line label: byte sum folded
/// by decimal digit sums until one digit remains.
pub fn line_color_slot(line: &str) -> u8 {
    let mut value: u32 = line.bytes().map(u32::from).sum();
    while value >= u32::from(LINE_COLOR_SLOTS) {
        let mut folded = 0u32;
        let mut rest = value;
        while rest > 0 {
            folded += rest % 10;
            rest /= 10;
        }
        value = folded;
    }
    value as u8
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardRow<'a> {
    pub line: &'a str,
    pub destination: &'a str,
    pub eta_minutes: i16,
    pub color_slot: u8,
    pub highlighted: bool,
}

impl Default for BoardRow<'_> {
    fn default() -> Self {
        Self {
            line: "",
            destination: "",
            eta_minutes: 0,
            color_slot: 0,
            highlighted: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StopRow<'a> {
    pub name: &'a str,
    pub distance_m: i32,
    pub active: bool,
}

impl Default for StopRow<'_> {
    fn default() -> Self {
        Self {
            name: "",
            distance_m: 0,
            active: false,
        }
    }
}

/// 1-based page position of the board cursor.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageInfo {
    pub current: usize,
    pub total: usize,
}

/// App-level view model consumed by the host renderer.
pub enum Screen<'a> {
    Board {
        title: &'a str,
        rows: &'a [BoardRow<'a>],
        cursor_row: usize,
        page: PageInfo,
        zoomed: bool,
        online: bool,
        seconds_since_update: u32,
    },
    StopSelect {
        title: &'a str,
        rows: &'a [StopRow<'a>],
        cursor: usize,
    },
}
