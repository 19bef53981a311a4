//! Plain-text frames standing in for the watch display.

use buswatch_core::render::{BoardRow, Screen};

pub(super) fn draw(screen: &Screen<'_>, second: u32) {
    match screen {
        Screen::Board {
            title,
            rows,
            cursor_row,
            page,
            zoomed,
            online,
            seconds_since_update,
        } => {
            if *zoomed {
                if let Some(row) = rows.get(*cursor_row) {
                    draw_zoomed(title, row, second);
                    return;
                }
            }

            println!(
                "---- t={:03}s  {}  [page {}/{}] ----",
                second, title, page.current, page.total
            );
            if rows.is_empty() {
                println!("   (no arrivals yet)");
            }
            for (index, row) in rows.iter().enumerate() {
                let marker = if index == *cursor_row { '>' } else { ' ' };
                let alert = if row.highlighted { " !" } else { "" };
                println!(
                    " {} {:<5} {:<24} {:>3}m{}",
                    marker, row.line, row.destination, row.eta_minutes, alert
                );
            }
            if *online {
                println!(" link: online, updated {}s ago", seconds_since_update);
            } else {
                println!(
                    " link: OFFLINE, last update {}m ago, times are estimates",
                    seconds_since_update / 60
                );
            }
            println!();
        }
        Screen::StopSelect {
            title,
            rows,
            cursor,
        } => {
            println!("---- t={:03}s  select stop (active: {}) ----", second, title);
            for (index, row) in rows.iter().enumerate() {
                let marker = if index == *cursor { '>' } else { ' ' };
                let active = if row.active { " *" } else { "" };
                println!(" {} {:<24} {:>4}m{}", marker, row.name, row.distance_m, active);
            }
            println!();
        }
    }
}

fn draw_zoomed(title: &str, row: &BoardRow<'_>, second: u32) {
    println!("---- t={:03}s  {}  [zoom] ----", second, title);
    println!("   line {}  (color slot {})", row.line, row.color_slot);
    println!("   {}", row.destination);
    println!("   arrives in {} min", row.eta_minutes);
    println!();
}
