//! Table rendering for sound events and notifies

use prettytable::{Cell, Row, Table};
use ue_anim_notify::{AnimNotifyEvent, AnimSequenceInfo, CSV_HEADERS, SoundEventRow};

/// Create a table with bold headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        headers.iter().map(|h| Cell::new(h).style_spec("b")).collect(),
    ));
    table
}

/// One line per extracted sound event, in CSV column order
pub fn sound_events_table(rows: &[SoundEventRow]) -> Table {
    let mut table = create_table(&CSV_HEADERS);
    for row in rows {
        table.add_row(Row::new(vec![
            Cell::new(&row.time_sec.to_string()),
            Cell::new(&row.frame.to_string()).style_spec("r"),
            Cell::new(&row.sound),
        ]));
    }
    table
}

/// Every notify of a sequence with its computed frame
///
/// Notifies whose time is not a number show `-` for time and frame.
pub fn notifies_table(notifies: &[AnimNotifyEvent], info: &AnimSequenceInfo) -> Table {
    let mut table = create_table(&["#", "NotifyName", "Time (sec)", "Frame", "Notify"]);
    for (i, notify) in notifies.iter().enumerate() {
        let (time, frame) = match notify.effective_time() {
            Ok(time) => (time.to_string(), info.frame_at(time.as_f64()).to_string()),
            Err(_) => ("-".to_string(), "-".to_string()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&i.to_string()).style_spec("r"),
            Cell::new(notify.notify_name.as_deref().unwrap_or("-")),
            Cell::new(&time),
            Cell::new(&frame).style_spec("r"),
            Cell::new(notify.notify_object_name()),
        ]));
    }
    table
}
