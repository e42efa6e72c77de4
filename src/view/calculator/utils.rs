#[must_use]
pub fn pdga_live_link(event_id: i64) -> String {
    format!("https://www.pdga.com/apps/tournament/live/event?eventId={event_id}")
}
