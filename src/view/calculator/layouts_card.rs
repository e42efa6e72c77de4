use maud::{html, Markup};

use crate::model::UsedLayoutRow;
use crate::view::calculator::utils::pdga_live_link;

#[must_use]
pub fn render_used_layouts_card(rows: &[UsedLayoutRow]) -> Markup {
    html! {
        div class="card used-layouts-card" {
            h3 { "Used Layouts" }
            table class="styled-table" {
                thead {
                    tr {
                        th { "Layout" }
                        th { "Date" }
                        th { "Par" }
                        th { "Distance" }
                        th { "Event" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.layout_name) }
                            td { (row.round_date) }
                            td { (row.total_par) }
                            td { (row.total_distance) }
                            td {
                                a href=(pdga_live_link(row.event_id)) target="_blank" {
                                    (row.event_id)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
