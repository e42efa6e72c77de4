use maud::{html, Markup};

#[must_use]
pub fn render_hole_distances_card(columns: &[String]) -> Markup {
    html! {
        div class="card hole-distances-card" {
            h3 { "Hole Distances" }
            table class="styled-table hole-columns" {
                tbody {
                    tr {
                        @for column in columns {
                            td class="hole-column" { (column) }
                        }
                    }
                }
            }
        }
    }
}
