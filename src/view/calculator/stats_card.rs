use maud::{html, Markup};

use crate::model::LayoutOption;

#[must_use]
pub fn render_rating_stats_card(layout: &LayoutOption, score: i32) -> Markup {
    html! {
        div class="card rating-stats-card" {
            h3 { "Rating" }
            table class="styled-table" {
                tbody {
                    tr {
                        td { "Estimated rating" }
                        td class="estimated-rating" { (layout.score_rating(score)) }
                    }
                    tr {
                        td { "Par rating" }
                        td { (layout.par_rating) }
                    }
                    tr {
                        td { "Stroke value" }
                        td { (layout.stroke_value) }
                    }
                    tr {
                        td { "Course" }
                        td { (layout.course_metadata()) }
                    }
                    tr {
                        td { "Rounds counted" }
                        td { (layout.num_rounds) }
                    }
                    tr {
                        td { "Tournaments" }
                        td { (layout.num_tournaments) }
                    }
                }
            }
        }
    }
}
