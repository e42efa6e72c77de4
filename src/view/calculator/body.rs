use maud::{html, Markup};

use crate::model::RatingStatus;
use crate::mvu::calculator::CalculatorModel;
use crate::view::calculator::{
    render_hole_distances_card, render_rating_stats_card, render_used_layouts_card,
};

/// Status-driven body of the calculator. The three failure codes each get
/// their own wording, always interpolating the numeric code.
#[must_use]
pub fn render_calculator_body(model: &CalculatorModel) -> Markup {
    match model.status {
        RatingStatus::None => html! {
            p class="placeholder" {
                "No results to display. Please enter your search criteria."
            }
        },
        RatingStatus::Success => match &model.layout {
            Some(layout) => html! {
                p class="results-count" {
                    "Returned " (model.layout_options.len()) " results. Displaying result "
                    (model.current_page + 1) " of " (model.layout_options.len()) "."
                }
                div class="card-grid" {
                    (render_rating_stats_card(layout, model.score))
                    (render_used_layouts_card(&layout.layouts))
                    (render_hole_distances_card(&layout.layout_hole_distances))
                }
            },
            None => html! {
                p class="placeholder" {
                    "No results to display. Please enter your search criteria."
                }
            },
        },
        RatingStatus::NoMatches => failure_message(
            RatingStatus::NoMatches,
            "No layouts with enough recorded rounds matched this course.",
        ),
        RatingStatus::NoLayouts => failure_message(
            RatingStatus::NoLayouts,
            "No usable layout data is recorded for this course.",
        ),
        RatingStatus::NoRounds => failure_message(
            RatingStatus::NoRounds,
            "No rated rounds are recorded for this course.",
        ),
    }
}

fn failure_message(status: RatingStatus, detail: &str) -> Markup {
    html! {
        p class="failure" {
            "Failed: " (status.code()) ". " (detail)
        }
    }
}
