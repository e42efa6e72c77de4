use maud::{html, Markup};

use crate::mvu::calculator::CalculatorModel;
use crate::view::calculator::render_calculator_body;

/// Full calculator fragment: the layout/score controls for the selected
/// course plus the status-driven body. Any change resubmits the form
/// through htmx, carrying the course input along.
#[must_use]
pub fn render_calculator(model: &CalculatorModel) -> Markup {
    html! {
        form id="layout-picker" hx-get="/calculator" hx-target="#calculator"
            hx-trigger="change" hx-include="#course-name" {
            label for="layout-select" { "Layout Name" }
            select id="layout-select" name="layout" {
                option value="" { "Layout keywords" }
                @for (idx, option) in model.layout_options.iter().enumerate() {
                    option value=(idx) selected[model.layout_index == Some(idx)] {
                        (option.layout_name) " (" (option.num_rounds) " rounds)"
                    }
                }
            }
            label for="score-input" { "Score (relative to par)" }
            input id="score-input" name="score" type="number"
                min="-1000" max="1000" step="1" value=(model.score);
        }
        div id="calculator-body" {
            (render_calculator_body(model))
        }
    }
}
