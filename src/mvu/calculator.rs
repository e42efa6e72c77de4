use maud::Markup;
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::{debug, warn};

use crate::controller::rating::client::LayoutsClient;
use crate::model::{LayoutOption, RatingStatus};
use crate::mvu::error::AppError;
use crate::view::calculator::render_calculator;

/// Form state of the rating calculator page.
#[derive(Debug, Clone)]
pub struct CalculatorModel {
    /// Selected course; empty means unset.
    pub course: String,
    /// Selected aggregated layout, if any.
    pub layout: Option<LayoutOption>,
    /// Index of the selected layout within `layout_options`.
    pub layout_index: Option<usize>,
    /// Score relative to par.
    pub score: i32,
    pub layout_options: Vec<LayoutOption>,
    /// Status of the last submitted layout.
    pub status: RatingStatus,
    /// Index into `layout_options`, only used for the results line.
    pub current_page: usize,
    /// Sequence number of the latest layout fetch issued. Responses
    /// carrying an older number are discarded.
    pub fetch_seq: u64,
    pub markup: Option<Markup>,
}

impl CalculatorModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            course: String::new(),
            layout: None,
            layout_index: None,
            score: 0,
            layout_options: Vec::new(),
            status: RatingStatus::None,
            current_page: 0,
            fetch_seq: 0,
            markup: None,
        }
    }
}

impl Default for CalculatorModel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    CourseChanged(String),
    LayoutsLoaded {
        seq: u64,
        course: String,
        options: Vec<LayoutOption>,
    },
    FetchFailed {
        seq: u64,
        error: AppError,
    },
    /// Layout picked by index into `layout_options`; an out-of-range index
    /// clears the selection.
    LayoutChosen(usize),
    /// Raw score input; anything non-numeric resets the score to 0.
    ScoreEntered(String),
    PageChanged(usize),
    Rendered(Markup),
}

#[derive(Debug, Clone)]
pub enum Effect {
    FetchLayouts { seq: u64, course: String },
    Render,
}

pub fn update(model: &mut CalculatorModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::CourseChanged(course) => {
            model.layout = None;
            model.layout_index = None;
            model.score = 0;
            model.status = RatingStatus::None;

            let course = course.trim().to_string();
            if course.is_empty() {
                debug!("course cleared");
                model.layout_options.clear();
                return vec![Effect::Render];
            }

            model.course = course.clone();
            model.fetch_seq += 1;
            debug!(course = %course, seq = model.fetch_seq, "course changed");
            vec![Effect::FetchLayouts {
                seq: model.fetch_seq,
                course,
            }]
        }
        Msg::LayoutsLoaded {
            seq,
            course,
            options,
        } => {
            if seq != model.fetch_seq || course != model.course {
                debug!(seq, latest = model.fetch_seq, "discarding stale layout response");
                return vec![];
            }
            debug!(course = %course, count = options.len(), "layout options loaded");
            model.layout_options = options;
            vec![Effect::Render]
        }
        Msg::FetchFailed { seq, error } => {
            // Logged and swallowed; state is left as-is.
            warn!(seq, %error, "layout fetch failed");
            vec![Effect::Render]
        }
        Msg::LayoutChosen(index) => {
            model.layout = model.layout_options.get(index).cloned();
            model.layout_index = model.layout.as_ref().map(|_| index);
            debug!(index, found = model.layout.is_some(), "layout chosen");
            submit(model);
            vec![Effect::Render]
        }
        Msg::ScoreEntered(raw) => {
            model.score = raw.trim().parse().unwrap_or(0);
            debug!(score = model.score, "score entered");
            submit(model);
            vec![Effect::Render]
        }
        Msg::PageChanged(page) => {
            model.current_page = page;
            vec![Effect::Render]
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
    }
}

/// Submission rule: no course or no layout means no status change;
/// otherwise the status is whatever the selected record reports.
fn submit(model: &mut CalculatorModel) {
    if model.course.is_empty() {
        return;
    }
    let Some(layout) = &model.layout else {
        return;
    };
    model.status = layout.rating_status();
    debug!(status = model.status.code(), "submitted");
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub client: &'a LayoutsClient,
}

pub async fn run_effect(effect: Effect, model: &CalculatorModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::FetchLayouts { seq, course } => {
            match deps.client.fetch_layout_options(&course).await {
                Ok(options) => Msg::LayoutsLoaded {
                    seq,
                    course,
                    options,
                },
                Err(e) => Msg::FetchFailed { seq, error: e },
            }
        }
        Effect::Render => Msg::Rendered(render_calculator(model)),
    }
}

/// Decodes the calculator query params into the message sequence a
/// stateless request replays: course change, then the layout/score/page
/// values carried by the form.
#[must_use]
pub fn decode_request_to_msgs<S: BuildHasher>(query: &HashMap<String, String, S>) -> Vec<Msg> {
    let course = query
        .get("course")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let mut msgs = vec![Msg::CourseChanged(course)];
    if let Some(idx) = query.get("layout").and_then(|s| s.trim().parse().ok()) {
        msgs.push(Msg::LayoutChosen(idx));
    }
    if let Some(raw) = query.get("score") {
        msgs.push(Msg::ScoreEntered(raw.clone()));
    }
    if let Some(page) = query.get("page").and_then(|s| s.trim().parse().ok()) {
        msgs.push(Msg::PageChanged(page));
    }
    msgs
}
