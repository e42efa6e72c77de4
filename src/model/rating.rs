use serde::{Deserialize, Serialize};

use crate::model::layout::{cluster_rounds, split_by_pars, AggregateLayout, Round};

/// Outcome classification for a rating query. The numeric codes are the
/// wire values the api reports and the page interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStatus {
    /// Nothing submitted yet; never sent by the api.
    None,
    Success,
    /// Every aggregate fell below the minimum-rounds threshold.
    NoMatches,
    /// Rounds exist but no layout has usable hole data.
    NoLayouts,
    /// The course is unknown or has no recorded rounds.
    NoRounds,
}

impl RatingStatus {
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            0 => RatingStatus::Success,
            1 => RatingStatus::NoMatches,
            2 => RatingStatus::NoLayouts,
            3 => RatingStatus::NoRounds,
            _ => RatingStatus::None,
        }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            RatingStatus::None => -1,
            RatingStatus::Success => 0,
            RatingStatus::NoMatches => 1,
            RatingStatus::NoLayouts => 2,
            RatingStatus::NoRounds => 3,
        }
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            RatingStatus::NoMatches | RatingStatus::NoLayouts | RatingStatus::NoRounds
        )
    }
}

impl From<i32> for RatingStatus {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

/// One underlying layout row of an aggregate, as shown in the used-layouts
/// card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UsedLayoutRow {
    pub layout_name: String,
    pub event_id: i64,
    pub round_date: String,
    pub total_par: i64,
    pub total_distance: i64,
}

/// One element of the `/api/rating/{course}` response array. Failure
/// responses are a single record carrying the status and empty data, so
/// the page's "status comes from the selected record" rule surfaces them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutOption {
    pub layout_name: String,
    pub status: i32,
    pub num_rounds: i64,
    pub num_layouts: i64,
    pub num_tournaments: i64,
    pub num_holes: i64,
    pub pars: Vec<i64>,
    pub distances: Vec<i64>,
    pub total_par: i64,
    pub total_distance: i64,
    pub par_rating: i64,
    pub stroke_value: i64,
    pub event_ids: Vec<i64>,
    pub layouts: Vec<UsedLayoutRow>,
    pub layout_hole_distances: Vec<String>,
}

impl LayoutOption {
    #[must_use]
    pub fn failure(course_name: &str, status: RatingStatus) -> Self {
        Self {
            layout_name: course_name.to_string(),
            status: status.code(),
            num_rounds: 0,
            num_layouts: 0,
            num_tournaments: 0,
            num_holes: 0,
            pars: Vec::new(),
            distances: Vec::new(),
            total_par: 0,
            total_distance: 0,
            par_rating: 0,
            stroke_value: 0,
            event_ids: Vec::new(),
            layouts: Vec::new(),
            layout_hole_distances: Vec::new(),
        }
    }

    #[must_use]
    pub fn rating_status(&self) -> RatingStatus {
        RatingStatus::from_i32(self.status)
    }

    /// Predicted round rating for a score relative to par.
    #[must_use]
    pub fn score_rating(&self, score: i32) -> i64 {
        self.par_rating - i64::from(score) * self.stroke_value
    }

    #[must_use]
    pub fn course_metadata(&self) -> String {
        format!("Par {}, Distance {} feet", self.total_par, self.total_distance)
    }
}

impl From<&AggregateLayout> for LayoutOption {
    fn from(agg: &AggregateLayout) -> Self {
        let layouts = agg
            .rounds
            .iter()
            .map(|r| UsedLayoutRow {
                layout_name: r.layout.layout_name.clone(),
                event_id: r.event_id,
                round_date: r.round_date.format("%Y-%m-%d").to_string(),
                total_par: r.layout.total_par,
                total_distance: r.layout.total_distance,
            })
            .collect();

        Self {
            layout_name: agg.descriptive_name.clone(),
            status: RatingStatus::Success.code(),
            num_rounds: agg.num_rounds,
            num_layouts: agg.num_layouts,
            num_tournaments: agg.num_tournaments,
            num_holes: agg.num_holes,
            pars: agg.pars.clone(),
            distances: agg.distances.clone(),
            total_par: agg.total_par,
            total_distance: agg.total_distance,
            par_rating: agg.par_rating,
            stroke_value: agg.stroke_value,
            event_ids: agg.event_ids(),
            layouts,
            layout_hole_distances: agg.hole_distances(3),
        }
    }
}

/// Builds the rating response for one course: cluster the recorded rounds
/// by layout distance, subdivide each cluster by per-hole pars, aggregate
/// each group, and keep the aggregates with at least `min_rounds` rated
/// player-rounds, most-played first.
#[must_use]
pub fn build_rating_response(
    course_name: &str,
    rounds: Vec<Round>,
    min_rounds: i64,
    cluster_gap: i64,
) -> Vec<LayoutOption> {
    if rounds.is_empty() {
        return vec![LayoutOption::failure(course_name, RatingStatus::NoRounds)];
    }

    let usable: Vec<Round> = rounds
        .into_iter()
        .filter(|r| r.layout.has_usable_data())
        .collect();
    if usable.is_empty() {
        return vec![LayoutOption::failure(course_name, RatingStatus::NoLayouts)];
    }

    let mut options: Vec<LayoutOption> = cluster_rounds(usable, cluster_gap)
        .into_iter()
        .flat_map(split_by_pars)
        .filter_map(AggregateLayout::new)
        .filter(|agg| agg.num_rounds >= min_rounds)
        .map(|agg| LayoutOption::from(&agg))
        .collect();

    if options.is_empty() {
        return vec![LayoutOption::failure(course_name, RatingStatus::NoMatches)];
    }

    options.sort_by(|a, b| {
        b.num_rounds
            .cmp(&a.num_rounds)
            .then_with(|| a.layout_name.cmp(&b.layout_name))
    });
    options
}
