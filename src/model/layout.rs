use ahash::AHashMap;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layout {
    pub layout_id: i64,
    pub layout_name: String,
    pub num_holes: i64,
    pub pars: Vec<i64>,
    pub distances: Vec<i64>,
    pub total_par: i64,
    pub total_distance: i64,
}

impl Layout {
    /// A layout is usable for aggregation when both its per-hole distance
    /// and par data are complete.
    #[must_use]
    pub fn has_usable_data(&self) -> bool {
        self.total_distance > 0
            && self.distances.len() == self.num_holes as usize
            && self.pars.len() == self.num_holes as usize
    }
}

/// One rated tournament round played on a layout. `num_players` is the
/// count of rated player-rounds behind the par rating.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub round_id: i64,
    pub event_id: i64,
    pub round_date: NaiveDate,
    pub num_players: i64,
    pub par_rating: i64,
    pub stroke_value: i64,
    pub layout: Layout,
}

/// An aggregate over the rounds of one distance cluster: averaged hole
/// distances and ratings, plus a descriptive name built from the most
/// frequent tokens of the underlying layout names.
#[derive(Clone, Debug)]
pub struct AggregateLayout {
    pub rounds: Vec<Round>,
    pub num_rounds: i64,
    pub num_layouts: i64,
    pub num_tournaments: i64,
    pub num_holes: i64,
    pub distances: Vec<i64>,
    pub total_distance: i64,
    pub pars: Vec<i64>,
    pub total_par: i64,
    pub layout_names: Vec<String>,
    pub layout_tokens: Vec<String>,
    pub descriptive_name: String,
    pub par_rating: i64,
    pub stroke_value: i64,
}

fn alnum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+$").unwrap())
}

fn mean(values: impl Iterator<Item = i64>) -> i64 {
    let (sum, count) = values.fold((0i64, 0i64), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0 } else { sum / count }
}

impl AggregateLayout {
    /// Builds the aggregate for a non-empty cluster of rounds. Returns
    /// `None` for an empty slice.
    #[must_use]
    pub fn new(rounds: Vec<Round>) -> Option<Self> {
        let first = rounds.first()?;
        let num_holes = first.layout.num_holes;
        let pars = first.layout.pars.clone();
        let total_par = first.layout.total_par;

        let num_layouts = rounds.len() as i64;
        let num_rounds: i64 = rounds.iter().map(|r| r.num_players).sum();

        let mut event_ids: Vec<i64> = rounds.iter().map(|r| r.event_id).collect();
        event_ids.sort_unstable();
        event_ids.dedup();
        let num_tournaments = event_ids.len() as i64;

        let distances = averaged_distances(&rounds, num_holes);
        let total_distance = mean(rounds.iter().map(|r| r.layout.total_distance));
        let par_rating = mean(rounds.iter().map(|r| r.par_rating));
        let stroke_value = mean(rounds.iter().map(|r| r.stroke_value));

        let layout_names: Vec<String> =
            rounds.iter().map(|r| r.layout.layout_name.clone()).collect();
        let layout_tokens = tokenize_layout_names(&layout_names);
        let descriptive_name = descriptive_name_from_tokens(&layout_tokens);

        Some(Self {
            rounds,
            num_rounds,
            num_layouts,
            num_tournaments,
            num_holes,
            distances,
            total_distance,
            pars,
            total_par,
            layout_names,
            layout_tokens,
            descriptive_name,
            par_rating,
            stroke_value,
        })
    }

    /// Distinct tournament ids, ascending.
    #[must_use]
    pub fn event_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.rounds.iter().map(|r| r.event_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Predicted round rating for a score relative to par.
    #[must_use]
    pub fn score_rating(&self, score: i32) -> i64 {
        self.par_rating - i64::from(score) * self.stroke_value
    }

    /// Spread (population std dev) of the underlying layout distances.
    #[must_use]
    pub fn distance_spread(&self) -> i64 {
        let n = self.rounds.len() as i64;
        if n == 0 {
            return 0;
        }
        let m = mean(self.rounds.iter().map(|r| r.layout.total_distance));
        let var: i64 = self
            .rounds
            .iter()
            .map(|r| {
                let d = r.layout.total_distance - m;
                d * d
            })
            .sum::<i64>()
            / n;
        (var as f64).sqrt() as i64
    }

    #[must_use]
    pub fn course_metadata(&self) -> String {
        format!("Par {}, Distance {} feet", self.total_par, self.total_distance)
    }

    /// Per-hole distances preformatted into `columns` newline-joined
    /// blocks of `H{n} p{par} {dist}` lines.
    #[must_use]
    pub fn hole_distances(&self, columns: usize) -> Vec<String> {
        hole_distance_columns(&self.pars, &self.distances, columns)
    }
}

/// Per-hole mean distance across the cluster's layouts. Holes a layout is
/// missing data for are left out of that hole's mean.
fn averaged_distances(rounds: &[Round], num_holes: i64) -> Vec<i64> {
    let mut out = Vec::with_capacity(num_holes as usize);
    for hole in 0..num_holes as usize {
        out.push(mean(
            rounds
                .iter()
                .filter_map(|r| r.layout.distances.get(hole).copied()),
        ));
    }
    out
}

/// Lowercased whitespace tokens of the layout names, most frequent first,
/// keeping only alphanumeric tokens longer than two characters.
#[must_use]
pub fn tokenize_layout_names(layout_names: &[String]) -> Vec<String> {
    let mut frequencies: AHashMap<String, usize> = AHashMap::new();
    let mut order: Vec<String> = Vec::new();
    for name in layout_names {
        for token in name.to_lowercase().split_whitespace() {
            if !frequencies.contains_key(token) {
                order.push(token.to_string());
            }
            *frequencies.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    let mut tokens: Vec<(usize, usize, String)> = order
        .into_iter()
        .enumerate()
        .map(|(first_seen, token)| (frequencies[&token], first_seen, token))
        .collect();
    tokens.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    tokens
        .into_iter()
        .map(|(_, _, token)| token)
        .filter(|t| t.chars().count() > 2 && alnum_re().is_match(t))
        .collect()
}

/// Top five non-numeric tokens joined into a display name.
#[must_use]
pub fn descriptive_name_from_tokens(tokens: &[String]) -> String {
    tokens
        .iter()
        .filter(|t| t.chars().count() > 2 && !t.chars().all(char::is_numeric))
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn hole_distance_columns(pars: &[i64], distances: &[i64], columns: usize) -> Vec<String> {
    if columns == 0 || distances.is_empty() {
        return Vec::new();
    }
    let mut holes_per_column = distances.len() / columns;
    if distances.len() % columns != 0 {
        holes_per_column += 1;
    }
    let mut out = Vec::with_capacity(columns);
    for c in 0..columns {
        let start = c * holes_per_column;
        let end = ((c + 1) * holes_per_column).min(distances.len());
        if start >= end {
            break;
        }
        let lines: Vec<String> = (start..end)
            .map(|i| {
                let par = pars.get(i).copied().unwrap_or(0);
                format!("H{} p{} {}", i + 1, par, distances[i])
            })
            .collect();
        out.push(lines.join("\n"));
    }
    out
}

/// Groups rounds whose layout total distances sit within `max_gap` feet of
/// a neighbor, single-linkage style: sort by distance and split wherever
/// the gap to the next round exceeds `max_gap`.
#[must_use]
pub fn cluster_rounds(mut rounds: Vec<Round>, max_gap: i64) -> Vec<Vec<Round>> {
    if rounds.is_empty() {
        return Vec::new();
    }
    rounds.sort_by_key(|r| r.layout.total_distance);

    let mut clusters: Vec<Vec<Round>> = Vec::new();
    let mut current: Vec<Round> = Vec::new();
    let mut last_distance: Option<i64> = None;
    for round in rounds {
        let distance = round.layout.total_distance;
        if let Some(prev) = last_distance {
            if distance - prev > max_gap {
                clusters.push(std::mem::take(&mut current));
            }
        }
        last_distance = Some(distance);
        current.push(round);
    }
    clusters.push(current);
    clusters
}

/// Splits one distance cluster into groups sharing the same per-hole
/// pars. Layouts at the same length but a different par never average
/// together.
#[must_use]
pub fn split_by_pars(mut cluster: Vec<Round>) -> Vec<Vec<Round>> {
    cluster.sort_by(|a, b| a.layout.pars.cmp(&b.layout.pars));

    let mut groups: Vec<Vec<Round>> = Vec::new();
    for round in cluster {
        if let Some(group) = groups.last_mut() {
            if group[0].layout.pars == round.layout.pars {
                group.push(round);
                continue;
            }
        }
        groups.push(vec![round]);
    }
    groups
}
