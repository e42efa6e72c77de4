use chrono::NaiveDate;

use rusty_disc::model::{
    build_rating_response, cluster_rounds, descriptive_name_from_tokens, hole_distance_columns,
    split_by_pars, tokenize_layout_names, AggregateLayout, Layout, Round,
};

fn layout(name: &str, distances: Vec<i64>) -> Layout {
    let num_holes = distances.len() as i64;
    layout_with_pars(name, vec![3; num_holes as usize], distances)
}

fn layout_with_pars(name: &str, pars: Vec<i64>, distances: Vec<i64>) -> Layout {
    Layout {
        layout_id: 0,
        layout_name: name.to_string(),
        num_holes: distances.len() as i64,
        total_par: pars.iter().sum(),
        total_distance: distances.iter().sum(),
        pars,
        distances,
    }
}

fn round(event_id: i64, date: &str, num_players: i64, par_rating: i64, stroke_value: i64, layout: Layout) -> Round {
    Round {
        round_id: 0,
        event_id,
        round_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        num_players,
        par_rating,
        stroke_value,
        layout,
    }
}

#[test]
fn clustering_splits_on_distance_gaps() {
    let rounds = vec![
        round(1, "2021-06-01", 20, 980, 11, layout("Short A", vec![200, 210, 220])),
        round(2, "2021-06-02", 20, 1020, 10, layout("Long A", vec![500, 510, 520])),
        round(3, "2022-06-01", 20, 982, 11, layout("Short B", vec![220, 230, 240])),
    ];

    let clusters = cluster_rounds(rounds, 150);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].len(), 2);
    assert_eq!(clusters[0][0].layout.layout_name, "Short A");
    assert_eq!(clusters[0][1].layout.layout_name, "Short B");
    assert_eq!(clusters[1][0].layout.layout_name, "Long A");
}

#[test]
fn clustering_keeps_chains_within_gap() {
    // 600, 1100, 1600: each neighbor within the gap, so single-linkage
    // keeps them together even though the ends are far apart.
    let rounds = vec![
        round(1, "2021-06-01", 10, 980, 11, layout("A", vec![200, 200, 200])),
        round(2, "2021-06-02", 10, 980, 11, layout("B", vec![400, 400, 300])),
        round(3, "2021-06-03", 10, 980, 11, layout("C", vec![600, 500, 500])),
    ];
    let clusters = cluster_rounds(rounds, 500);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 3);
}

#[test]
fn same_distance_different_pars_aggregate_separately() {
    // Same 900-foot footprint, but the island variant plays hole 2 as a
    // par 4. They land in one distance cluster yet must not average.
    let rounds = vec![
        round(1, "2021-06-05", 30, 980, 11, layout_with_pars(
            "White Tees 2021",
            vec![3, 3, 3],
            vec![300, 300, 300],
        )),
        round(2, "2021-06-05", 20, 995, 10, layout_with_pars(
            "White Island 2021",
            vec![3, 4, 3],
            vec![280, 310, 310],
        )),
        round(3, "2022-06-04", 28, 982, 11, layout_with_pars(
            "White Tees 2022",
            vec![3, 3, 3],
            vec![310, 300, 310],
        )),
    ];

    let options = build_rating_response("borderland", rounds, 10, 200);
    assert_eq!(options.len(), 2);

    assert_eq!(options[0].num_rounds, 58);
    assert_eq!(options[0].pars, vec![3, 3, 3]);
    assert_eq!(options[0].total_par, 9);

    assert_eq!(options[1].num_rounds, 20);
    assert_eq!(options[1].pars, vec![3, 4, 3]);
    assert_eq!(options[1].total_par, 10);
}

#[test]
fn par_groups_keep_cluster_members_together() {
    let cluster = vec![
        round(1, "2021-06-01", 10, 980, 11, layout_with_pars("A", vec![3, 3], vec![250, 250])),
        round(2, "2021-06-02", 10, 980, 11, layout_with_pars("B", vec![3, 4], vec![240, 270])),
        round(3, "2021-06-03", 10, 980, 11, layout_with_pars("C", vec![3, 3], vec![260, 260])),
    ];

    let groups = split_by_pars(cluster);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[0][0].layout.layout_name, "A");
    assert_eq!(groups[0][1].layout.layout_name, "C");
    assert_eq!(groups[1][0].layout.layout_name, "B");
}

#[test]
fn incomplete_pars_make_a_layout_unusable() {
    let mut lo = layout("Main", vec![250, 260, 270]);
    assert!(lo.has_usable_data());
    lo.pars = vec![3, 3];
    assert!(!lo.has_usable_data());

    let rounds = vec![round(1, "2021-06-01", 40, 980, 11, lo)];
    let options = build_rating_response("borderland", rounds, 10, 200);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].status, 2);
}

#[test]
fn empty_input_yields_no_clusters() {
    assert!(cluster_rounds(Vec::new(), 600).is_empty());
    assert!(AggregateLayout::new(Vec::new()).is_none());
}

#[test]
fn aggregate_averages_holes_and_ratings() {
    let rounds = vec![
        round(10, "2021-06-01", 24, 980, 11, layout("White Tees Long 2021", vec![200, 300, 400])),
        round(11, "2022-06-01", 30, 984, 12, layout("White Tees Long 2022", vec![250, 310, 410])),
    ];

    let agg = AggregateLayout::new(rounds).expect("aggregate");
    assert_eq!(agg.num_rounds, 54);
    assert_eq!(agg.num_layouts, 2);
    assert_eq!(agg.num_tournaments, 2);
    assert_eq!(agg.distances, vec![225, 305, 405]);
    assert_eq!(agg.total_distance, (900 + 970) / 2);
    assert_eq!(agg.par_rating, 982);
    assert_eq!(agg.stroke_value, 11); // 23 / 2 truncates
    assert_eq!(agg.descriptive_name, "white, tees, long");
    assert_eq!(agg.course_metadata(), "Par 9, Distance 935 feet");
}

#[test]
fn rating_is_linear_in_score() {
    let agg = AggregateLayout::new(vec![round(
        1,
        "2021-06-01",
        20,
        1000,
        10,
        layout("Main", vec![300, 300, 300]),
    )])
    .expect("aggregate");

    assert_eq!(agg.score_rating(0), 1000);
    assert_eq!(agg.score_rating(4), 960);
    assert_eq!(agg.score_rating(-3), 1030);
}

#[test]
fn distance_spread_is_population_std_dev() {
    let rounds = vec![
        round(1, "2021-06-01", 10, 980, 11, layout("A", vec![2000, 2000, 2000])),
        round(2, "2021-06-02", 10, 980, 11, layout("B", vec![2000, 2000, 2100])),
    ];
    let agg = AggregateLayout::new(rounds).expect("aggregate");
    assert_eq!(agg.distance_spread(), 50);
}

#[test]
fn tokenizing_orders_by_frequency_and_filters() {
    let names = vec![
        "White Tees Long".to_string(),
        "White Tees Long 2022".to_string(),
        "Long White (Temp)".to_string(),
    ];
    let tokens = tokenize_layout_names(&names);

    // "white" and "long" tie at three; first-seen order breaks the tie.
    assert_eq!(tokens[0], "white");
    assert_eq!(tokens[1], "long");
    assert_eq!(tokens[2], "tees");
    // "(temp)" fails the alphanumeric filter, "2022" survives it.
    assert!(tokens.contains(&"2022".to_string()));
    assert!(!tokens.iter().any(|t| t.contains('(')));
}

#[test]
fn tokenizing_keeps_accented_words() {
    let names = vec![
        "Järva Skogsbana Lång".to_string(),
        "Järva Skogsbana (Öst)".to_string(),
    ];
    let tokens = tokenize_layout_names(&names);

    assert_eq!(tokens[0], "järva");
    assert_eq!(tokens[1], "skogsbana");
    assert!(tokens.contains(&"lång".to_string()));
    assert!(!tokens.iter().any(|t| t.contains('(')));
}

#[test]
fn descriptive_name_skips_numeric_tokens() {
    let tokens = vec![
        "white".to_string(),
        "2022".to_string(),
        "tees".to_string(),
        "long".to_string(),
    ];
    assert_eq!(descriptive_name_from_tokens(&tokens), "white, tees, long");
}

#[test]
fn hole_columns_fill_left_to_right() {
    let pars = vec![3, 3, 4, 3, 3, 4, 3];
    let distances = vec![250, 260, 500, 270, 280, 510, 290];

    let columns = hole_distance_columns(&pars, &distances, 3);
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0], "H1 p3 250\nH2 p3 260\nH3 p4 500");
    assert_eq!(columns[1], "H4 p3 270\nH5 p3 280\nH6 p4 510");
    assert_eq!(columns[2], "H7 p3 290");
}
