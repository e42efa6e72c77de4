use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Deserialize;

use crate::model::course::Course;
use crate::model::layout::{Layout, Round};
use crate::mvu::error::AppError;

/// Thin wrapper over a sqlite connection. Connections are opened per
/// request, matching how the original service handled them.
pub struct Db {
    conn: Connection,
}

/// Startup-seeding payload: courses with their layouts and rounds. Rounds
/// reference layouts by index within the same course.
#[derive(Deserialize, Debug)]
pub struct SeedFile {
    pub courses: Vec<SeedCourse>,
}

#[derive(Deserialize, Debug)]
pub struct SeedCourse {
    pub course_name: String,
    pub readable_course_name: String,
    #[serde(default)]
    pub layouts: Vec<SeedLayout>,
    #[serde(default)]
    pub rounds: Vec<SeedRound>,
}

#[derive(Deserialize, Debug)]
pub struct SeedLayout {
    pub layout_name: String,
    pub num_holes: i64,
    pub pars: Vec<i64>,
    #[serde(default)]
    pub distances: Vec<i64>,
    pub total_par: i64,
    #[serde(default)]
    pub total_distance: i64,
}

#[derive(Deserialize, Debug)]
pub struct SeedRound {
    pub layout: usize,
    pub event_id: i64,
    pub round_date: String,
    pub num_players: i64,
    pub par_rating: i64,
    pub stroke_value: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub courses: usize,
    pub layouts: usize,
    pub rounds: usize,
}

const ROUNDS_QUERY: &str = "SELECT r.round_id, r.event_id, r.round_date, r.num_players, \
     r.par_rating, r.stroke_value, l.layout_id, l.layout_name, l.num_holes, \
     l.pars, l.distances, l.total_par, l.total_distance \
     FROM rounds r \
     JOIN layouts l ON l.layout_id = r.layout_id \
     JOIN courses c ON c.course_id = r.course_id \
     WHERE c.course_name = ?1 OR c.readable_course_name = ?1 \
     ORDER BY r.round_date, r.round_id";

struct RoundRow {
    round_id: i64,
    event_id: i64,
    round_date: String,
    num_players: i64,
    par_rating: i64,
    stroke_value: i64,
    layout_id: i64,
    layout_name: String,
    num_holes: i64,
    pars: String,
    distances: Option<String>,
    total_par: i64,
    total_distance: i64,
}

impl Db {
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database cannot be opened.
    pub fn open(path: &str) -> Result<Self, AppError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// # Errors
    ///
    /// Returns `AppError::Db` if any ddl statement fails.
    pub fn create_schema(&self) -> Result<(), AppError> {
        let ddl = [
            include_str!("../sql/schema/sqlite/00_courses.sql"),
            include_str!("../sql/schema/sqlite/01_layouts.sql"),
            include_str!("../sql/schema/sqlite/02_rounds.sql"),
        ]
        .join("\n");
        self.conn.execute_batch(&ddl)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub fn query_courses(&self) -> Result<Vec<Course>, AppError> {
        let mut stmt = self.conn.prepare(
            "SELECT course_id, course_name, readable_course_name \
             FROM courses ORDER BY readable_course_name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Course {
                course_id: row.get(0)?,
                course_name: row.get(1)?,
                readable_course_name: row.get(2)?,
            })
        })?;
        let mut courses = Vec::new();
        for course in rows {
            courses.push(course?);
        }
        Ok(courses)
    }

    /// Recorded rounds for a course, matched by either name form, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` on query failure and `AppError::Parse` when
    /// a stored date or par/distance list does not parse.
    pub fn query_rounds(&self, course_name: &str) -> Result<Vec<Round>, AppError> {
        let mut stmt = self.conn.prepare(ROUNDS_QUERY)?;
        let raw = stmt.query_map([course_name], |row| {
            Ok(RoundRow {
                round_id: row.get(0)?,
                event_id: row.get(1)?,
                round_date: row.get(2)?,
                num_players: row.get(3)?,
                par_rating: row.get(4)?,
                stroke_value: row.get(5)?,
                layout_id: row.get(6)?,
                layout_name: row.get(7)?,
                num_holes: row.get(8)?,
                pars: row.get(9)?,
                distances: row.get(10)?,
                total_par: row.get(11)?,
                total_distance: row.get(12)?,
            })
        })?;

        let mut rounds = Vec::new();
        for row in raw {
            let row = row?;
            rounds.push(Round {
                round_id: row.round_id,
                event_id: row.event_id,
                round_date: NaiveDate::parse_from_str(&row.round_date, "%Y-%m-%d")?,
                num_players: row.num_players,
                par_rating: row.par_rating,
                stroke_value: row.stroke_value,
                layout: Layout {
                    layout_id: row.layout_id,
                    layout_name: row.layout_name,
                    num_holes: row.num_holes,
                    pars: parse_int_list(&row.pars)?,
                    distances: match row.distances.as_deref() {
                        Some(s) => parse_int_list(s)?,
                        None => Vec::new(),
                    },
                    total_par: row.total_par,
                    total_distance: row.total_distance,
                },
            });
        }
        Ok(rounds)
    }

    /// Populates the database from a seed payload inside one transaction.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Parse` for malformed json or out-of-range layout
    /// references, `AppError::Db` on insert failure.
    pub fn seed_from_json(&mut self, json: &serde_json::Value) -> Result<SeedCounts, AppError> {
        let seed: SeedFile = serde_json::from_value(json.clone())?;
        let mut counts = SeedCounts::default();

        let tx = self.conn.transaction()?;
        for course in &seed.courses {
            tx.execute(
                "INSERT INTO courses (course_name, readable_course_name) VALUES (?1, ?2)",
                (&course.course_name, &course.readable_course_name),
            )?;
            let course_id = tx.last_insert_rowid();
            counts.courses += 1;

            let mut layout_ids = Vec::with_capacity(course.layouts.len());
            for layout in &course.layouts {
                tx.execute(
                    "INSERT INTO layouts (course_id, layout_name, num_holes, pars, \
                     distances, total_par, total_distance) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    (
                        course_id,
                        &layout.layout_name,
                        layout.num_holes,
                        join_int_list(&layout.pars),
                        if layout.distances.is_empty() {
                            None
                        } else {
                            Some(join_int_list(&layout.distances))
                        },
                        layout.total_par,
                        layout.total_distance,
                    ),
                )?;
                layout_ids.push(tx.last_insert_rowid());
                counts.layouts += 1;
            }

            for round in &course.rounds {
                let layout_id = layout_ids.get(round.layout).copied().ok_or_else(|| {
                    AppError::Parse(format!(
                        "round references layout {} but course {} has {} layouts",
                        round.layout,
                        course.course_name,
                        layout_ids.len()
                    ))
                })?;
                tx.execute(
                    "INSERT INTO rounds (course_id, layout_id, event_id, round_date, \
                     num_players, par_rating, stroke_value) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    (
                        course_id,
                        layout_id,
                        round.event_id,
                        &round.round_date,
                        round.num_players,
                        round.par_rating,
                        round.stroke_value,
                    ),
                )?;
                counts.rounds += 1;
            }
        }
        tx.commit()?;
        Ok(counts)
    }
}

fn parse_int_list(s: &str) -> Result<Vec<i64>, AppError> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<i64>().map_err(AppError::from))
        .collect()
}

fn join_int_list(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
