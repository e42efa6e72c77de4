use serde::{Deserialize, Serialize};

/// A course as stored in the db. `course_name` is the stable key used in
/// urls; `readable_course_name` is what the picker shows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    pub readable_course_name: String,
}
