use maud::{html, Markup};

/// Page shell: course picker plus the calculator target div. The course
/// input drives `GET /calculator` through htmx; the option list is a
/// datalist so the browser provides the autocomplete.
pub fn render_index_template(course_names: &[String]) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { "Rating Calculator" }
            script src=(crate::HTMX_PATH) {}
        }
        body {
            h1 { "Rating Calculator" }
            form id="course-picker" hx-get="/calculator" hx-target="#calculator"
                hx-trigger="change from:#course-name" {
                label for="course-name" { "Course Name" }
                input id="course-name" name="course" list="course-options"
                    placeholder="Course name" autocomplete="off";
                datalist id="course-options" {
                    @for name in course_names {
                        option value=(name) {}
                    }
                }
            }
            div id="calculator" {
                p class="placeholder" {
                    "No results to display. Please enter your search criteria."
                }
            }
        }
    }
}
