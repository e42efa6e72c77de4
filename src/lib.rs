pub mod args;
pub mod model;
pub mod controller {
    pub mod rating;
}
pub mod mvu {
    pub mod calculator;
    pub mod error;
    pub mod runtime;
}
pub mod view {
    pub mod calculator;
    pub mod index;
}

pub(crate) const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
