use reqwest::Client;

use crate::model::LayoutOption;
use crate::mvu::error::AppError;

/// Client for the aggregated-layout endpoint the calculator fetches from.
#[derive(Clone, Debug)]
pub struct LayoutsClient {
    base_url: String,
    client: Client,
}

impl LayoutsClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Issues one GET to `/api/rating/{course}` and parses the response
    /// array.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request or the json parse fails.
    pub async fn fetch_layout_options(
        &self,
        course: &str,
    ) -> Result<Vec<LayoutOption>, AppError> {
        let url = format!(
            "{}/api/rating/{}",
            self.base_url.trim_end_matches('/'),
            course
        );
        let resp = self.client.get(&url).send().await?;
        let options = resp.json::<Vec<LayoutOption>>().await?;
        Ok(options)
    }
}
