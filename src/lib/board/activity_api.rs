use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use url::Url;

use super::{
    error::BoardError,
    helpers::{activities_url, log_all_activities, reply_text, signup_url, unregister_url},
    models::{activity_model::ActivityCollection, ApiReply, Config, ReplyBody},
};

/// A trait, necessary for every entity that will be used for talking to the activity service.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<ActivityCollection, BoardError>;
    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError>;
    /// `DELETE /activities/{activity}/participants/{identifier}`
    async fn unregister(&self, activity: &str, identifier: &str) -> Result<ApiReply, BoardError>;
}

/// Talks to the real service over HTTP.
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &Config) -> Result<Self, BoardError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, Url::parse(&config.base_url)?))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl ActivityApi for HttpApi {
    async fn list_activities(&self) -> Result<ActivityCollection, BoardError> {
        let request_url = activities_url(&self.base_url)?;
        info!("Getting activities from {}", request_url);
        let response = self.client.get(request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status(status.as_u16()));
        }
        let activities: ActivityCollection = serde_json::from_slice(&response.bytes().await?)?;
        info!("Got {} activities", activities.len());
        log_all_activities(&activities);
        Ok(activities)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError> {
        let request_url = signup_url(&self.base_url, activity, email)?;
        info!("Signing up {} for {}", email, activity);
        let response = self.client.post(request_url).send().await?;
        let status = response.status();
        // both outcomes carry a JSON body
        let body: ReplyBody = serde_json::from_slice(&response.bytes().await?)?;
        debug!("Signup answered with {}", status);
        if status.is_success() {
            Ok(ApiReply::Accepted {
                message: reply_text(body.message),
            })
        } else {
            Ok(ApiReply::Rejected {
                status: status.as_u16(),
                detail: reply_text(body.detail),
            })
        }
    }

    async fn unregister(&self, activity: &str, identifier: &str) -> Result<ApiReply, BoardError> {
        let request_url = unregister_url(&self.base_url, activity, identifier)?;
        info!("Unregistering {} from {}", identifier, activity);
        let response = self.client.delete(request_url).send().await?;
        let status = response.status();
        debug!("Unregister answered with {}", status);
        if status.is_success() {
            return Ok(ApiReply::Accepted { message: None });
        }
        let body: ReplyBody = serde_json::from_slice(&response.bytes().await?)?;
        Ok(ApiReply::Rejected {
            status: status.as_u16(),
            detail: reply_text(body.detail),
        })
    }
}
