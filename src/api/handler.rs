//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Request logging and route resolution
//! - The user id check guarding `/api/v1` routes
//! - Body extraction, before handing the submission to the `dialog` module

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::router::{self, Endpoint, Resolution, RouteState};
use super::{auth, dialog, helpers, parsing};
use crate::core::config::AppConfig;
use crate::mattermost::{ContentApi, MattermostClient};

pub use self::function_handler as handler;

/// Text returned by `GET /`.
#[must_use]
pub fn banner() -> String {
    format!("Installed SharePost v{}", env!("CARGO_PKG_VERSION"))
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error itself; configuration problems become a 500 response so
/// the gateway always receives a well-formed reply.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::err_response(500, "configuration error"));
        }
    };

    let api = MattermostClient::from_config(&config);
    Ok(route_request(&config, &api, &event.payload).await)
}

/// Routes one proxy event and returns the proxy response.
pub async fn route_request(config: &AppConfig, api: &dyn ContentApi, payload: &Value) -> Value {
    let headers = payload.get("headers").unwrap_or(&Value::Null);
    let method = parsing::request_method(payload);
    let path = parsing::request_path(payload);

    debug!(
        host = parsing::get_header_value(headers, "Host").unwrap_or(""),
        request_uri = %parsing::request_uri(payload),
        method = %method,
        "New request"
    );

    let route = match router::resolve(method, path) {
        Resolution::Matched(route) => route,
        Resolution::MethodNotAllowed => {
            return helpers::err_response(405, "method not allowed");
        }
        Resolution::NotFound => return helpers::err_response(404, "not found"),
    };

    match route.state {
        RouteState::NotYetEnabled => {
            info!(path = %route.path, "Route is registered but not enabled");
            helpers::err_response(404, "not found")
        }
        RouteState::Enabled(Endpoint::Info) => helpers::ok_text(&banner()),
        RouteState::Enabled(Endpoint::ShareDialog) => {
            handle_share_dialog(config, api, payload, headers).await
        }
    }
}

async fn handle_share_dialog(
    config: &AppConfig,
    api: &dyn ContentApi,
    payload: &Value,
    headers: &Value,
) -> Value {
    let user_id = match auth::check_authenticity(headers) {
        Ok(u) => u,
        Err(response) => return response,
    };

    let body = match parsing::extract_body(payload) {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "Failed to read request body");
            return helpers::err_response(400, "invalid request");
        }
    };

    dialog::handle_submit_dialog_request(api, &config.site_url, user_id, &body).await
}
