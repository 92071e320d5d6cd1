use crate::core::handler;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway proxy 事件中用得到的部分
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayRequest {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    fn text(status_code: u16, body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "text/plain; charset=utf-8".to_string(),
        );

        Self {
            status_code,
            headers,
            body: body.into(),
            is_base64_encoded: false,
        }
    }
}

pub fn handle_gateway_request(request: GatewayRequest) -> GatewayResponse {
    let body = request.body.unwrap_or_default();

    match handler::evaluate_body(body.as_bytes()) {
        Ok(message) => GatewayResponse::text(200, message),
        Err(rejection) => GatewayResponse::text(400, rejection.to_string()),
    }
}
