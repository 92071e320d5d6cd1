//! 與傳輸層無關的請求處理：HTTP server 與 Lambda handler 共用。

use crate::core::cpf;
use crate::domain::model::{CpfRequest, VALID_MESSAGE};
use crate::utils::error::RequestRejection;

/// 從原始 body 取出 CPF。body 不是 JSON 物件、或 `cpf` 缺少/為 null 時回傳 `None`。
pub fn parse_request(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Request body is not valid JSON: {}", e);
            return None;
        }
    };

    if !value.is_object() {
        tracing::debug!("Request body is not a JSON object");
        return None;
    }

    match serde_json::from_value::<CpfRequest>(value) {
        Ok(request) => request.cpf,
        Err(e) => {
            tracing::debug!("Request body does not match the expected shape: {}", e);
            None
        }
    }
}

/// 驗證請求 body，成功時回傳 200 的訊息。
pub fn evaluate_body(body: &[u8]) -> Result<&'static str, RequestRejection> {
    tracing::info!("Starting CPF validation");

    let Some(candidate) = parse_request(body) else {
        tracing::warn!("❌ Request rejected: CPF not provided");
        return Err(RequestRejection::MalformedRequest);
    };

    if !cpf::is_valid(&candidate) {
        tracing::info!("❌ CPF failed checksum validation");
        return Err(RequestRejection::InvalidIdentifier);
    }

    tracing::info!("✅ CPF is valid");
    Ok(VALID_MESSAGE)
}
