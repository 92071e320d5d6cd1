use crate::domain::model::{CpfRequest, VALID_MESSAGE};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use reqwest::Client;

/// 遠端端點的回應
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
    pub status: u16,
    pub message: String,
}

impl EndpointReply {
    pub fn is_valid(&self) -> bool {
        self.status == 200 && self.message == VALID_MESSAGE
    }
}

/// 呼叫已部署的 CPF 驗證端點（冒煙測試用）
#[derive(Debug, Clone)]
pub struct CpfClient {
    endpoint: String,
    client: Client,
}

impl CpfClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("endpoint", &endpoint)?;

        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 任何 HTTP 狀態都算成功取得回應，只有連線層錯誤才回傳 `Err`。
    pub async fn check(&self, cpf: &str) -> Result<EndpointReply> {
        let payload = CpfRequest {
            cpf: Some(cpf.to_string()),
        };

        tracing::debug!("Posting CPF to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&payload).send().await?;

        let status = response.status().as_u16();
        let message = response.text().await?;
        tracing::debug!("Endpoint response status: {}", status);

        Ok(EndpointReply { status, message })
    }
}
