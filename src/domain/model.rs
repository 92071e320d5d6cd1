use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub const VALID_MESSAGE: &str = "CPF válido!";
pub const INVALID_MESSAGE: &str = "CPF inválido!";
pub const MISSING_CPF_MESSAGE: &str = "Por favor, informe o CPF";

/// 請求 body：只認得 `cpf` 欄位，其餘欄位忽略。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpfRequest {
    #[serde(default, deserialize_with = "deserialize_cpf")]
    pub cpf: Option<String>,
}

/// 字串原樣使用，數字轉成十進位文字；`null` 視為未提供。
fn deserialize_cpf<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(cpf)) => Ok(Some(cpf)),
        Some(serde_json::Value::Number(cpf)) => Ok(Some(cpf.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "cpf must be a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_field_forms() {
        let parse = |json: &str| serde_json::from_str::<CpfRequest>(json).map(|r| r.cpf);

        assert_eq!(
            parse(r#"{"cpf":"529.982.247-25"}"#).unwrap(),
            Some("529.982.247-25".to_string())
        );
        assert_eq!(
            parse(r#"{"cpf":52998224725}"#).unwrap(),
            Some("52998224725".to_string())
        );
        assert_eq!(parse(r#"{"cpf":null}"#).unwrap(), None);
        assert_eq!(parse(r#"{}"#).unwrap(), None);
        assert!(parse(r#"{"cpf":true}"#).is_err());
        assert!(parse(r#"{"cpf":["52998224725"]}"#).is_err());
    }
}
