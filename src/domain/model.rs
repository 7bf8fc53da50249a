use serde::{Deserialize, Serialize};

/// 後端 `validate.Address` 的 JSON 形狀
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerSignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub email: String,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerLoginRequest {
    pub email: String,
    pub password: String,
}

/// 後端回應：狀態碼加上盡量解析成 JSON 的內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// 非 JSON 內容保留為字串，空內容為 null
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(text)
                .unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
        };
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 一次 action 呼叫的最終結果。只用來觀察，不是錯誤。
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Succeeded(ApiResponse),
    Rejected(ApiResponse),
    Failed { reason: String },
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Succeeded(_))
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ActionOutcome::Succeeded(resp) | ActionOutcome::Rejected(resp) => Some(resp),
            ActionOutcome::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_up_request_wire_format() {
        let req = BuyerSignUpRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "Secret#123".to_string(),
            email: "ada@example.com".to_string(),
            billing_address: Some(Address {
                street_address: "1 Main St".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                zip: 80202,
            }),
            shipping_address: None,
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["billingAddress"]["streetAddress"], "1 Main St");
        assert_eq!(value["billingAddress"]["zip"], 80202);
        assert_eq!(value["shippingAddress"], json!(null));
    }

    #[test]
    fn test_api_response_body_parsing() {
        assert_eq!(
            ApiResponse::from_text(200, r#"{"ok":true}"#).body,
            json!({"ok": true})
        );
        assert_eq!(
            ApiResponse::from_text(500, "unable to parse json\n").body,
            json!("unable to parse json\n")
        );
        assert_eq!(ApiResponse::from_text(200, "").body, json!(null));
    }

    #[test]
    fn test_outcome_accessors() {
        let rejected = ActionOutcome::Rejected(ApiResponse::from_text(400, ""));
        assert!(!rejected.is_success());
        assert_eq!(rejected.response().map(|r| r.status), Some(400));

        let failed = ActionOutcome::Failed {
            reason: "connection refused".to_string(),
        };
        assert!(failed.response().is_none());
    }
}
