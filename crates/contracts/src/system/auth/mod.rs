use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub store_id: String,
    pub store_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_wire_format() {
        let req = LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "a@b.com", "password": "x"})
        );
        let resp: LoginResponse =
            serde_json::from_value(json!({"access_token": "t0k", "token_type": "bearer"}))
                .unwrap();
        assert_eq!(resp.access_token, "t0k");
    }

    #[test]
    fn test_register_wire_format() {
        let req = RegisterRequest {
            store_id: "bakery_01".into(),
            store_name: "パン工房".into(),
            email: "owner@example.com".into(),
            password: "secret123".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["store_id"], "bakery_01");
        assert_eq!(v["store_name"], "パン工房");
    }
}
