use serde::Serialize;

use super::{
    ensure_success,
    ApiClient,
};
use crate::core::{
    AuthResponse,
    PrepwiseError,
    User,
};

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, PrepwiseError> {
        let resp = self.post("/api/auth/login").json(&LoginPayload { email, password }).send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, PrepwiseError> {
        let resp = self
            .post("/api/auth/register")
            .json(&SignUpPayload { name, email, password })
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    pub async fn profile(&self) -> Result<User, PrepwiseError> {
        let resp = self.authed(self.get("/api/auth/profile"))?.send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_shape() {
        let payload = LoginPayload { email: "a@b.com", password: "hunter22" };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "hunter22" }));
    }
}
