use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

/// One entry of the ranked score list returned by the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Score {
    pub label: String,
    pub confidence: f64,
}

/// Parsed classifier output: top label, headline confidence, full ranked scores.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub confidence: f64,
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}

/// HTTP client for the Fruit Guardian backend.
///
/// One instance is shared by every call so the session cookie issued by
/// /login travels with subsequent /predict requests.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Upload an image file to /predict as multipart field "image".
    pub async fn predict(
        &self,
        path: &Path,
    ) -> Result<PredictionResult, Box<dyn std::error::Error + Send + Sync>> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for(path))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let resp = self.http.post(self.url("/predict")).multipart(form).send().await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(extract_error(&body, "Prediction failed").into());
        }

        let result: PredictionResult = serde_json::from_str(&body)?;
        Ok(result)
    }

    /// Authenticate with username-or-email + password. Returns the server's
    /// success message.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.auth_post(
            "/login",
            serde_json::json!({ "identifier": identifier, "password": password }),
            "Login failed",
        )
        .await
    }

    /// Create an account. The backend also starts a session on success.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.auth_post(
            "/register",
            serde_json::json!({ "username": username, "email": email, "password": password }),
            "Registration failed",
        )
        .await
    }

    async fn auth_post(
        &self,
        path: &str,
        payload: Value,
        fallback: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let resp = self.http.post(self.url(path)).json(&payload).send().await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(extract_error(&body, fallback).into());
        }

        let parsed: MessageResponse = serde_json::from_str(&body)?;
        Ok(parsed.message)
    }

    /// Fetch the user table with an admin token. The payload shape is
    /// backend-defined, so it is returned as raw JSON.
    pub async fn admin_users(
        &self,
        token: &str,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let resp = self
            .http
            .get(self.url("/admin/users"))
            .query(&[("token", token)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(extract_error(&body, "Unable to fetch users").into());
        }

        let payload: Value = serde_json::from_str(&body)?;
        Ok(payload)
    }

    /// End the session. The caller navigates back to login regardless of
    /// the outcome, so only the transport error is reported.
    pub async fn logout(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.http
            .post(self.url("/logout"))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        Ok(())
    }
}

/// Pull the `error` field out of a failure body, falling back to a generic
/// message when the body is empty, unparseable, or carries no such field.
pub fn extract_error(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_explicit_error_field() {
        assert_eq!(
            extract_error(r#"{"error":"invalid image"}"#, "Prediction failed"),
            "invalid image"
        );
    }

    #[test]
    fn empty_body_falls_back_to_generic_message() {
        let msg = extract_error("", "Prediction failed");
        assert_eq!(msg, "Prediction failed");
        assert!(!msg.is_empty());
    }

    #[test]
    fn body_without_error_field_falls_back() {
        assert_eq!(extract_error(r#"{"status":"bad"}"#, "Login failed"), "Login failed");
        assert_eq!(extract_error("<html>502</html>", "Login failed"), "Login failed");
    }

    #[test]
    fn deserializes_prediction_response() {
        let body = r#"{
            "label": "Healthy",
            "confidence": 0.9231,
            "scores": [
                {"label": "Healthy", "confidence": 0.9231},
                {"label": "Alternaria", "confidence": 0.0769}
            ],
            "requestId": "abc123"
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.label, "Healthy");
        assert_eq!(result.scores.len(), 2);
        assert_eq!(result.scores[0].label, "Healthy");
        assert_eq!(result.scores[1].label, "Alternaria");
        assert_eq!(result.request_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn scores_and_request_id_are_optional() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"label":"Unknown","confidence":0.5}"#).unwrap();
        assert!(result.scores.is_empty());
        assert!(result.request_id.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.url("/predict"), "http://127.0.0.1:5000/predict");
    }
}
