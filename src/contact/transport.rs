use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use super::{FormPayload, FormTransport, SubmitReply};
use crate::error::SiteError;

/// Error body returned by the hosted form service on rejected submissions.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<ServiceFieldError>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceFieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl ServiceErrorBody {
    pub fn messages(self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .errors
            .into_iter()
            .map(|error| match error.field {
                Some(field) => format!("{}: {}", field, error.message),
                None => error.message,
            })
            .collect();
        if let Some(error) = self.error {
            messages.insert(0, error);
        }
        messages
    }
}

/// Parses whatever the service sent back; non-JSON bodies yield nothing.
pub fn parse_error_body(body: &str) -> Vec<String> {
    serde_json::from_str::<ServiceErrorBody>(body)
        .map(ServiceErrorBody::messages)
        .unwrap_or_default()
}

/// Posts the form as `multipart/form-data` with `fetch`, asking for JSON back.
pub struct GlooFormTransport;

impl FormTransport for GlooFormTransport {
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<SubmitReply, SiteError> {
        let form_data = FormData::new()?;
        for (name, value) in payload {
            form_data.append_with_str(name, value)?;
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(form_data)
            .send()
            .await
            .map_err(|e| {
                gloo_console::error!("Error:", e.to_string());
                SiteError::from(e)
            })?;

        let status = response.status();
        if response.ok() {
            return Ok(SubmitReply {
                status,
                ok: true,
                errors: Vec::new(),
            });
        }

        let errors = match response.text().await {
            Ok(body) => parse_error_body(&body),
            Err(_) => Vec::new(),
        };
        if errors.is_empty() {
            log::debug!("{}", SiteError::Status(status));
        }
        Ok(SubmitReply {
            status,
            ok: false,
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_errors() {
        let body = r#"{"error":"Validation errors","errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"}]}"#;
        assert_eq!(
            parse_error_body(body),
            vec![
                "Validation errors".to_string(),
                "email: should be an email".to_string()
            ]
        );
    }

    #[test]
    fn field_is_optional() {
        let body = r#"{"errors":[{"message":"form disabled"}]}"#;
        assert_eq!(parse_error_body(body), vec!["form disabled".to_string()]);
    }

    #[test]
    fn non_json_body_yields_nothing() {
        assert!(parse_error_body("<html>Bad Gateway</html>").is_empty());
        assert!(parse_error_body("").is_empty());
    }
}
