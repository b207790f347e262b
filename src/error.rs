use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Form endpoint responded with status {0}")]
    Status(u16),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_status() {
        assert_eq!(
            SiteError::Status(422).to_string(),
            "Form endpoint responded with status 422"
        );
    }

    #[test]
    fn network_error_wraps_gloo_error() {
        let err: SiteError = gloo_net::Error::GlooError("offline".to_string()).into();
        assert!(err.to_string().starts_with("Request failed:"));
    }
}
