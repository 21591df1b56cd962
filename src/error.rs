use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for EnhanceError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        EnhanceError::InvalidOptions(err.to_string())
    }
}

impl From<EnhanceError> for JsValue {
    fn from(err: EnhanceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
