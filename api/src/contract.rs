//! Wire shapes of the documented `/v1` REST API.
//!
//! No server implements these routes; they describe what a real backend
//! would accept and return, and feed the API documentation page and the
//! translator's response preview.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, TranslateError};
use crate::language::{Language, LanguageCode, LANGUAGES};
use crate::translation::{Analysis, Translation};

pub const API_BASE_URL: &str = "https://api.translatepro.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    #[serde(default)]
    pub analysis: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translation: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub usage_count: u64,
    pub request_id: String,
}

impl TranslateResponse {
    /// Response body for `translation`, as the documented endpoint would return it.
    pub fn from_translation(translation: &Translation, usage_count: u64) -> Self {
        Self {
            success: true,
            translation: translation.translation.clone(),
            from: translation.from.clone(),
            to: translation.to.clone(),
            confidence: 0.99,
            analysis: translation.analysis.clone(),
            alternatives: vec![
                "Hola, ¿qué tal?".to_string(),
                "Hola, ¿cómo te encuentras?".to_string(),
            ],
            usage_count,
            request_id: new_request_id(),
        }
    }
}

pub fn new_request_id() -> String {
    format!("req_{}", uuid::Uuid::new_v4().simple())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: Vec<Language>,
}

impl LanguagesResponse {
    pub fn supported() -> Self {
        Self {
            success: true,
            languages: LANGUAGES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectResponse {
    pub success: bool,
    pub language: LanguageCode,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub language: LanguageCode,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<crate::translation::AnalysisKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&TranslateError> for ApiErrorBody {
    fn from(err: &TranslateError) -> Self {
        Self {
            success: false,
            error: ApiErrorDetail {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub description: &'static str,
    pub params: &'static [&'static str],
}

pub static ENDPOINTS: [Endpoint; 4] = [
    Endpoint {
        method: Method::Post,
        path: "/v1/translate",
        description: "Translate text with advanced analysis",
        params: &["text", "from", "to", "analysis"],
    },
    Endpoint {
        method: Method::Get,
        path: "/v1/languages",
        description: "Get list of supported languages",
        params: &["supported"],
    },
    Endpoint {
        method: Method::Post,
        path: "/v1/detect",
        description: "Detect language of input text",
        params: &["text"],
    },
    Endpoint {
        method: Method::Post,
        path: "/v1/analyze",
        description: "Get linguistic analysis only",
        params: &["text", "language", "type"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::MOCK_TRANSLATION;

    #[test]
    fn translate_request_parses_documented_body() {
        let body = r#"{"text":"Hello, how are you?","from":"en","to":"es","analysis":true}"#;
        let req: TranslateRequest = serde_json::from_str(body).expect("parse");
        assert_eq!(req.from.as_str(), "en");
        assert!(req.analysis);

        let no_flag: TranslateRequest =
            serde_json::from_str(r#"{"text":"hi","from":"en","to":"fr"}"#).expect("parse");
        assert!(!no_flag.analysis);
    }

    #[test]
    fn translate_response_carries_documented_fields() {
        let t = Translation::mock("Hello", "en".into(), "es".into());
        let resp = TranslateResponse::from_translation(&t, 1);
        let json = serde_json::to_value(&resp).expect("serialize");

        for field in [
            "success",
            "translation",
            "from",
            "to",
            "confidence",
            "analysis",
            "alternatives",
            "usage_count",
            "request_id",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["translation"], MOCK_TRANSLATION);
        assert_eq!(json["analysis"]["type"], "word");
        assert!(resp.request_id.starts_with("req_"));
    }

    #[test]
    fn error_body_uses_wire_code() {
        let body = ApiErrorBody::from(&TranslateError::RateLimited {
            retry_after_secs: None,
        });
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "rate_limited");
    }

    #[test]
    fn languages_response_lists_catalog() {
        let resp = LanguagesResponse::supported();
        assert_eq!(resp.languages.len(), 12);
        assert_eq!(resp.languages[0].code, "en");
    }

    #[test]
    fn endpoint_catalog_matches_docs() {
        let paths: Vec<_> = ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec!["/v1/translate", "/v1/languages", "/v1/detect", "/v1/analyze"]
        );
        assert_eq!(ENDPOINTS[1].method.as_str(), "GET");
    }
}
