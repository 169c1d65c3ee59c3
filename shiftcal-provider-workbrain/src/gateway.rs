//! Identity gateway reply interpretation.
//!
//! The gateway speaks JSON on the happy path and XML failure documents
//! on the sad path, sometimes behind a 200 status either way. Replies
//! are folded into one tagged type so the login flow never has to
//! probe response bodies for keys.

use serde::Deserialize;

/// Reason used when a gateway body is neither its JSON nor its XML shape.
pub const UNRECOGNIZED_REPLY: &str = "unrecognized response from identity gateway";

/// JSON body of a gateway reply.
#[derive(Debug, Deserialize)]
struct RawGatewayReply {
    result: String,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
    #[serde(rename = "sessionSecureToken")]
    session_secure_token: Option<String>,
}

/// What a gateway reply means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply {
    /// Accepted. The token, when present, authorizes the next step.
    Success { secure_token: Option<String> },
    /// Rejected, with the gateway's own wording.
    Failure { reason: String },
    /// Body was neither the JSON nor the XML shape the gateway uses.
    Unrecognized,
}

impl GatewayReply {
    /// Interpret a raw gateway body: JSON first, XML failure document
    /// second.
    pub fn from_body(body: &str) -> Self {
        if let Ok(raw) = serde_json::from_str::<RawGatewayReply>(body) {
            if raw.result == "SUCCESS" {
                return GatewayReply::Success {
                    secure_token: raw.session_secure_token,
                };
            }
            return GatewayReply::Failure {
                reason: raw.error_message.unwrap_or(raw.result),
            };
        }

        if let Some(reason) = failure_reason_from_xml(body) {
            return GatewayReply::Failure { reason };
        }

        GatewayReply::Unrecognized
    }
}

/// Pull the reason out of a `<wul:Failure Reason="...">text</wul:Failure>`
/// document.
fn failure_reason_from_xml(body: &str) -> Option<String> {
    let doc = roxmltree::Document::parse(body).ok()?;
    let failure = doc
        .descendants()
        .find(|n| n.tag_name().name() == "Failure")?;

    let reason = failure.attribute("Reason");
    let text = failure.text().map(str::trim).filter(|t| !t.is_empty());

    match (reason, text) {
        (Some(reason), Some(text)) => Some(format!("{reason}: {text}")),
        (Some(reason), None) => Some(reason.to_string()),
        (None, Some(text)) => Some(text.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_success_with_token() {
        let reply = GatewayReply::from_body(
            r#"{"result":"SUCCESS","sessionSecureToken":"abc123"}"#,
        );
        assert_eq!(
            reply,
            GatewayReply::Success {
                secure_token: Some("abc123".to_string())
            }
        );
    }

    #[test]
    fn test_json_success_without_token() {
        let reply = GatewayReply::from_body(r#"{"result":"SUCCESS"}"#);
        assert_eq!(reply, GatewayReply::Success { secure_token: None });
    }

    #[test]
    fn test_json_failure_uses_error_message() {
        let reply = GatewayReply::from_body(
            r#"{"result":"FAILURE","errorMessage":"Invalid user name or password."}"#,
        );
        assert_eq!(
            reply,
            GatewayReply::Failure {
                reason: "Invalid user name or password.".to_string()
            }
        );
    }

    #[test]
    fn test_json_failure_without_message_falls_back_to_result() {
        let reply = GatewayReply::from_body(r#"{"result":"AUTHENTICATION_DENIED"}"#);
        assert_eq!(
            reply,
            GatewayReply::Failure {
                reason: "AUTHENTICATION_DENIED".to_string()
            }
        );
    }

    #[test]
    fn test_xml_failure_reason_and_text() {
        let body = r#"<wul:Failure xmlns:wul="http://www.workday.com/ns/user-login/1.0" Reason="InvalidCredentialsException">Invalid user name or password.</wul:Failure>"#;
        let reply = GatewayReply::from_body(body);
        assert_eq!(
            reply,
            GatewayReply::Failure {
                reason: "InvalidCredentialsException: Invalid user name or password.".to_string()
            }
        );
    }

    #[test]
    fn test_xml_failure_inside_larger_document() {
        let body = r#"<wul:Document xmlns:wul="http://www.workday.com/ns/user-login/1.0">
  <wul:Failure Reason="SessionTimeoutException">Your session has expired.</wul:Failure>
</wul:Document>"#;
        let reply = GatewayReply::from_body(body);
        assert_eq!(
            reply,
            GatewayReply::Failure {
                reason: "SessionTimeoutException: Your session has expired.".to_string()
            }
        );
    }

    #[test]
    fn test_xml_failure_without_text_keeps_reason() {
        let body = r#"<wul:Failure xmlns:wul="http://www.workday.com/ns/user-login/1.0" Reason="InvalidCredentialsException"/>"#;
        let reply = GatewayReply::from_body(body);
        assert_eq!(
            reply,
            GatewayReply::Failure {
                reason: "InvalidCredentialsException".to_string()
            }
        );
    }

    #[test]
    fn test_garbage_body_is_unrecognized() {
        assert_eq!(GatewayReply::from_body("<html>502</html>"), GatewayReply::Unrecognized);
        assert_eq!(GatewayReply::from_body(""), GatewayReply::Unrecognized);
        assert_eq!(GatewayReply::from_body(r#"{"status":"ok"}"#), GatewayReply::Unrecognized);
    }
}
