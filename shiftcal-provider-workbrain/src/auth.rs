//! Portal login: password, TOTP challenge, SAML relay.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use scraper::{Html, Selector};
use serde_json::json;
use tracing::debug;

use crate::client::PortalHttp;
use crate::config::PortalConfig;
use crate::constants::SECURE_TOKEN_HEADER;
use crate::error::{AuthError, AuthStage};
use crate::gateway::{GatewayReply, UNRECOGNIZED_REPLY};
use crate::session::Session;

/// Login inputs. The TOTP secret is the base32 string shown when MFA
/// was enrolled, not a generated passcode.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub totp_secret: String,
}

/// Entry point for the portal.
pub struct Portal {
    config: PortalConfig,
}

impl Portal {
    pub fn new(config: PortalConfig) -> Self {
        Portal { config }
    }

    /// Log in and return an authenticated session.
    ///
    /// Three sequential steps: the password against the identity
    /// gateway, a fresh TOTP passcode against the MFA challenge, then
    /// the SAML auto-submit relay onto the portal host. Each step must
    /// succeed before the next is attempted, and a failure carries the
    /// stage it happened at.
    ///
    /// Nothing is retried here. The SAML page in particular sometimes
    /// comes back without its form; callers that want another attempt
    /// call `login` again and start from the password step.
    pub fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let http = PortalHttp::new()
            .map_err(|e| AuthError::new(AuthStage::Password, format!("http client: {e}")))?;

        let secure_token = self.submit_password(&http, credentials)?;
        self.submit_passcode(&http, &credentials.totp_secret, &secure_token)?;
        self.relay_saml(&http)?;

        Ok(Session::new(http, self.config.clone()))
    }

    /// Step 1: POST the password form; a success hands out the secure
    /// token the MFA challenge wants.
    fn submit_password(
        &self,
        http: &PortalHttp,
        credentials: &Credentials,
    ) -> Result<String, AuthError> {
        let stage = AuthStage::Password;
        debug!("submitting password");

        let response = http
            .post_form(
                &self.config.login_url(),
                &[
                    ("userName", credentials.username.as_str()),
                    ("password", credentials.password.as_str()),
                ],
            )
            .map_err(|e| AuthError::new(stage, format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AuthError::new(stage, format!("could not read response: {e}")))?;

        interpret_reply(stage, status, &body)?.ok_or_else(|| {
            AuthError::new(stage, "gateway accepted the password but sent no session token")
        })
    }

    /// Step 2: answer the TOTP challenge under the secure token.
    fn submit_passcode(
        &self,
        http: &PortalHttp,
        totp_secret: &str,
        secure_token: &str,
    ) -> Result<(), AuthError> {
        let stage = AuthStage::Mfa;
        let code =
            crate::passcode::current(totp_secret).map_err(|reason| AuthError::new(stage, reason))?;
        debug!("submitting TOTP passcode");

        let response = http
            .post_json(
                &self.config.mfa_url(),
                (SECURE_TOKEN_HEADER, secure_token),
                &json!({ "passcode": code }),
            )
            .map_err(|e| AuthError::new(stage, format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AuthError::new(stage, format!("could not read response: {e}")))?;

        interpret_reply(stage, status, &body)?;
        Ok(())
    }

    /// Step 3: fetch the auto-submit page and relay its form onto the
    /// portal host, which sets the session cookies the scraper needs.
    fn relay_saml(&self, http: &PortalHttp) -> Result<(), AuthError> {
        let stage = AuthStage::Sso;
        debug!("fetching SAML auto-submit page");

        let response = http
            .get(&self.config.sso_page_url())
            .map_err(|e| AuthError::new(stage, format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AuthError::new(stage, format!("could not read response: {e}")))?;

        if !status.is_success() {
            return Err(AuthError::new(stage, format!("auto-submit page returned {status}")));
        }

        let fields = form_fields(&body);
        if fields.is_empty() {
            return Err(AuthError::new(stage, "no form fields found on the auto-submit page"));
        }

        debug!(field_count = fields.len(), "relaying SAML response");
        let response = http
            .post_form(&self.config.sso_submit_url(), &fields)
            .map_err(|e| AuthError::new(stage, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::new(stage, format!("SSO endpoint returned {status}")));
        }

        Ok(())
    }
}

/// Turn a gateway reply into this step's outcome.
///
/// A reason worded by the gateway beats a bare status code; the status
/// only matters when the body tells us nothing.
fn interpret_reply(
    stage: AuthStage,
    status: StatusCode,
    body: &str,
) -> Result<Option<String>, AuthError> {
    match GatewayReply::from_body(body) {
        GatewayReply::Failure { reason } => Err(AuthError::new(stage, reason)),
        GatewayReply::Success { secure_token } if status.is_success() => Ok(secure_token),
        GatewayReply::Success { .. } => {
            Err(AuthError::new(stage, format!("gateway returned {status}")))
        }
        GatewayReply::Unrecognized if status.is_success() => {
            Err(AuthError::new(stage, UNRECOGNIZED_REPLY))
        }
        GatewayReply::Unrecognized => {
            Err(AuthError::new(stage, format!("gateway returned {status}")))
        }
    }
}

/// Collect `name -> value` for every named `<input>` on the page.
/// Inputs without a value attribute count as empty.
fn form_fields(html: &str) -> BTreeMap<String, String> {
    let document = Html::parse_document(html);
    let input = Selector::parse("input").expect("valid selector");

    document
        .select(&input)
        .filter_map(|el| {
            let name = el.value().attr("name")?;
            let value = el.value().attr("value").unwrap_or("");
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
