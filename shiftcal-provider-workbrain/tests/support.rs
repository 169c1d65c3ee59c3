//! Shared wiremock scaffolding for portal tests.
//!
//! One mock server plays both hosts (identity gateway and portal);
//! the paths never collide, so tests just point both base URLs at it.

use shiftcal_provider_workbrain::{AuthError, Credentials, Portal, PortalConfig, Session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LOGIN_PATH: &str = "/wday/authgwy/cineplex/login-auth.xml";
pub const MFA_PATH: &str = "/wday/authgwy/cineplex/api/authn/mfa/challenge/workday/totp";
pub const SSO_PAGE_PATH: &str = "/cineplex/samlsso/autosubmit/6503$1.htmld";
pub const SSO_SUBMIT_PATH: &str = "/samlsso";

/// Session cookie the mocked portal hands out on the SSO hop.
pub const PORTAL_COOKIE: &str = "JSESSIONID=wb-9";

/// RFC 6238 test secret; any valid base32 works because the mocked
/// challenge never verifies the code.
const TOTP_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

/// The auto-submit page as the gateway renders it on a good day.
pub const SSO_PAGE: &str = r#"<html><body onload="document.forms[0].submit()">
<form method="post" action="/samlsso">
<input type="hidden" name="SAMLResponse" value="c2FtbA==" />
<input type="hidden" name="RelayState" value="/etm/time/timesheet/etmTnsDay.jsp" />
</form>
</body></html>"#;

pub fn config_for(server: &MockServer) -> PortalConfig {
    PortalConfig {
        identity_base_url: server.uri(),
        tenant: "cineplex".to_string(),
        portal_base_url: server.uri(),
        sso_page: "6503$1".to_string(),
    }
}

fn credentials() -> Credentials {
    Credentials {
        username: "worker@example.com".to_string(),
        password: "hunter2".to_string(),
        totp_secret: TOTP_SECRET.to_string(),
    }
}

/// Run the blocking login off the async runtime's workers.
pub async fn login(config: PortalConfig) -> Result<Session, AuthError> {
    tokio::task::spawn_blocking(move || Portal::new(config).login(&credentials()))
        .await
        .expect("login task should not panic")
}

/// Mount the standard three-step happy path, expecting each step to be
/// hit exactly once. The SSO submit response sets the portal session
/// cookie.
pub async fn mount_successful_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"result":"SUCCESS","sessionSecureToken":"tok-1"}"#,
        ))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(MFA_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"SUCCESS"}"#))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(SSO_PAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(SSO_PAGE))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(SSO_SUBMIT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{PORTAL_COOKIE}; Path=/").as_str())
                .set_body_string("<html><body>Time and Attendance</body></html>"),
        )
        .expect(1)
        .mount(server)
        .await;
}
