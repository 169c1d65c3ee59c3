//! Portal endpoint configuration.

use chrono::NaiveDate;

use crate::constants::{
    DEFAULT_IDENTITY_BASE_URL, DEFAULT_PORTAL_BASE_URL, DEFAULT_SSO_PAGE, DEFAULT_TENANT,
    TIMESHEET_PATH,
};

/// Endpoints and tenant for one portal deployment.
///
/// `Default` points at the production hosts; tests override the base
/// URLs to aim at a local mock server.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Workday identity host, no trailing slash.
    pub identity_base_url: String,
    /// Workday tenant name.
    pub tenant: String,
    /// Workbrain host behind the SAML hop, no trailing slash.
    pub portal_base_url: String,
    /// Page id of the SAML auto-submit document.
    pub sso_page: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
            tenant: DEFAULT_TENANT.to_string(),
            portal_base_url: DEFAULT_PORTAL_BASE_URL.to_string(),
            sso_page: DEFAULT_SSO_PAGE.to_string(),
        }
    }
}

impl PortalConfig {
    /// Password endpoint on the identity gateway.
    pub fn login_url(&self) -> String {
        format!(
            "{}/wday/authgwy/{}/login-auth.xml",
            self.identity_base_url, self.tenant
        )
    }

    /// TOTP challenge endpoint on the identity gateway.
    pub fn mfa_url(&self) -> String {
        format!(
            "{}/wday/authgwy/{}/api/authn/mfa/challenge/workday/totp",
            self.identity_base_url, self.tenant
        )
    }

    /// SAML auto-submit page that carries the signed response form.
    pub fn sso_page_url(&self) -> String {
        format!(
            "{}/{}/samlsso/autosubmit/{}.htmld",
            self.identity_base_url, self.tenant, self.sso_page
        )
    }

    /// SSO endpoint on the portal host the form is relayed to.
    pub fn sso_submit_url(&self) -> String {
        format!("{}/samlsso", self.portal_base_url)
    }

    /// Day view for one date. The portal wants its dates as MM.DD.YYYY.
    pub fn day_view_url(&self, date: NaiveDate) -> String {
        format!(
            "{}{}?date={}",
            self.portal_base_url,
            TIMESHEET_PATH,
            date.format("%m.%d.%Y")
        )
    }
}
