//! Endpoint constants for the observed portal deployment.

/// Workday identity host fronting the portal login.
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://wd3.myworkday.com";

/// Workday tenant name.
pub const DEFAULT_TENANT: &str = "cineplex";

/// Workbrain host behind the SAML hop.
pub const DEFAULT_PORTAL_BASE_URL: &str = "https://workbrain.cineplex.com";

/// Page id of the SAML auto-submit document for the portal relay.
pub const DEFAULT_SSO_PAGE: &str = "6503$1";

/// Client version header sent on every request.
pub const CLIENT_HEADER_NAME: &str = "X-Workday-Client";
pub const CLIENT_HEADER_VALUE: &str = "2024.37.11";

/// Header carrying the secure token between login and the MFA challenge.
pub const SECURE_TOKEN_HEADER: &str = "Session-Secure-Token";

/// Day-view timesheet path on the portal host.
pub const TIMESHEET_PATH: &str = "/etm/time/timesheet/etmTnsDay.jsp";
