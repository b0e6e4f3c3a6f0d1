use std::str::FromStr;

use common::{ClientError, ClientResult};
use domain::{dashboard_url, DomainError, ROLE_ADMIN, ROLE_MEMBER};

use crate::auth::AuthContext;

/// Which sign-in tab the user is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignInTab {
    #[default]
    Member,
    Admin,
}

impl SignInTab {
    /// Role the backend must find on the account
    pub fn expected_role(&self) -> &'static str {
        match self {
            SignInTab::Member => ROLE_MEMBER,
            SignInTab::Admin => ROLE_ADMIN,
        }
    }
}

impl FromStr for SignInTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(SignInTab::Member),
            "admin" => Ok(SignInTab::Admin),
            other => Err(DomainError::unknown("sign-in tab", other)),
        }
    }
}

pub struct SignInPage;

impl SignInPage {
    /// Sign in and return the dashboard route to open
    pub async fn submit(
        ctx: &AuthContext,
        email: &str,
        password: &str,
        tab: SignInTab,
    ) -> ClientResult<&'static str> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::validation("Please fill in all fields"));
        }

        let user = ctx.login(email.trim(), password, Some(tab.expected_role())).await?;
        Ok(dashboard_url(&user))
    }
}
