use tracing::debug;

use common::{ClientError, ClientResult};
use domain::{dashboard_url, RegistrationForm, RegistrationStep, RegistrationWizard};

use crate::auth::Registrar;

/// Two-step registration page
#[derive(Debug, Default)]
pub struct RegistrationPage {
    wizard: RegistrationWizard,
}

impl RegistrationPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: RegistrationForm) -> Self {
        Self {
            wizard: RegistrationWizard::with_form(form),
        }
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.wizard.form
    }

    pub fn step(&self) -> RegistrationStep {
        self.wizard.step()
    }

    pub fn error(&self) -> Option<&str> {
        self.wizard.error()
    }

    pub fn next(&mut self) -> ClientResult<()> {
        Ok(self.wizard.next()?)
    }

    pub fn back(&mut self) {
        self.wizard.back();
    }

    /// Validate, create the account and return the dashboard route.
    ///
    /// Nothing is sent while the form is invalid.
    pub async fn submit(&mut self, registrar: &dyn Registrar) -> ClientResult<&'static str> {
        let request = self.wizard.submit().map_err(ClientError::from)?;

        match registrar.register(request).await {
            Ok(user) => Ok(dashboard_url(&user)),
            Err(e) => {
                debug!(error = %e, "Registration rejected");
                self.wizard.set_error(e.user_message());
                Err(e)
            }
        }
    }
}
