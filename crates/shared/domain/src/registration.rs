//! Two-step member registration form.
//!
//! Step one collects the account credentials, step two the optional contact
//! details and the terms agreement. Validation runs entirely client side;
//! nothing here touches the network.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DEFAULT_MEMBERSHIP_TIER, MIN_PASSWORD_LENGTH};
use crate::error::{DomainError, DomainResult};
use crate::user::{MembershipType, RegisterRequest, UserRole};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[\d\s\-\(\)]+$").expect("valid phone regex")
});

/// Raw form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub date_of_birth: String,
    pub membership_type: String,
    pub agree_to_terms: bool,
    pub agree_to_marketing: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            membership_type: DEFAULT_MEMBERSHIP_TIER.to_string(),
            agree_to_terms: false,
            agree_to_marketing: false,
        }
    }
}

impl RegistrationForm {
    /// First failing credential check, if any
    pub fn validate_credentials(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Name is required");
        }
        if self.email.trim().is_empty() {
            return Some("Email is required");
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Some("Invalid email format");
        }
        if self.password.is_empty() {
            return Some("Password is required");
        }
        if (self.password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
            return Some("Password must be at least 8 characters");
        }
        if self.password != self.confirm_password {
            return Some("Passwords do not match");
        }
        None
    }

    /// First failing contact/terms check, if any
    pub fn validate_details(&self) -> Option<&'static str> {
        if !self.phone.is_empty() && !PHONE_PATTERN.is_match(&self.phone) {
            return Some("Invalid phone number");
        }
        if !self.agree_to_terms {
            return Some("You must agree to the terms and conditions");
        }
        None
    }

    /// Build the register payload for a member account
    pub fn to_request(&self) -> DomainResult<RegisterRequest> {
        let tier: MembershipType = self.membership_type.parse()?;

        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: Some(UserRole::Member),
            phone: non_empty(&self.phone),
            address: None,
            date_of_birth: non_empty(&self.date_of_birth),
            membership_type: Some(tier),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    Credentials,
    Details,
}

/// Step state machine around [`RegistrationForm`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationWizard {
    pub form: RegistrationForm,
    step: RegistrationStep,
    error: Option<String>,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::with_form(RegistrationForm::default())
    }

    pub fn with_form(form: RegistrationForm) -> Self {
        Self {
            form,
            step: RegistrationStep::Credentials,
            error: None,
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    /// Message shown above the form
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Advance to the details step when the credentials are valid
    pub fn next(&mut self) -> DomainResult<()> {
        if let Some(msg) = self.form.validate_credentials() {
            return self.fail(msg);
        }
        self.error = None;
        self.step = RegistrationStep::Details;
        Ok(())
    }

    /// Return to the credentials step
    pub fn back(&mut self) {
        self.error = None;
        self.step = RegistrationStep::Credentials;
    }

    /// Validate both steps and produce the request to send
    pub fn submit(&mut self) -> DomainResult<RegisterRequest> {
        if let Some(msg) = self.form.validate_credentials() {
            self.step = RegistrationStep::Credentials;
            return self.fail(msg);
        }
        if let Some(msg) = self.form.validate_details() {
            self.step = RegistrationStep::Details;
            return self.fail(msg);
        }

        match self.form.to_request() {
            Ok(request) => {
                self.error = None;
                Ok(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Record a failure reported after submission, e.g. by the backend
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    fn fail<T>(&mut self, msg: &str) -> DomainResult<T> {
        self.error = Some(msg.to_string());
        Err(DomainError::validation(msg))
    }
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}
