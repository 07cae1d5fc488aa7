//! Admin / vendor login form

use std::fmt;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

use crate::controller::{FormSchema, ResourceController};
use crate::error::{CoreError, CoreResult};
use crate::session::SessionContext;
use crate::traits::Mutator;
use crate::types::{Ack, Credentials, FieldValue, Identity, Role, Submission, Violation};

const MIN_PASSWORD_LEN: usize = 6;

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

#[allow(clippy::expect_used)]
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Login form fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub role: Role,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFields")
            .field("role", &self.role)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<&LoginFields> for Credentials {
    fn from(fields: &LoginFields) -> Self {
        Self {
            role: fields.role,
            email: fields.email.trim().to_string(),
            password: fields.password.clone(),
        }
    }
}

/// Signs in through the session context; nothing is fetched.
pub struct LoginForm;

impl LoginForm {
    pub fn controller(session: Arc<SessionContext>) -> ResourceController<Self> {
        ResourceController::new().with_mutator(session)
    }
}

fn looks_like_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

impl FormSchema for LoginForm {
    type Resource = ();
    type Item = ();
    type Fields = LoginFields;

    const NAME: &'static str = "login";

    fn fields_from(_resource: ()) -> LoginFields {
        LoginFields::default()
    }

    fn validate(fields: &LoginFields) -> Vec<Violation> {
        let mut violations = Vec::new();
        let email = fields.email.trim();
        if email.is_empty() {
            violations.push(Violation::required("email", "Email"));
        } else if !looks_like_email(email) {
            violations.push(Violation::new("email", "Enter a valid email address."));
        }
        if fields.password.trim().is_empty() {
            violations.push(Violation::required("password", "Password"));
        } else if fields.password.chars().count() < MIN_PASSWORD_LEN {
            violations.push(Violation::new(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters long."),
            ));
        }
        violations
    }

    fn apply_field(fields: &mut LoginFields, name: &str, value: FieldValue) -> CoreResult<()> {
        match name {
            "email" => fields.email = value.into_text(name)?,
            "password" => fields.password = value.into_text(name)?,
            "role" => {
                fields.role = match value.into_choice(name)?.as_deref() {
                    Some("admin") => Role::Admin,
                    Some("vendor") => Role::Vendor,
                    _ => {
                        return Err(CoreError::FieldType {
                            field: name.to_string(),
                            expected: "admin or vendor",
                        })
                    }
                }
            }
            _ => return Err(CoreError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn success_message(_is_update: bool) -> String {
        "Login successful!".to_string()
    }
}

#[async_trait]
impl Mutator<LoginFields> for SessionContext {
    async fn mutate(
        &self,
        _identity: Option<&Identity>,
        submission: &Submission<LoginFields>,
    ) -> CoreResult<Ack> {
        let credentials = Credentials::from(&submission.fields);
        self.establish(&credentials).await?;
        Ok(Ack {
            id: self.identity().await.map(|identity| identity.id),
            message: None,
        })
    }
}
