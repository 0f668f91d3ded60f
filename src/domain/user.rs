use super::error::DomainError;

/// Register and login share the same wire shape, so one request type covers
/// both. Fields are optional to report absence as a 400, not a decode error.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl AuthRequest {
    pub fn validate(self) -> Result<Credentials, DomainError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Credentials { username, password })
            }
            _ => Err(DomainError::Validation(
                "Missing username or password".to_string(),
            )),
        }
    }
}
