use email_address::EmailAddress;

pub const USERNAME_MAX_LEN: usize = 150;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be at most 150 characters")]
    UsernameTooLong,

    #[error("Username may contain only letters, digits and @/./+/-/_ characters")]
    InvalidUsername,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Trims and checks a username: letters, digits and `@.+-_` only.
pub fn validate_username(username: &str) -> Result<String, FieldError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(FieldError::EmptyUsername);
    }

    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(FieldError::UsernameTooLong);
    }

    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(FieldError::InvalidUsername);
    }

    Ok(username.to_string())
}

/// Email is optional; an empty value is kept as empty.
pub fn validate_email(email: &str) -> Result<String, FieldError> {
    let email = email.trim();

    if email.is_empty() {
        return Ok(String::new());
    }

    if !EmailAddress::is_valid(email) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(email.to_string())
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}
