use crate::libs::error::AppError;
use crate::libs::users::UserDirectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Standard,
}

/// Authenticated task-tracker session, handed to every operation.
#[derive(Debug, Clone)]
pub struct Session {
    pub current_user: String,
    pub role: Role,
    pub users: UserDirectory,
    admin_user: String,
}

impl Session {
    /// Opens a session when the credentials match. The role is admin for `admin_user`.
    pub fn login(users: &UserDirectory, admin_user: &str, username: &str, password: &str) -> Option<Session> {
        if !users.authenticate(username, password) {
            return None;
        }
        let role = if username == admin_user { Role::Admin } else { Role::Standard };
        Some(Session {
            current_user: username.to_string(),
            role,
            users: users.clone(),
            admin_user: admin_user.to_string(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Unauthorized(self.admin_user.clone()))
        }
    }
}
