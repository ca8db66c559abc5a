//! User-visible notices.
//!
//! Operations never crash the session: their outcome is turned into a short
//! notice the view shows as a toast.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Operations whose outcome is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadGoals,
    CreateGoal,
    ToggleTask,
    SignIn,
    SignUp,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Notice for the outcome of `operation`, if it warrants one.
    pub fn for_outcome<T>(operation: Operation, result: &Result<T>) -> Option<Self> {
        match (operation, result) {
            (Operation::LoadGoals, Ok(_)) => None,
            (Operation::LoadGoals, Err(_)) => Some(Self::error("Gagal memuat goal")),
            (Operation::CreateGoal, Ok(_)) => Some(Self::success("Goal berhasil dibuat!")),
            (Operation::CreateGoal, Err(Error::Validation(_))) => {
                Some(Self::error("Judul goal tidak boleh kosong"))
            }
            (Operation::CreateGoal, Err(_)) => Some(Self::error("Gagal membuat goal")),
            (Operation::ToggleTask, Ok(_)) => None,
            (Operation::ToggleTask, Err(_)) => Some(Self::error("Gagal mengupdate task")),
            (Operation::SignIn, Ok(_)) => Some(Self::success("Berhasil login!")),
            (Operation::SignIn, Err(e)) => Some(Self::error(format!("Login gagal: {}", e))),
            (Operation::SignUp, Ok(_)) => Some(Self::success(
                "Berhasil daftar! Silakan cek email untuk konfirmasi.",
            )),
            (Operation::SignUp, Err(Error::Validation(ValidationError::PasswordMismatch))) => {
                Some(Self::error("Password tidak cocok!"))
            }
            (
                Operation::SignUp,
                Err(Error::Validation(ValidationError::PasswordTooShort { min })),
            ) => Some(Self::error(format!("Password minimal {} karakter!", min))),
            (Operation::SignUp, Err(e)) => Some(Self::error(format!("Daftar gagal: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DataAccessError;

    fn data_error() -> Error {
        DataAccessError::Unreachable("offline".to_string()).into()
    }

    #[test]
    fn test_goal_notices() {
        let ok: Result<()> = Ok(());
        assert_eq!(Notice::for_outcome(Operation::LoadGoals, &ok), None);
        assert_eq!(
            Notice::for_outcome(Operation::CreateGoal, &ok),
            Some(Notice::success("Goal berhasil dibuat!"))
        );

        let failed: Result<()> = Err(data_error());
        assert_eq!(
            Notice::for_outcome(Operation::LoadGoals, &failed),
            Some(Notice::error("Gagal memuat goal"))
        );
        assert_eq!(
            Notice::for_outcome(Operation::ToggleTask, &failed),
            Some(Notice::error("Gagal mengupdate task"))
        );
    }

    #[test]
    fn test_sign_up_notices() {
        let short: Result<()> = Err(ValidationError::PasswordTooShort { min: 6 }.into());
        assert_eq!(
            Notice::for_outcome(Operation::SignUp, &short).unwrap().message,
            "Password minimal 6 karakter!"
        );
    }
}
