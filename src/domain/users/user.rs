use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    #[default]
    Client,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "client" => Some(UserRole::Client),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<i32>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub updated_by: Option<i32>,
}

impl User {
    pub fn display_name(&self) -> String {
        match self.second_surname.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => format!("{} {} {}", self.name, self.surname, s),
            _ => format!("{} {}", self.name, self.surname),
        }
    }
}

/// Shape check only; deliverability is the mail system's problem.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
