use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contact header of a portfolio. Every field is optional; the assembler
/// substitutes placeholders for the missing ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}
