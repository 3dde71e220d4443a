//! The sample record.

use serde::Serialize;
use tagval_validator::Record;

use crate::cli::SampleArgs;

/// An email address. No validator is registered for it.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Email(pub String);

#[derive(Debug, Clone, Serialize, Record)]
pub struct User {
    pub id: i64,
    #[validate(rule = "min=5,max=32")]
    pub name: String,
    #[validate(rule = "regexemail")]
    pub email: Email,
    #[validate(rule = "min=18")]
    #[serde(rename = "Age")]
    pub age: i32,
    #[validate(rule = "length=24")]
    #[serde(skip)]
    pub password: String,
}

impl From<SampleArgs> for User {
    fn from(args: SampleArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            email: Email(args.email),
            age: args.age,
            password: args.password,
        }
    }
}
