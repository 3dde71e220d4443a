//! Integration tests for tagval-validator, driven through `#[derive(Record)]`.

mod modes;
mod report;
mod scenario;

use tagval_validator::Record;

/// Address that has no registered validator.
#[derive(Debug, Clone)]
pub struct Email(pub String);

#[derive(Debug, Clone, Record)]
pub struct User {
    pub id: i64,
    #[validate(rule = "min=5,max=32")]
    pub name: String,
    #[validate(rule = "regexemail")]
    pub email: Email,
    #[validate(rule = "min=18")]
    pub age: i32,
    #[validate(rule = "length=24")]
    pub password: String,
}

impl User {
    pub fn sample() -> Self {
        Self {
            id: 123,
            name: "Testowe".into(),
            email: Email("test@example.com".into()),
            age: 0,
            password: "1234561234561234561234561".into(),
        }
    }
}
