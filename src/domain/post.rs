use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

/// Create input before validation. Fields are optional so that every absent
/// field can be reported by name in a single error.
#[derive(Debug, Clone, Default)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// A create request with all required fields present and the date checked.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<PostDraft, DomainError> {
        match (self.title, self.content, self.author, self.date) {
            (Some(title), Some(content), Some(author), Some(date)) => {
                validate_date(&date)?;
                Ok(PostDraft {
                    title,
                    content,
                    author,
                    date,
                })
            }
            (title, content, author, date) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if content.is_none() {
                    missing.push("content");
                }
                if author.is_none() {
                    missing.push("author");
                }
                if date.is_none() {
                    missing.push("date");
                }
                Err(DomainError::Validation(format!(
                    "Missing fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Partial update. Absent fields keep their stored value; the date is taken
/// as-is, without format validation (create is the only validated path).
#[derive(Debug, Clone, Default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

pub fn validate_date(date: &str) -> Result<(), DomainError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| DomainError::Validation("Invalid date format. Use YYYY-MM-DD.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::{CreatePostRequest, DomainError, validate_date};

    fn full_request() -> CreatePostRequest {
        CreatePostRequest {
            title: Some("First post".to_string()),
            content: Some("This is the first post.".to_string()),
            author: Some("Author One".to_string()),
            date: Some("2023-01-01".to_string()),
        }
    }

    #[test]
    fn validate_accepts_complete_request() {
        let draft = full_request().validate().expect("must validate");
        assert_eq!(draft.title, "First post");
        assert_eq!(draft.date, "2023-01-01");
    }

    #[test]
    fn validate_names_single_missing_field() {
        let mut req = full_request();
        req.author = None;

        let err = req.validate().expect_err("author must be reported");
        assert_validation_message(err, "Missing fields: author");
    }

    #[test]
    fn validate_lists_missing_fields_in_declaration_order() {
        let req = CreatePostRequest {
            title: None,
            content: Some("body".to_string()),
            author: None,
            date: None,
        };

        let err = req.validate().expect_err("fields must be reported");
        assert_validation_message(err, "Missing fields: title, author, date");
    }

    #[test]
    fn validate_lists_all_fields_for_empty_request() {
        let err = CreatePostRequest::default()
            .validate()
            .expect_err("everything is missing");
        assert_validation_message(err, "Missing fields: title, content, author, date");
    }

    #[test]
    fn validate_rejects_out_of_range_month() {
        let mut req = full_request();
        req.date = Some("2023-13-01".to_string());

        let err = req.validate().expect_err("month 13 must be rejected");
        assert_validation_message(err, "Invalid date format. Use YYYY-MM-DD.");
    }

    #[test]
    fn validate_date_rejects_wrong_separator() {
        assert!(validate_date("2023/01/01").is_err());
        assert!(validate_date("01-01-2023").is_err());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2024-02-29").is_ok());
    }

    fn assert_validation_message(err: DomainError, expected: &str) {
        match err {
            DomainError::Validation(message) => assert_eq!(message, expected),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
