//! The add-numbers pseudo-endpoint.
//!
//! Takes `person`, `num1` and `num2` from a query string and answers with the
//! sum. Fields are positional: the first three `&`-separated fields are read
//! in that order and their key names are not checked.

use std::fmt;

use crate::html;

/// The query could not be split into the three expected fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The request path had no `?`
    Missing,
    /// Fewer than three fields were present
    TooFewFields(usize),
}

/// One field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Person,
    Num1,
    Num2,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Person => write!(f, "Please enter a valid person name."),
            FieldError::Num1 => write!(f, "Please enter a valid integer for num1."),
            FieldError::Num2 => write!(f, "Please enter a valid integer for num2."),
        }
    }
}

/// Raw field values, exactly as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddNums<'a> {
    pub person: &'a str,
    pub num1: &'a str,
    pub num2: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    /// Name with `+` decoded to spaces
    pub person: String,
    pub num1: String,
    pub num2: String,
    /// Computed in 64 bits, so `2147483647 + 1` is `2147483648` rather than
    /// wrapping to a negative 32-bit value.
    pub total: i64,
}

impl<'a> AddNums<'a> {
    pub fn parse(query: Option<&'a str>) -> Result<Self, QueryError> {
        let query = query.ok_or(QueryError::Missing)?;
        let fields: Vec<&str> = query.split('&').collect();

        if fields.len() < 3 {
            return Err(QueryError::TooFewFields(fields.len()));
        }

        Ok(Self {
            person: field_value(fields[0]),
            num1: field_value(fields[1]),
            num2: field_value(fields[2]),
        })
    }

    /// Validates every field, reporting all failures at once.
    pub fn evaluate(&self) -> Result<Sum, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.person.is_empty() {
            errors.push(FieldError::Person);
        }
        let num1 = self.num1.parse::<i32>().ok();
        if num1.is_none() {
            errors.push(FieldError::Num1);
        }
        let num2 = self.num2.parse::<i32>().ok();
        if num2.is_none() {
            errors.push(FieldError::Num2);
        }

        match (num1, num2) {
            (Some(a), Some(b)) if errors.is_empty() => Ok(Sum {
                person: self.person.replace('+', " "),
                num1: self.num1.to_string(),
                num2: self.num2.to_string(),
                total: i64::from(a) + i64::from(b),
            }),
            _ => Err(errors),
        }
    }
}

/// Text after the first `=`, or the whole field when there is none.
fn field_value(field: &str) -> &str {
    field.split_once('=').map_or(field, |(_, value)| value)
}

/// Renders an evaluation result as the page body.
pub fn render(result: &Result<Sum, Vec<FieldError>>) -> String {
    let message = match result {
        Ok(sum) => format!(
            "Dear {}, the sum of {} and {} is {}.",
            sum.person, sum.num1, sum.num2, sum.total
        ),
        Err(errors) => errors.iter().map(|e| format!("{e} ")).collect(),
    };

    html::document(&html::preformatted(&message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_without_equals_is_taken_whole() {
        assert_eq!(field_value("Alice"), "Alice");
        assert_eq!(field_value("person=Al=ice"), "Al=ice");
    }

    #[test]
    fn sum_does_not_overflow() {
        let call = AddNums { person: "x", num1: "2147483647", num2: "1" };
        assert_eq!(call.evaluate().unwrap().total, 2_147_483_648);
    }
}
