use crate::common::{gt, gte, lt, lte, Value};
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};
use std::fmt::Display;

/// Operator keys that are part of the query language but not evaluated.
pub const RESERVED_OPERATORS: [&str; 7] = ["$ne", "$nin", "$not", "$nor", "$exists", "$type", "$in"];

/// Logical combinators allowed at the top level of a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn key(&self) -> &'static str {
        match self {
            LogicalOperator::And => "$and",
            LogicalOperator::Or => "$or",
        }
    }
}

impl TryFrom<&str> for LogicalOperator {
    type Error = DocSiftError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        match key {
            "$and" => Ok(LogicalOperator::And),
            "$or" => Ok(LogicalOperator::Or),
            _ => Err(unknown_operator(key)),
        }
    }
}

impl Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Comparison operators allowed inside a field's operator map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Lt,
    Gt,
    Lte,
    Gte,
}

impl ComparisonOperator {
    pub fn key(&self) -> &'static str {
        match self {
            ComparisonOperator::Lt => "$lt",
            ComparisonOperator::Gt => "$gt",
            ComparisonOperator::Lte => "$lte",
            ComparisonOperator::Gte => "$gte",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Lte => "<=",
            ComparisonOperator::Gte => ">=",
        }
    }

    /// Evaluates `field_value <op> operand`.
    #[inline]
    pub fn evaluate(&self, field_value: &Value, operand: &Value, strict: bool) -> DocSiftResult<bool> {
        match self {
            ComparisonOperator::Lt => lt(field_value, operand, strict),
            ComparisonOperator::Gt => gt(field_value, operand, strict),
            ComparisonOperator::Lte => lte(field_value, operand, strict),
            ComparisonOperator::Gte => gte(field_value, operand, strict),
        }
    }
}

impl TryFrom<&str> for ComparisonOperator {
    type Error = DocSiftError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        match key {
            "$lt" => Ok(ComparisonOperator::Lt),
            "$gt" => Ok(ComparisonOperator::Gt),
            "$lte" => Ok(ComparisonOperator::Lte),
            "$gte" => Ok(ComparisonOperator::Gte),
            _ => Err(unknown_operator(key)),
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

pub fn is_reserved_operator(key: &str) -> bool {
    RESERVED_OPERATORS.contains(&key)
}

fn unknown_operator(key: &str) -> DocSiftError {
    if is_reserved_operator(key) {
        log::error!("Operator {} is not implemented", key);
        DocSiftError::new(
            &format!("Operator {} is not implemented", key),
            ErrorKind::NotImplemented(key.to_string()),
        )
    } else {
        log::error!("Unsupported operator {}", key);
        DocSiftError::new(
            &format!("Unsupported operator {}", key),
            ErrorKind::UnsupportedOperator(key.to_string()),
        )
    }
}
