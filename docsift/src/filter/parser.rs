//! Turns a filter expression document into a [Filter] tree.
//!
//! Parsing validates the whole expression up front, so an unknown or
//! reserved operator fails the query before any document is looked at.

use crate::collection::Document;
use crate::common::Value;
use crate::config::QueryConfig;
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};

use super::{
    all, and, or, ComparisonOperator, EqualsFilter, FieldPath, Filter, LogicalOperator,
    RangeFilter,
};

const OPERATOR_PREFIX: char = '$';

/// Parses a filter expression.
///
/// * The empty expression matches every document.
/// * `$and` / `$or` map to an array of nested expressions.
/// * Any other `$` key fails: reserved operators with
///   [ErrorKind::NotImplemented], the rest with
///   [ErrorKind::UnsupportedOperator].
/// * A plain key is a field condition. Its value is either an operator map
///   (`{"$gt": 10, "$lt": 20}`) or a literal compared for (deep) equality.
///
/// All keys at one level are combined with AND, in key order.
///
/// ```rust,ignore
/// let expression = doc! { "$or": [{ a: 2 }, { b: { "$gte": 2 } }] };
/// let filter = parse_filter(&expression, &QueryConfig::default())?;
/// ```
pub fn parse_filter(expression: &Document, config: &QueryConfig) -> DocSiftResult<Filter> {
    if expression.is_empty() {
        return Ok(all());
    }

    let mut conjuncts = Vec::with_capacity(expression.size());
    for (key, value) in expression.iter() {
        conjuncts.push(parse_entry(key, value, config)?);
    }

    if conjuncts.len() == 1 {
        Ok(conjuncts.swap_remove(0))
    } else {
        Ok(and(conjuncts))
    }
}

/// Parses a filter expression given as JSON.
pub fn parse_filter_json(expression: &serde_json::Value, config: &QueryConfig) -> DocSiftResult<Filter> {
    let expression = Document::try_from(expression.clone()).map_err(|e| {
        log::error!("Filter expression must be a JSON object");
        DocSiftError::new_with_cause(
            "Filter expression must be a JSON object",
            ErrorKind::InvalidQuery,
            e,
        )
    })?;
    parse_filter(&expression, config)
}

fn parse_entry(key: &str, value: &Value, config: &QueryConfig) -> DocSiftResult<Filter> {
    if key.starts_with(OPERATOR_PREFIX) {
        let operator = LogicalOperator::try_from(key)?;
        let filters = parse_sub_expressions(operator, value, config)?;
        Ok(match operator {
            LogicalOperator::And => and(filters),
            LogicalOperator::Or => or(filters),
        })
    } else {
        parse_condition(key, value, config)
    }
}

fn parse_sub_expressions(
    operator: LogicalOperator,
    value: &Value,
    config: &QueryConfig,
) -> DocSiftResult<Vec<Filter>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            log::error!("{} expects an array but found {}", operator, other.type_name());
            return Err(DocSiftError::new(
                &format!("{} expects an array of filter expressions", operator),
                ErrorKind::InvalidQuery,
            ));
        }
    };

    let mut filters = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Document(expression) => filters.push(parse_filter(expression, config)?),
            other => {
                log::error!("{} element must be a document but found {}", operator, other.type_name());
                return Err(DocSiftError::new(
                    &format!("{} element must be a filter expression", operator),
                    ErrorKind::InvalidQuery,
                ));
            }
        }
    }
    Ok(filters)
}

fn is_operator_key(key: &str) -> bool {
    key.starts_with(OPERATOR_PREFIX)
}

fn parse_condition(field_name: &str, condition: &Value, config: &QueryConfig) -> DocSiftResult<Filter> {
    let field = FieldPath::new(field_name.to_string(), config.field_separator());

    if let Value::Document(map) = condition {
        let first_is_operator = map.first_key().map(is_operator_key).unwrap_or(false);
        if first_is_operator {
            return parse_operator_map(field, map, config);
        }

        if let Some(key) = map.iter().map(|(k, _)| k).find(|k| is_operator_key(k)) {
            log::error!("Condition on {} mixes field {} with operators", field_name, key);
            return Err(mixed_condition(field_name));
        }
    }

    Ok(Filter::new(EqualsFilter::new(field, condition.clone())))
}

fn parse_operator_map(field: FieldPath, map: &Document, config: &QueryConfig) -> DocSiftResult<Filter> {
    let mut filters = Vec::with_capacity(map.size());
    for (key, operand) in map.iter() {
        // a plain key inside an operator map is an unknown operator
        let operator = ComparisonOperator::try_from(key.as_str())?;
        filters.push(Filter::new(RangeFilter::new(
            field.clone(),
            operand.clone(),
            operator,
            config.strict_comparison(),
        )));
    }

    if filters.len() == 1 {
        Ok(filters.swap_remove(0))
    } else {
        Ok(and(filters))
    }
}

fn mixed_condition(field_name: &str) -> DocSiftError {
    DocSiftError::new(
        &format!(
            "Condition on {} must be either an operator map or a literal value",
            field_name
        ),
        ErrorKind::InvalidQuery,
    )
}
