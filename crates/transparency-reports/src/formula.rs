//! Formula engine: combine two series report by report

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::series::{DataSeries, Point};
use crate::store::ReportSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator '{0}' (expected one of + - * /)")]
pub struct ParseOperatorError(pub String);

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Word form, safe for ids
    pub fn word(self) -> &'static str {
        match self {
            Operator::Add => "plus",
            Operator::Subtract => "minus",
            Operator::Multiply => "times",
            Operator::Divide => "over",
        }
    }

    /// Division by zero yields 0
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" | "plus" => Ok(Operator::Add),
            "-" | "sub" | "minus" => Ok(Operator::Subtract),
            "*" | "x" | "mul" | "times" => Ok(Operator::Multiply),
            "/" | "div" | "over" => Ok(Operator::Divide),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

/// Points of `a <op> b` over the full sequence.
///
/// An operand without a point at a report counts as 0. A report is skipped only
/// when both operands are 0 and so is the result; `5 - 5` keeps its 0 point.
pub fn calculate_points(a: &DataSeries, b: &DataSeries, op: Operator, sequence: &ReportSequence) -> Vec<Point> {
    sequence
        .ids
        .iter()
        .filter_map(|&report| {
            let lhs = a.value_at(report).unwrap_or(0.0);
            let rhs = b.value_at(report).unwrap_or(0.0);
            let value = op.apply(lhs, rhs);

            if lhs == 0.0 && rhs == 0.0 && value == 0.0 {
                None
            } else {
                Some(Point { report, value })
            }
        })
        .collect()
}

/// Derived series `a <op> b`. Units are not checked; `a` and `b` may be the same series.
///
/// Id, name and color default from the operands; callers holding a
/// calculated-series definition override them.
pub fn build_calculated(a: &DataSeries, b: &DataSeries, op: Operator, sequence: &ReportSequence) -> DataSeries {
    DataSeries {
        id: format!("{}-{}-{}", a.id, op.word(), b.id),
        name: format!("{} {} {}", a.name, op, b.name),
        category: "Calculated".to_string(),
        color: a.color,
        org: sequence.org,
        points: calculate_points(a, b, op, sequence),
        source: None,
    }
}
