//! Declarative batch updates modelled on document-database update operators.
//!
//! An operator document maps operator names to objects of
//! `dotted path -> operand`:
//!
//! ```
//! use jsonview_core::Cursor;
//! use serde_json::json;
//!
//! let doc = Cursor::new(json!({"count": 1, "tags": []}));
//! doc.apply_update(&Cursor::new(json!({
//!     "$inc": {"count": 2},
//!     "$push": {"tags": "new"},
//!     "$set": {"owner.name": "Ada"}
//! })));
//! assert_eq!(
//!     doc.value().unwrap(),
//!     json!({"count": 3, "tags": ["new"], "owner": {"name": "Ada"}})
//! );
//! ```
//!
//! Operators always run in the order of [`Operator::ALL`], independent of
//! their order in the operator document. There is no rollback: each operator
//! is applied in place as it is reached.

use crate::cursor::Cursor;
use crate::value::Num;
use crate::Missing;
use std::fmt;
use tracing::{trace, warn};

/// The recognized update operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Set fields, but only when the target document is Missing or Null.
    SetOnInsert,
    Set,
    /// Add to a number. Non-numeric current values count as 0.
    Inc,
    /// Replace when the operand is numerically smaller.
    Min,
    /// Replace when the operand is numerically larger.
    Max,
    /// Multiply a number. Non-numeric current values count as 0.
    Mul,
    /// Move a field to the path named by the operand.
    Rename,
    Unset,
    /// Append to an existing array. Anything else is left untouched.
    Push,
}

impl Operator {
    /// Application order.
    pub const ALL: [Operator; 9] = [
        Operator::SetOnInsert,
        Operator::Set,
        Operator::Inc,
        Operator::Min,
        Operator::Max,
        Operator::Mul,
        Operator::Rename,
        Operator::Unset,
        Operator::Push,
    ];

    /// The key naming this operator in an operator document.
    pub fn name(self) -> &'static str {
        match self {
            Operator::SetOnInsert => "$setOnInsert",
            Operator::Set => "$set",
            Operator::Inc => "$inc",
            Operator::Min => "$min",
            Operator::Max => "$max",
            Operator::Mul => "$mul",
            Operator::Rename => "$rename",
            Operator::Unset => "$unset",
            Operator::Push => "$push",
        }
    }

    /// Look an operator up by its document key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Cursor {
    /// Apply every operator of `ops` to this location and return it.
    ///
    /// Unknown top-level keys of `ops` are ignored, absent operators are
    /// no-ops.
    pub fn apply_update(&self, ops: &Cursor) -> &Self {
        let inserting = self.is_missing() || self.is_null();
        for op in Operator::ALL {
            if op == Operator::SetOnInsert && !inserting {
                continue;
            }
            for (path, operand) in ops.get(op.name()).fields() {
                trace!(operator = %op, path = %path, "applying update operator");
                self.apply_one(op, &path, &operand);
            }
        }
        self
    }

    fn apply_one(&self, op: Operator, path: &str, operand: &Cursor) {
        let target = self.select(path);
        match op {
            Operator::SetOnInsert | Operator::Set => {
                target.set(operand);
            }
            Operator::Inc => {
                let sum = current_number(&target).add(operand_number(op, path, operand));
                target.set(sum.into_value());
            }
            Operator::Mul => {
                let product = current_number(&target).mul(operand_number(op, path, operand));
                target.set(product.into_value());
            }
            Operator::Min | Operator::Max => {
                let current = current_number(&target).as_f64();
                let candidate = operand_number(op, path, operand);
                let replace = match op {
                    Operator::Min => candidate.as_f64() < current,
                    _ => candidate.as_f64() > current,
                };
                if replace {
                    target.set(candidate.into_value());
                }
            }
            Operator::Rename => {
                let Some(destination) = operand.with_content(|v| v?.as_str().map(str::to_string))
                else {
                    warn!(path = %path, "$rename target is not a string, skipping");
                    return;
                };
                self.select(&destination).set(&target);
                target.set(Missing);
            }
            Operator::Unset => {
                target.set(Missing);
            }
            Operator::Push => {
                if target.is_array() {
                    target.add(operand);
                }
            }
        }
    }
}

fn current_number(target: &Cursor) -> Num {
    target
        .with_content(Num::coerce)
        .unwrap_or(Num::Int(0))
}

fn operand_number(op: Operator, path: &str, operand: &Cursor) -> Num {
    operand.with_content(Num::coerce).unwrap_or_else(|| {
        warn!(
            operator = %op,
            path = %path,
            operand = %operand,
            "update operand is not numeric, using 0"
        );
        Num::Int(0)
    })
}
