use super::truth::truthiness;
use super::{Flow, Interp};
use crate::error::RuntimeError;
use crate::syntax::ast::BinaryOp;
use crate::value::Value;

/// All six comparators derive from the two primitives `equal` and
/// `less`, the way instances define them (`__eq__` / `__lt__`).
pub(super) fn compare(interp: &mut Interp, op: BinaryOp, lhs: Value, rhs: Value) -> Flow<Value> {
  let result = match op {
    BinaryOp::Eq => equal(interp, &lhs, &rhs)?,
    BinaryOp::Neq => !equal(interp, &lhs, &rhs)?,
    BinaryOp::Less => less(interp, &lhs, &rhs)?,
    BinaryOp::More => !less(interp, &lhs, &rhs)? && !equal(interp, &lhs, &rhs)?,
    BinaryOp::LessEq => less(interp, &lhs, &rhs)? || equal(interp, &lhs, &rhs)?,
    BinaryOp::MoreEq => !less(interp, &lhs, &rhs)?,
    _ => unreachable!("not a comparison operator"),
  };
  Ok(Value::bool(result))
}

/// `None` equals only itself and is never an error to compare against.
/// An instance on the left dispatches to its `__eq__`, the result read
/// through truthiness.
pub(super) fn equal(interp: &mut Interp, lhs: &Value, rhs: &Value) -> Flow<bool> {
  match (lhs, rhs) {
    (Value::None, Value::None) => Ok(true),
    (Value::None, _) | (_, Value::None) => Ok(false),
    (Value::Int(lhs), Value::Int(rhs)) => Ok(lhs == rhs),
    (Value::Bool(lhs), Value::Bool(rhs)) => Ok(lhs == rhs),
    (Value::Str(lhs), Value::Str(rhs)) => Ok(lhs.as_str() == rhs.as_str()),
    (Value::Instance(instance), _) if instance.class().has_method("__eq__", 1) => {
      let instance = instance.clone();
      let result = interp.call_method(&instance, "__eq__", vec![rhs.clone()])?;
      Ok(truthiness(&result))
    }
    _ => Err(RuntimeError::new("Cannot compare objects for equality").into()),
  }
}

pub(super) fn less(interp: &mut Interp, lhs: &Value, rhs: &Value) -> Flow<bool> {
  match (lhs, rhs) {
    (Value::Int(lhs), Value::Int(rhs)) => Ok(lhs < rhs),
    (Value::Bool(lhs), Value::Bool(rhs)) => Ok(lhs < rhs),
    (Value::Str(lhs), Value::Str(rhs)) => Ok(lhs.as_str() < rhs.as_str()),
    (Value::Instance(instance), _) if instance.class().has_method("__lt__", 1) => {
      let instance = instance.clone();
      let result = interp.call_method(&instance, "__lt__", vec![rhs.clone()])?;
      Ok(truthiness(&result))
    }
    _ => Err(RuntimeError::new("Cannot compare objects for less").into()),
  }
}
