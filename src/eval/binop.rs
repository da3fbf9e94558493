use super::{Flow, Interp};
use crate::error::RuntimeError;
use crate::syntax::ast::BinaryOp;
use crate::value::Value;

/// `+` is the one overloaded operator: numbers add, strings concatenate,
/// and an instance may provide a single-argument `__add__`.
pub(super) fn add(interp: &mut Interp, lhs: Value, rhs: Value) -> Flow<Value> {
  if let (Some(lhs), Some(rhs)) = (lhs.as_int(), rhs.as_int()) {
    return Ok(Value::int(lhs.wrapping_add(rhs)));
  }

  if let (Some(lhs), Some(rhs)) = (lhs.as_str(), rhs.as_str()) {
    return Ok(Value::str(format!("{lhs}{rhs}")));
  }

  if let Some(instance) = lhs.as_instance() {
    if instance.class().has_method("__add__", 1) {
      let instance = instance.clone();
      return interp.call_method(&instance, "__add__", vec![rhs]);
    }
  }

  Err(RuntimeError::new("No __add__ method").into())
}

/// `-`, `*` and `/` are defined on numbers only, in native wrapping
/// 32-bit arithmetic with round-toward-zero division.
pub(super) fn arith(op: BinaryOp, lhs: Value, rhs: Value) -> Flow<Value> {
  let (Some(lhs), Some(rhs)) = (lhs.as_int(), rhs.as_int()) else {
    let sym = match op {
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
      _ => unreachable!("not an arithmetic operator"),
    };
    return Err(RuntimeError::new(format!("operands of `{sym}` must be numbers")).into());
  };

  let value = match op {
    BinaryOp::Sub => lhs.wrapping_sub(rhs),
    BinaryOp::Mul => lhs.wrapping_mul(rhs),
    BinaryOp::Div => {
      if rhs == 0 {
        return Err(RuntimeError::new("Division by zero").into());
      }
      lhs.wrapping_div(rhs)
    }
    _ => unreachable!("not an arithmetic operator"),
  };
  Ok(Value::int(value))
}
