use super::{Closure, Flow, Interp, Scope, Unwind};
use crate::error::RuntimeError;
use crate::value::object::{Instance, Ptr};
use crate::value::Value;

impl Interp {
  /// Call a method on an instance. This is the method-body boundary: a
  /// `return` anywhere inside becomes the call's result here, normal
  /// completion yields `None`, and errors pass through untouched.
  ///
  /// The callee runs in a fresh closure holding `self` and its
  /// positionally-bound parameters; the caller's locals are not visible.
  pub(crate) fn call_method(
    &mut self,
    instance: &Ptr<Instance>,
    name: &str,
    args: Vec<Value>,
  ) -> Flow<Value> {
    self.check_recursion_limit()?;

    let class = instance.class();
    let Some(method) = class.method(name) else {
      return Err(
        RuntimeError::new(format!("`{}` has no method `{name}`", class.name)).into(),
      );
    };
    let method = method.clone();
    if method.params.len() != args.len() {
      return Err(
        RuntimeError::new(format!(
          "`{}.{name}` expects {} arguments, got {}",
          class.name,
          method.params.len(),
          args.len()
        ))
        .into(),
      );
    }

    let mut closure = Closure::with_capacity(args.len() + 1);
    closure.insert("self".to_owned(), Value::Instance(instance.clone()));
    for (param, arg) in method.params.iter().zip(args) {
      closure.insert(param.clone(), arg);
    }

    match self.execute_block(&method.body, &mut Scope::Method(&mut closure)) {
      Ok(()) => Ok(Value::none()),
      Err(Unwind::Return(value)) => Ok(value),
      Err(error @ Unwind::Error(_)) => Err(error),
    }
  }

  // Mython method calls recurse through the host stack, so deep call
  // chains are cut off before they can overflow it.
  const MINIMUM_STACK_REQUIRED: usize = 64_000;

  #[cfg(any(target_family = "wasm", not(feature = "check-recursion-limit")))]
  fn check_recursion_limit(&self) -> Flow<()> {
    Ok(())
  }

  #[cfg(all(not(target_family = "wasm"), feature = "check-recursion-limit"))]
  fn check_recursion_limit(&self) -> Flow<()> {
    if stacker::remaining_stack()
      .map(|available| available > Self::MINIMUM_STACK_REQUIRED)
      .unwrap_or(true)
    {
      Ok(())
    } else {
      Err(RuntimeError::new("recursion limit reached").into())
    }
  }
}
