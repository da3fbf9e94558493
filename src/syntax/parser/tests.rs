use indoc::indoc;

use super::super::parse;
use crate::syntax::ast;

fn parse_error(src: &str) -> String {
  parse(src).expect_err("expected a parse error").to_string()
}

#[test]
fn assignment_forms() {
  let module = parse("x = 1 + 2").unwrap();
  assert_eq!(module.body.len(), 1);
  let ast::Stmt::Assign(assign) = &module.body[0] else {
    panic!("expected an assignment")
  };
  assert_eq!(assign.name, "x");

  let module = parse("a.b.c = p.q").unwrap();
  let ast::Stmt::SetField(set) = &module.body[0] else {
    panic!("expected a field assignment")
  };
  assert_eq!(set.object.path, ["a", "b"]);
  assert_eq!(set.field, "c");
  let ast::Expr::GetVar(value) = &set.value else {
    panic!("expected a name path value")
  };
  assert_eq!(value.path, ["p", "q"]);
}

#[test]
fn calls() {
  // A call on a bare name constructs, a call after a dot dispatches.
  let module = parse("print B().greet()").unwrap();
  let ast::Stmt::Print(print) = &module.body[0] else {
    panic!("expected print")
  };
  let ast::Expr::CallMethod(call) = &print.values[0] else {
    panic!("expected a method call")
  };
  assert_eq!(call.name, "greet");
  assert!(matches!(call.object, ast::Expr::New(_)));
}

#[test]
fn str_builtin_is_stringify() {
  let module = parse("s = str(x)").unwrap();
  let ast::Stmt::Assign(assign) = &module.body[0] else {
    panic!("expected an assignment")
  };
  assert!(matches!(assign.value, ast::Expr::Stringify(_)));
}

#[test]
fn single_line_suite() {
  let module = parse("if 1: print 2").unwrap();
  let ast::Stmt::If(branch) = &module.body[0] else {
    panic!("expected an if")
  };
  assert_eq!(branch.body.len(), 1);
  assert!(branch.else_body.is_none());
}

#[test]
fn class_with_parent_and_methods() {
  let module = parse(indoc! {"
    class B(A):
      def greet():
        return 1
      def farewell():
        return 2
  "})
  .unwrap();
  let ast::Stmt::Class(class) = &module.body[0] else {
    panic!("expected a class definition")
  };
  assert_eq!(class.name, "B");
  assert_eq!(class.parent.as_deref(), Some("A"));
  let names: Vec<_> = class.methods.iter().map(|m| m.name.as_str()).collect();
  assert_eq!(names, ["greet", "farewell"]);
}

#[test]
fn return_is_only_valid_in_methods() {
  assert!(parse_error("return 1").contains("return outside of a method"));
}

#[test]
fn invalid_assignment_target() {
  insta::assert_snapshot!(parse_error("1 = 2"), @"error at 2..3: invalid assignment target");
}

#[test]
fn class_bodies_hold_only_methods() {
  let e = parse_error(indoc! {"
    class C:
      x = 1
  "});
  assert!(e.contains("expected `def`"), "{e}");
}

#[test]
fn duplicate_names_are_rejected() {
  let e = parse_error(indoc! {"
    class C:
      def f():
        return 1
      def f():
        return 2
  "});
  assert!(e.contains("duplicate method `f`"), "{e}");

  let e = parse_error(indoc! {"
    class C:
      def f(a, a):
        return a
  "});
  assert!(e.contains("duplicate parameter `a`"), "{e}");
}

#[test]
fn field_reads_only_on_name_paths() {
  assert!(parse_error("x = f().y + 1").contains("invalid field access"));
}

#[test]
fn stray_tokens_are_errors() {
  assert!(parse_error("x = ").contains("unexpected"));
  assert!(parse_error("print 1 2").contains("unexpected"));
  assert!(parse_error("if x print 1").contains("expected `:`"));
}
