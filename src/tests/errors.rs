check_error! {
  undefined_variable,
  r#"
    print missing
  "#,
  "undefined variable `missing`"
}

check_error! {
  undefined_variable_in_method,
  r#"
    class T:
      def f():
        return missing
    print T().f()
  "#,
  "undefined variable `missing`"
}

check_error! {
  undefined_field,
  r#"
    class T:
      def __init__():
        self.x = 1
    print T().y
  "#,
  "undefined field `y`"
}

check_error! {
  field_read_on_non_instance,
  r#"
    x = 5
    print x.y
  "#,
  "cannot read field `y` of a number"
}

check_error! {
  field_assignment_on_non_instance,
  r#"
    x = "s"
    x.y = 1
  "#,
  "cannot assign field `y` of a string"
}

check_error! {
  constructing_a_non_class,
  r#"
    x = 1
    y = x()
  "#,
  "`x` is not a class"
}

// The failing statement aborts the program, but everything printed
// before it has already reached the sink.
check_error! {
  output_before_the_failure_is_kept,
  r#"
    print "first"
    print 1 / 0
    print "never"
  "#,
  "Division by zero",
  "first\n"
}

check_error! {
  errors_cross_method_boundaries,
  r#"
    class T:
      def boom():
        return 1 / 0
      def wrap():
        return self.boom()
    print T().wrap()
  "#,
  "Division by zero"
}

// A bad indent is a lexer error: it surfaces before a single statement
// runs, so nothing is printed at all.
check_error! {
  bad_indent_before_any_output,
  "print \"visible\"\nif 1:\n   print \"broken\"\n",
  "Bad indent"
}
