check! {
  arithmetic_precedence,
  r#"
    print 2 * 3 + 4
    print 2 + 3 * 4
    print (2 + 3) * 4
    print 20 / 2 - 3
  "#,
  r#"
    10
    14
    20
    7
  "#
}

check! {
  string_concatenation,
  r#"
    print "hello" + " " + "world"
  "#,
  r#"
    hello world
  "#
}

check! {
  division_truncates_toward_zero,
  r#"
    print 7 / 2
    print (0 - 7) / 2
    print 26 / 3
  "#,
  r#"
    3
    -3
    8
  "#
}

check! {
  multiply_then_divide_round_trips,
  r#"
    a = 7
    b = 3
    c = 5
    print (a * b + c) / b
    print a + c / b
  "#,
  r#"
    8
    8
  "#
}

check! {
  arithmetic_wraps_at_32_bits,
  r#"
    print 2147483647 + 1
    print 0 - 2147483647 - 2
  "#,
  r#"
    -2147483648
    2147483647
  "#
}

check! {
  comparisons,
  r#"
    print 1 < 2, 2 < 1, 2 <= 2, 3 >= 4, 1 == 1, 1 != 1
    print "abc" < "abd", "b" > "a", "x" == "x"
    print False < True, True == True
  "#,
  r#"
    True False True False True False
    True True True
    True True
  "#
}

check! {
  none_equality_is_never_an_error,
  r#"
    class T:
      def nop():
        return None
    print None == None
    print None != None
    print None == 0
    print "" == None
    print T() == None
  "#,
  r#"
    True
    False
    False
    False
    False
  "#
}

check! {
  logic_operators,
  r#"
    print 1 and "x", 0 and 1, 1 or 0, 0 or 0, not 0, not "x"
  "#,
  r#"
    True False True False True False
  "#
}

check! {
  logic_operators_do_not_short_circuit,
  r#"
    class Probe:
      def __init__(tag):
        print "eval", tag
    x = Probe(1) and Probe(2)
    y = Probe(3) or Probe(4)
    print x, y
  "#,
  r#"
    eval 1
    eval 2
    eval 3
    eval 4
    False False
  "#
}

check! {
  add_dispatches_to_instances,
  r#"
    class Money:
      def __init__(amount):
        self.amount = amount
      def __add__(other):
        return Money(self.amount + other.amount)
    total = Money(3) + Money(4)
    print total.amount
  "#,
  r#"
    7
  "#
}

check! {
  eq_and_lt_dispatch_to_instances,
  r#"
    class Money:
      def __init__(amount):
        self.amount = amount
      def __eq__(other):
        return self.amount == other.amount
      def __lt__(other):
        return self.amount < other.amount
    a = Money(3)
    b = Money(4)
    print a == b, a != b
    print a < b, a > b
    print a <= b, a >= b
    print a <= Money(3), a >= Money(3)
  "#,
  r#"
    False True
    True False
    True False
    True True
  "#
}

check_error! {
  add_requires_matching_operands,
  r#"
    print "a" + 1
  "#,
  "No __add__ method"
}

check_error! {
  sub_requires_numbers,
  r#"
    print "a" - "b"
  "#,
  "operands of `-` must be numbers"
}

check_error! {
  division_by_zero,
  r#"
    print 10 / (5 - 5)
  "#,
  "Division by zero"
}

check_error! {
  incomparable_types,
  r#"
    print 1 < "x"
  "#,
  "Cannot compare objects for less"
}

check_error! {
  equality_needs_matching_types,
  r#"
    print 1 == "1"
  "#,
  "Cannot compare objects for equality"
}
