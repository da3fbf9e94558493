check! {
  point_sum,
  r#"
    class Point:
      def __init__(x, y):
        self.x = x
        self.y = y
      def sum():
        return self.x + self.y
    p = Point(3, 4)
    print p.sum()
  "#,
  r#"
    7
  "#
}

check! {
  class_prints_by_name,
  r#"
    class T:
      def nop():
        return None
    print T
  "#,
  r#"
    <class `T`>
  "#
}

check! {
  init_of_other_arity_is_skipped,
  r#"
    class T:
      def __init__(v):
        print "init", v
    t = T()
    print "made", t.nop()
  "#,
  r#"
    made None
  "#
}

check! {
  methods_call_each_other_through_self,
  r#"
    class Greeter:
      def name():
        return "world"
      def greet():
        return "hello " + self.name()
    print Greeter().greet()
  "#,
  r#"
    hello world
  "#
}

check! {
  str_dispatch,
  r#"
    class Point:
      def __init__(x, y):
        self.x = x
        self.y = y
      def __str__():
        return "(" + str(self.x) + ", " + str(self.y) + ")"
    p = Point(1, 2)
    print p
    print str(p)
  "#,
  r#"
    (1, 2)
    (1, 2)
  "#
}

check! {
  missing_method_call_is_silently_none,
  r#"
    class T:
      def nop():
        return None
    print T().missing()
    print T().nop(1, 2)
  "#,
  r#"
    None
    None
  "#
}

check! {
  method_call_on_non_instance_is_silently_none,
  r#"
    x = 5
    print x.wat()
  "#,
  r#"
    None
  "#
}

check! {
  constructor_returns_the_instance,
  r#"
    class Counter:
      def __init__():
        self.n = 0
      def touch():
        self.n = self.n + 1
        return self.n
    print Counter().touch()
  "#,
  r#"
    1
  "#
}

check! {
  classes_are_first_class_values,
  r#"
    class A:
      def tag():
        return "a"
    Alias = A
    print Alias().tag()
  "#,
  r#"
    a
  "#
}

check! {
  methods_construct_other_classes,
  r#"
    class Point:
      def __init__(x, y):
        self.x = x
        self.y = y
      def flipped():
        return Point(self.y, self.x)
    p = Point(1, 2).flipped()
    print p.x, p.y
  "#,
  r#"
    2 1
  "#
}
