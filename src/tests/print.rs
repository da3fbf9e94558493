check! {
  separators_and_newline,
  r#"
    print 1, 2, 3
    print
    print "done"
  "#,
  r#"
    1 2 3

    done
  "#
}

check! {
  literal_forms,
  r#"
    print None, True, False, 0, 1000000, "text"
  "#,
  r#"
    None True False 0 1000000 text
  "#
}

check! {
  decoded_escapes_are_printed_raw,
  r#"
    print "a\tb"
    print "two\nlines"
    print "quote \" and 'apostrophe'"
  "#,
  "a\tb\ntwo\nlines\nquote \" and 'apostrophe'\n"
}

check! {
  str_matches_print,
  r#"
    class Point:
      def __init__(x, y):
        self.x = x
        self.y = y
      def __str__():
        return str(self.x) + "/" + str(self.y)
    print str(1), str(None), str(True), str("s")
    print str(Point(8, 9))
    print Point(8, 9)
  "#,
  r#"
    1 None True s
    8/9
    8/9
  "#
}

check! {
  stringify_produces_a_real_string,
  r#"
    s = str(12) + str(34)
    print s + "!"
  "#,
  r#"
    1234!
  "#
}

// Each argument is written out before the next one is evaluated, so
// anything the later arguments print lands in the middle of the line.
check! {
  print_writes_each_argument_before_evaluating_the_next,
  r#"
    class Probe:
      def __init__(tag):
        print "new", tag
      def tag():
        return "probe"
    print Probe(1).tag(), Probe(2).tag()
  "#,
  r#"
    new 1
    probe new 2
    probe
  "#
}
