/// Run a Mython program against a capture buffer and compare everything
/// it printed against the expected text.
macro_rules! check {
  ($name:ident, $input:literal, $expected:literal) => {
    #[test]
    fn $name() {
      let input = indoc::indoc!($input);
      let expected = indoc::indoc!($expected);
      let vm = $crate::Mython::builder().with_io(Vec::<u8>::new()).build();
      match vm.eval(input) {
        Ok(_) => {
          let stdout = vm.io::<Vec<u8>>().unwrap();
          let stdout = std::str::from_utf8(&stdout[..]).unwrap();
          assert_eq!(stdout, expected, "\n# Program:\n{input}");
        }
        Err(e) => {
          panic!("eval error: {e}\n# Program:\n{input}")
        }
      }
    }
  };
}

/// Run a Mython program that must fail, asserting on the error message
/// and on the output produced before the failure.
macro_rules! check_error {
  ($name:ident, $input:literal, $message:literal) => {
    check_error!($name, $input, $message, "");
  };
  ($name:ident, $input:literal, $message:literal, $stdout:literal) => {
    #[test]
    fn $name() {
      let input = indoc::indoc!($input);
      let vm = $crate::Mython::builder().with_io(Vec::<u8>::new()).build();
      match vm.eval(input) {
        Ok(_) => {
          let stdout = vm.io::<Vec<u8>>().unwrap();
          let stdout = std::str::from_utf8(&stdout[..]).unwrap();
          panic!("unexpected success, stdout=`{stdout:?}`\n# Program:\n{input}")
        }
        Err(e) => {
          let message = e.to_string();
          assert!(
            message.contains($message),
            "error `{message}` does not mention `{}`\n# Program:\n{input}",
            $message
          );
          let stdout = vm.io::<Vec<u8>>().unwrap();
          let stdout = std::str::from_utf8(&stdout[..]).unwrap();
          assert_eq!(stdout, $stdout, "\n# Program:\n{input}");
        }
      }
    }
  };
}
