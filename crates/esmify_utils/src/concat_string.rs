/// Concatenates string-like expressions into a `String` that is allocated once with the exact
/// capacity.
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {{
    let mut len = 0;
    $(len += AsRef::<str>::as_ref(&$s).len();)+
    let mut buf = String::with_capacity(len);
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let carrier = String::from("LIB");
  assert_eq!(concat_string!(), "");
  assert_eq!(concat_string!("export { ", carrier, " };"), "export { LIB };");
  assert_eq!(concat_string!(&carrier, "['default']"), "LIB['default']");
}
