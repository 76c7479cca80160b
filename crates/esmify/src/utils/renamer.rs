use esmify_utils::{concat_string, ecmascript::legitimize_identifier_name};
use oxc::syntax::keyword::{GLOBAL_OBJECTS, RESERVED_KEYWORDS};
use rustc_hash::{FxHashMap, FxHashSet};

/// Hands out top-level identifiers for generated bindings that don't collide with each other,
/// with reserved words or globals, or with the names passed to [`Renamer::new`] (the carrier).
#[derive(Debug)]
pub struct Renamer {
  // Maps a base name to the last suffix tried for it (`a` -> 2 means `a$1` and `a$2` are taken).
  used_canonical_names: FxHashMap<String, u32>,
  used_names: FxHashSet<String>,
}

impl Renamer {
  pub fn new<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
    let mut used_names = reserved.into_iter().map(ToString::to_string).collect::<FxHashSet<_>>();
    used_names
      .extend(RESERVED_KEYWORDS.iter().chain(GLOBAL_OBJECTS.iter()).map(ToString::to_string));
    Self { used_canonical_names: FxHashMap::default(), used_names }
  }

  pub fn create_conflictless_name(&mut self, hint: &str) -> String {
    let base = legitimize_identifier_name(hint).into_owned();
    let mut count = self.used_canonical_names.get(&base).copied().unwrap_or(0);

    let mut candidate = base.clone();
    let mut buffer = itoa::Buffer::new();
    while self.used_names.contains(&candidate) {
      count += 1;
      candidate = concat_string!(base, "$", buffer.format(count));
    }

    self.used_canonical_names.insert(base, count);
    self.used_names.insert(candidate.clone());
    candidate
  }
}

#[test]
fn test_create_conflictless_name() {
  let mut renamer = Renamer::new(["LIB"]);
  assert_eq!(renamer.create_conflictless_name("_LIB$x"), "_LIB$x");
  assert_eq!(renamer.create_conflictless_name("_LIB$x"), "_LIB$x$1");
  assert_eq!(renamer.create_conflictless_name("_LIB$a-b"), "_LIB$a_b");
  assert_eq!(renamer.create_conflictless_name("_LIB$a_b"), "_LIB$a_b$1");
  assert_eq!(renamer.create_conflictless_name("LIB"), "LIB$1");
  assert_eq!(renamer.create_conflictless_name("class"), "class$1");
}
