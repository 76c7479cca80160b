use super::source::Source;

/// Concatenates generated text around existing asset content. Sources are joined verbatim; the
/// original content stays one contiguous block.
#[derive(Default)]
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + Send + 'source>>,
  prepend_source: Vec<Box<dyn Source + Send + 'source>>,
}

impl<'source> SourceJoiner<'source> {
  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn prepend_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.prepend_source.push(Box::new(source));
  }

  pub fn join(&self) -> String {
    let sources = self.prepend_source.iter().chain(self.inner.iter());
    let mut ret_source =
      String::with_capacity(sources.clone().map(|source| source.content().len()).sum());
    for source in sources {
      ret_source.push_str(source.content());
    }
    ret_source
  }
}

#[test]
fn test_join_keeps_content_verbatim() {
  let original = String::from("var LIB = 1");
  let mut joiner = SourceJoiner::default();
  joiner.append_source(&original);
  joiner.append_source("\n\nexport default LIB;\n");
  joiner.prepend_source("import * as ns from 'dep';\n");
  assert_eq!(joiner.join(), "import * as ns from 'dep';\nvar LIB = 1\n\nexport default LIB;\n");
}
