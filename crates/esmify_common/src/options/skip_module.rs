use crate::LeafModule;

pub trait SkipModule: Send + Sync {
  fn skip(&self, module_id: Option<&str>, module: &LeafModule) -> bool;
}

impl<F> SkipModule for F
where
  F: Fn(Option<&str>, &LeafModule) -> bool + Send + Sync,
{
  fn skip(&self, module_id: Option<&str>, module: &LeafModule) -> bool {
    self(module_id, module)
  }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NeverSkip;

impl SkipModule for NeverSkip {
  fn skip(&self, _module_id: Option<&str>, _module: &LeafModule) -> bool {
    false
  }
}
