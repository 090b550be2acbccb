/// Message routed to a named target by an external dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
  pub target: String,
  pub message: String,
}

impl Trigger {
  pub fn new(target: impl Into<String>, message: impl Into<String>) -> Self {
    Self { target: target.into(), message: message.into() }
  }
}

/// Something a dispatcher can address by name.
pub trait Triggerable {
  fn name(&self) -> &str;
  fn execute(&mut self, trigger: Trigger);
}
