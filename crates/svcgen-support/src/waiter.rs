use std::time::{Duration, Instant};

use crate::error::ResourceError;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// A generated resource class.
pub trait Resource {
  const RESOURCE_TYPE: &'static str;

  /// Re-fetches the remote state and overwrites the local attributes.
  fn refresh(&mut self) -> Result<(), ResourceError>;
}

/// A resource that exposes a lifecycle status attribute.
pub trait StatusResource: Resource {
  fn current_status(&self) -> Option<&str>;
}

/// Polling parameters for [`wait_for_status`] and [`wait_until_terminal`].
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct WaitConfig {
  #[builder(default = DEFAULT_POLL_INTERVAL)]
  pub poll_interval: Duration,
  /// `None` waits indefinitely.
  pub timeout: Option<Duration>,
}

impl Default for WaitConfig {
  fn default() -> Self {
    Self {
      poll_interval: DEFAULT_POLL_INTERVAL,
      timeout: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitState {
  Polling,
  Reached,
  TimedOut,
}

/// The polling loop shared by every generated `wait` flavour.
///
/// Each round refreshes first, so a stale cached status never satisfies the
/// exit condition.
#[derive(Debug)]
pub struct Waiter<'a> {
  config: &'a WaitConfig,
  started: Instant,
  state: WaitState,
  polls: usize,
}

impl<'a> Waiter<'a> {
  #[must_use]
  pub fn new(config: &'a WaitConfig) -> Self {
    Self {
      config,
      started: Instant::now(),
      state: WaitState::Polling,
      polls: 0,
    }
  }

  #[must_use]
  pub const fn state(&self) -> &WaitState {
    &self.state
  }

  #[must_use]
  pub const fn polls(&self) -> usize {
    self.polls
  }

  /// Runs until `done` accepts the observed status or the timeout elapses.
  pub fn run<R, F>(mut self, resource: &mut R, done: F) -> Result<(), ResourceError>
  where
    R: StatusResource,
    F: Fn(&str) -> bool,
  {
    loop {
      resource.refresh()?;
      self.polls += 1;
      let status = resource.current_status().unwrap_or_default();
      self.state = self.transition(done(status));

      match self.state {
        WaitState::Reached => {
          tracing::debug!(resource_type = R::RESOURCE_TYPE, status, polls = self.polls, "wait finished");
          return Ok(());
        }
        WaitState::TimedOut => {
          tracing::warn!(resource_type = R::RESOURCE_TYPE, status, polls = self.polls, "wait timed out");
          return Err(ResourceError::Timeout {
            resource_type: R::RESOURCE_TYPE.to_string(),
            status: status.to_string(),
          });
        }
        WaitState::Polling => {
          tracing::debug!(resource_type = R::RESOURCE_TYPE, status, "still waiting");
          std::thread::sleep(self.config.poll_interval);
        }
      }
    }
  }

  fn transition(&self, satisfied: bool) -> WaitState {
    if satisfied {
      return WaitState::Reached;
    }
    match self.config.timeout {
      Some(timeout) if self.started.elapsed() >= timeout => WaitState::TimedOut,
      _ => WaitState::Polling,
    }
  }
}

/// Polls until the resource reports exactly `target`.
pub fn wait_for_status<R: StatusResource>(
  resource: &mut R,
  target: &str,
  config: &WaitConfig,
) -> Result<(), ResourceError> {
  Waiter::new(config).run(resource, |status| status == target)
}

/// Polls until the resource reports any of `terminal_states`.
pub fn wait_until_terminal<R: StatusResource>(
  resource: &mut R,
  terminal_states: &[&str],
  config: &WaitConfig,
) -> Result<(), ResourceError> {
  Waiter::new(config).run(resource, |status| terminal_states.contains(&status))
}
