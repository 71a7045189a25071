//! Lifetime handles for view controllers.
//!
//! Every time a form or item controller is created it gets a fresh
//! [`MountToken`]. Requests carry the token of the controller that issued
//! them; when the response arrives it is only applied if a controller with
//! that exact token is still mounted.

/// Identity of one controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountToken(u64);

impl MountToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Hands out unique tokens for the lifetime of a session.
#[derive(Debug, Default)]
pub struct Mounts {
    next: u64,
}

impl Mounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> MountToken {
        self.next += 1;
        MountToken(self.next)
    }
}
