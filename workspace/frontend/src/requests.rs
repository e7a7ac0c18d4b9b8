/// Identifies one issued request; only the latest one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter used to discard responses that were
/// overtaken by a newer request.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
