use log::debug;

/// Allows one schema fetch per transition from signed-out to signed-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGate {
    authenticated: bool,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest authentication state and reports whether a
    /// fetch should start now.
    pub fn observe(&mut self, authenticated: bool) -> bool {
        let should_fetch = authenticated && !self.authenticated;
        if authenticated != self.authenticated {
            debug!("Authentication changed to {}", authenticated);
        }
        self.authenticated = authenticated;
        should_fetch
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fetch_while_unauthenticated() {
        let mut gate = LoadGate::new();
        assert!(!gate.observe(false));
        assert!(!gate.observe(false));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_one_fetch_per_transition() {
        let mut gate = LoadGate::new();
        let fetches: usize = [false, true, true, true, false, false, true, true]
            .into_iter()
            .map(|authenticated| gate.observe(authenticated))
            .filter(|fetch| *fetch)
            .count();
        assert_eq!(fetches, 2);
        assert!(gate.is_authenticated());
    }
}
