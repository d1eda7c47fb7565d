use alloc::vec::Vec;

/// Identifies one bound scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

/// Per-instance listener bookkeeping.
///
/// The legacy helper kept a process-wide bind-handler map; each widget now
/// owns its registry, so destroying one instance cannot leak or clobber
/// another instance's bindings.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    next: u64,
    bound: Vec<ListenerToken>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self) -> ListenerToken {
        let token = ListenerToken(self.next);
        self.next = self.next.wrapping_add(1);
        self.bound.push(token);
        token
    }

    pub fn unbind(&mut self, token: ListenerToken) -> bool {
        let before = self.bound.len();
        self.bound.retain(|bound| *bound != token);
        before != self.bound.len()
    }

    pub fn is_bound(&self, token: ListenerToken) -> bool {
        self.bound.contains(&token)
    }

    pub fn active(&self) -> &[ListenerToken] {
        &self.bound
    }
}
