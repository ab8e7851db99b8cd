//! Stack-based screen navigation.
//!
//! [`NavigationController`] owns the back-stack and is the only thing that
//! mutates it. Every change is published to a single [`NavigationObserver`],
//! which in the application is the root router that swaps the displayed
//! screen.

use tracing::{debug, trace};

use super::screen::ScreenId;

/// Input to the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Push a screen on top of the stack.
    Push(ScreenId),
    /// Remove the top screen, unless it is the root.
    Pop,
}

/// Ordered back-stack. The last element is the visible screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    stack: Vec<ScreenId>,
}

impl NavigationState {
    /// Creates a stack holding only `root`.
    #[must_use]
    pub fn new(root: ScreenId) -> Self {
        Self { stack: vec![root] }
    }

    /// Applies an event. Returns whether the stack changed.
    pub fn apply(&mut self, event: NavigationEvent) -> bool {
        match event {
            NavigationEvent::Push(target) => {
                self.stack.push(target);
                true
            }
            NavigationEvent::Pop if self.stack.len() > 1 => {
                self.stack.pop();
                true
            }
            NavigationEvent::Pop => false,
        }
    }

    /// Returns the visible screen.
    #[must_use]
    pub fn top(&self) -> ScreenId {
        // never empty: constructed with a root and pop keeps it
        self.stack[self.stack.len() - 1]
    }

    /// Returns the stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the stack from root to top.
    #[must_use]
    pub fn history(&self) -> &[ScreenId] {
        &self.stack
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ScreenId::START)
    }
}

/// Receives the visible screen after every navigation change.
pub trait NavigationObserver {
    /// Called with the new top of the stack.
    fn on_navigate(&mut self, current: ScreenId);
}

/// Owns the back-stack and notifies its observer on every change.
pub struct NavigationController<O: NavigationObserver> {
    state: NavigationState,
    observer: O,
}

impl<O: NavigationObserver> NavigationController<O> {
    /// Creates a controller positioned on the start screen.
    ///
    /// The observer is notified once so it can show the start screen.
    pub fn new(mut observer: O) -> Self {
        let state = NavigationState::default();
        observer.on_navigate(state.top());
        Self { state, observer }
    }

    /// Pushes `target` and re-renders.
    pub fn navigate(&mut self, target: ScreenId) {
        self.dispatch(NavigationEvent::Push(target));
    }

    /// Pops the top screen. Staying on the root is a no-op.
    ///
    /// Returns whether the stack changed.
    pub fn go_back(&mut self) -> bool {
        self.dispatch(NavigationEvent::Pop)
    }

    /// Applies `event`, notifying the observer if the stack changed.
    pub fn dispatch(&mut self, event: NavigationEvent) -> bool {
        let from = self.state.top();
        if !self.state.apply(event) {
            trace!(?event, screen = %from, "Navigation event ignored at root");
            return false;
        }

        let to = self.state.top();
        debug!(?event, from = %from, to = %to, depth = self.state.depth(), "Navigated");
        self.observer.on_navigate(to);
        true
    }

    /// Returns the visible screen.
    #[must_use]
    pub fn current_screen(&self) -> ScreenId {
        self.state.top()
    }

    /// Returns the stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// Returns the stack from root to top.
    #[must_use]
    pub fn history(&self) -> &[ScreenId] {
        self.state.history()
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<ScreenId>,
    }

    impl NavigationObserver for Recorder {
        fn on_navigate(&mut self, current: ScreenId) {
            self.seen.push(current);
        }
    }

    fn controller() -> NavigationController<Recorder> {
        NavigationController::new(Recorder::default())
    }

    #[test]
    fn test_starts_on_welcome() {
        let nav = controller();
        assert_eq!(nav.current_screen(), ScreenId::Welcome);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.observer().seen, vec![ScreenId::Welcome]);
    }

    #[test]
    fn test_navigate_to_components_list() {
        let mut nav = controller();
        nav.navigate(ScreenId::ComponentsList);
        assert_eq!(nav.current_screen(), ScreenId::ComponentsList);
    }

    #[test]
    fn test_back_from_text_detail() {
        let mut nav = controller();
        nav.navigate(ScreenId::ComponentsList);
        nav.navigate(ScreenId::TextDetail);
        assert!(nav.go_back());
        assert_eq!(nav.current_screen(), ScreenId::ComponentsList);
        assert_eq!(
            nav.history(),
            &[ScreenId::Welcome, ScreenId::ComponentsList]
        );
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = controller();
        assert!(!nav.go_back());
        assert_eq!(nav.current_screen(), ScreenId::Welcome);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.observer().seen, vec![ScreenId::Welcome]);
    }

    #[test]
    fn test_back_undoes_navigate() {
        for start in ScreenId::ALL {
            for target in ScreenId::ALL {
                let mut nav = controller();
                nav.navigate(start);
                let before = nav.current_screen();
                nav.navigate(target);
                nav.go_back();
                assert_eq!(nav.current_screen(), before);
            }
        }
    }

    #[test]
    fn test_observer_sees_every_change() {
        let mut nav = controller();
        nav.navigate(ScreenId::ComponentsList);
        nav.navigate(ScreenId::TextDetail);
        nav.go_back();
        nav.go_back();
        nav.go_back();

        assert_eq!(
            nav.observer().seen,
            vec![
                ScreenId::Welcome,
                ScreenId::ComponentsList,
                ScreenId::TextDetail,
                ScreenId::ComponentsList,
                ScreenId::Welcome,
            ]
        );
    }

    #[test]
    fn test_depth_never_below_one() {
        let events = [
            NavigationEvent::Pop,
            NavigationEvent::Push(ScreenId::Welcome),
            NavigationEvent::Push(ScreenId::ComponentsList),
            NavigationEvent::Push(ScreenId::TextDetail),
        ];
        let len = 6;
        let total = events.len().pow(len);

        for mut seed in 0..total {
            let mut nav = controller();
            for _ in 0..len {
                let event = events[seed % events.len()];
                seed /= events.len();

                nav.dispatch(event);
                assert!(nav.depth() >= 1);
                assert_eq!(nav.observer().seen.last(), Some(&nav.current_screen()));
            }
        }
    }

    #[test]
    fn test_state_apply_reports_change() {
        let mut state = NavigationState::default();
        assert!(!state.apply(NavigationEvent::Pop));
        assert!(state.apply(NavigationEvent::Push(ScreenId::TextDetail)));
        assert_eq!(state.top(), ScreenId::TextDetail);
        assert!(state.apply(NavigationEvent::Pop));
        assert_eq!(state.top(), ScreenId::Welcome);
    }
}
