// SPDX-License-Identifier: MPL-2.0
//! Fullscreen host port definition.
//!
//! Fullscreen is owned by whatever windowing context hosts the surface;
//! the engine only asks for transitions and needs to know the current
//! state so a reset can drop back out of fullscreen.

/// Port for the host's fullscreen control.
pub trait FullscreenHost {
    /// Flips fullscreen and returns the new state (`true` = fullscreen).
    fn toggle(&mut self) -> bool;

    /// Whether the host is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Leaves fullscreen if engaged, otherwise does nothing.
    fn exit(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn FullscreenHost) {}

    struct MockHost {
        fullscreen: bool,
    }

    impl FullscreenHost for MockHost {
        fn toggle(&mut self) -> bool {
            self.fullscreen = !self.fullscreen;
            self.fullscreen
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }

        fn exit(&mut self) {
            self.fullscreen = false;
        }
    }

    #[test]
    fn toggle_flips_and_reports_the_new_state() {
        let mut host = MockHost { fullscreen: false };
        assert!(host.toggle());
        assert!(host.is_fullscreen());
        assert!(!host.toggle());
        assert!(!host.is_fullscreen());
    }

    #[test]
    fn exit_is_idempotent() {
        let mut host = MockHost { fullscreen: true };
        host.exit();
        assert!(!host.is_fullscreen());
        host.exit();
        assert!(!host.is_fullscreen());
    }
}
