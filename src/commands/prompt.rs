//! User Prompt Seam
//!
//! Blocking interaction with the person driving the surface. The core
//! never renders dialogs itself; hosts plug in whatever their toolkit
//! provides.

/// Blocking dialogs of the hosting surface.
pub trait UserPrompt: Send + Sync {
    /// Yes/no confirmation; `false` aborts the action.
    fn confirm(&self, message: &str) -> bool;

    /// Blocking acknowledgment with no answer.
    fn alert(&self, message: &str);
}
