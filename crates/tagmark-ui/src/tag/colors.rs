use tagmark_engine::paint::Color;

/// Interaction flags a color can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableState {
    pub checked: bool,
    pub pressed: bool,
    pub focused: bool,
    pub enabled: bool,
}

impl Default for DrawableState {
    fn default() -> Self {
        Self { checked: false, pressed: false, focused: false, enabled: true }
    }
}

/// Maps the current [`DrawableState`] to a color.
pub trait ColorResolver {
    fn resolve(&self, state: DrawableState) -> Color;
}

/// A fixed color ignores state.
impl ColorResolver for Color {
    fn resolve(&self, _state: DrawableState) -> Color {
        *self
    }
}

/// Which states a [`ColorStateList`] entry applies to.
///
/// `None` means "don't care"; `Some(v)` requires the flag to equal `v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateSelector {
    pub checked: Option<bool>,
    pub pressed: Option<bool>,
    pub focused: Option<bool>,
    pub enabled: Option<bool>,
}

impl StateSelector {
    /// Matches every state.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn checked(mut self, v: bool) -> Self { self.checked = Some(v); self }
    pub fn pressed(mut self, v: bool) -> Self { self.pressed = Some(v); self }
    pub fn focused(mut self, v: bool) -> Self { self.focused = Some(v); self }
    pub fn enabled(mut self, v: bool) -> Self { self.enabled = Some(v); self }

    pub fn matches(&self, state: DrawableState) -> bool {
        fn ok(want: Option<bool>, have: bool) -> bool {
            want.is_none_or(|w| w == have)
        }
        ok(self.checked, state.checked)
            && ok(self.pressed, state.pressed)
            && ok(self.focused, state.focused)
            && ok(self.enabled, state.enabled)
    }
}

/// Ordered list of (selector, color) pairs; the first matching entry wins.
///
/// # Example
/// ```rust,ignore
/// ColorStateList::new(Color::from_rgb_hex(0x333333))
///     .with(StateSelector::any().pressed(true), Color::from_rgb_hex(0x888888))
///     .with(StateSelector::any().checked(true), Color::WHITE)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStateList {
    entries: Vec<(StateSelector, Color)>,
    default: Color,
}

impl ColorStateList {
    /// List whose only color is `default`, used when no entry matches.
    pub fn new(default: Color) -> Self {
        Self { entries: Vec::new(), default }
    }

    pub fn with(mut self, selector: StateSelector, color: Color) -> Self {
        self.entries.push((selector, color));
        self
    }
}

impl ColorResolver for ColorStateList {
    fn resolve(&self, state: DrawableState) -> Color {
        self.entries
            .iter()
            .find(|(sel, _)| sel.matches(state))
            .map_or(self.default, |&(_, color)| color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Color { Color::from_rgb_hex(0x808080) }
    fn blue() -> Color { Color::from_rgb_hex(0x2196f3) }

    fn list() -> ColorStateList {
        ColorStateList::new(Color::BLACK)
            .with(StateSelector::any().enabled(false), grey())
            .with(StateSelector::any().checked(true), Color::WHITE)
            .with(StateSelector::any().pressed(true), blue())
    }

    #[test]
    fn default_when_nothing_matches() {
        assert_eq!(list().resolve(DrawableState::default()), Color::BLACK);
    }

    #[test]
    fn first_matching_entry_wins() {
        let state = DrawableState { checked: true, pressed: true, ..DrawableState::default() };
        assert_eq!(list().resolve(state), Color::WHITE);

        let disabled = DrawableState { enabled: false, ..state };
        assert_eq!(list().resolve(disabled), grey());
    }

    #[test]
    fn selector_requires_every_set_flag() {
        let sel = StateSelector::any().checked(true).pressed(false);
        assert!(sel.matches(DrawableState { checked: true, ..DrawableState::default() }));
        assert!(!sel.matches(DrawableState { checked: true, pressed: true, ..DrawableState::default() }));
        assert!(!sel.matches(DrawableState::default()));
    }

    #[test]
    fn plain_color_ignores_state() {
        let state = DrawableState { pressed: true, ..DrawableState::default() };
        assert_eq!(blue().resolve(state), blue());
    }
}
