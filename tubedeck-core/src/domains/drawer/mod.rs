//! Navigation drawer domain
//!
//! The entry list follows login state; geometry follows the drawer state and
//! the injected [`StyleContext`].

pub mod entries;
pub mod layout;

pub use entries::{
    DrawerAnchor, DrawerDestination, DrawerEntry, IconFamily, drawer_entries,
};
pub use layout::{DrawerItemStyle, DrawerLayout, DrawerState};

use tracing::debug;

use crate::design_tokens::StyleContext;

/// Messages for the drawer domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerMessage {
    SetState(DrawerState),
    Focus(usize),
    Blur,
    Activate(usize),
    /// Login state changed; rebuild the entry list
    AccountsChanged(usize),
}

impl DrawerMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetState(_) => "Drawer::SetState",
            Self::Focus(_) => "Drawer::Focus",
            Self::Blur => "Drawer::Blur",
            Self::Activate(_) => "Drawer::Activate",
            Self::AccountsChanged(_) => "Drawer::AccountsChanged",
        }
    }
}

/// Drawer entries plus the state they are rendered in
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerModel {
    pub state: DrawerState,
    entries: Vec<DrawerEntry>,
    focused: Option<usize>,
}

impl DrawerModel {
    pub fn new(account_count: usize) -> Self {
        Self {
            state: DrawerState::default(),
            entries: drawer_entries(account_count),
            focused: None,
        }
    }

    pub fn entries(&self) -> &[DrawerEntry] {
        &self.entries
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Returns the destination to navigate to, if the message activated one
    pub fn update(&mut self, message: DrawerMessage) -> Option<DrawerDestination> {
        debug!("{}", message.name());
        match message {
            DrawerMessage::SetState(state) => {
                self.state = state;
                if state == DrawerState::Hidden {
                    self.focused = None;
                }
                None
            }
            DrawerMessage::Focus(index) => {
                self.focused = (index < self.entries.len()).then_some(index);
                None
            }
            DrawerMessage::Blur => {
                self.focused = None;
                None
            }
            DrawerMessage::Activate(index) => {
                self.entries.get(index).map(|entry| entry.destination)
            }
            DrawerMessage::AccountsChanged(count) => {
                let focused_destination = self
                    .focused
                    .and_then(|i| self.entries.get(i))
                    .map(|entry| entry.destination);
                self.entries = drawer_entries(count);
                self.focused = focused_destination.and_then(|destination| {
                    self.entries
                        .iter()
                        .position(|entry| entry.destination == destination)
                });
                None
            }
        }
    }

    pub fn layout(&self, context: &StyleContext) -> DrawerLayout {
        DrawerLayout::compute(self.state, context)
    }

    pub fn item_style(
        &self,
        index: usize,
        context: &StyleContext,
    ) -> DrawerItemStyle {
        DrawerItemStyle::compute(self.focused == Some(index), context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubedeck_model::DeviceClass;

    #[test]
    fn test_activate_returns_destination() {
        let mut model = DrawerModel::new(0);
        assert_eq!(
            model.update(DrawerMessage::Activate(3)),
            Some(DrawerDestination::Login)
        );
        assert_eq!(model.update(DrawerMessage::Activate(99)), None);
    }

    #[test]
    fn test_focus_out_of_range_clears() {
        let mut model = DrawerModel::new(0);
        model.update(DrawerMessage::Focus(1));
        assert_eq!(model.focused(), Some(1));
        model.update(DrawerMessage::Focus(42));
        assert_eq!(model.focused(), None);
    }

    #[test]
    fn test_login_keeps_focus_on_same_destination() {
        let mut model = DrawerModel::new(0);
        model.update(DrawerMessage::Focus(4)); // Settings
        model.update(DrawerMessage::AccountsChanged(1));
        assert_eq!(model.entries().len(), 8);
        assert_eq!(model.focused(), Some(7));

        model.update(DrawerMessage::Focus(3)); // Subscriptions
        model.update(DrawerMessage::AccountsChanged(0));
        assert_eq!(model.focused(), None);
    }

    #[test]
    fn test_hiding_drops_focus() {
        let mut model = DrawerModel::new(1);
        model.update(DrawerMessage::Focus(0));
        model.update(DrawerMessage::SetState(DrawerState::Hidden));
        assert_eq!(model.focused(), None);
        let tv = StyleContext::builtin(DeviceClass::Tv);
        assert_eq!(model.layout(&tv).width, 0.0);
        assert!(model.item_style(0, &tv).highlight.is_none());
    }
}
