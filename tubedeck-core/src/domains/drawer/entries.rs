//! Drawer entry list

use std::fmt;

/// Screen a drawer entry navigates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerDestination {
    Home,
    Trending,
    Search,
    Subscriptions,
    History,
    Library,
    MyYoutube,
    Login,
    Settings,
}

impl DrawerDestination {
    pub fn route_name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Trending => "Trending",
            Self::Search => "Search",
            Self::Subscriptions => "Subscriptions",
            Self::History => "History",
            Self::Library => "Library",
            Self::MyYoutube => "MyYoutube",
            Self::Login => "Login",
            Self::Settings => "Settings",
        }
    }

    /// True for destinations that need a logged in account
    pub fn requires_account(self) -> bool {
        matches!(
            self,
            Self::Subscriptions | Self::History | Self::Library | Self::MyYoutube
        )
    }
}

impl fmt::Display for DrawerDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Icon font an entry's glyph comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconFamily {
    #[default]
    Material,
    Ionicon,
    MaterialCommunity,
}

/// Vertical group an entry is laid out in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DrawerAnchor {
    Start,
    #[default]
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerEntry {
    pub destination: DrawerDestination,
    pub label: &'static str,
    pub icon: &'static str,
    pub icon_family: IconFamily,
    pub anchor: DrawerAnchor,
}

impl DrawerEntry {
    const fn new(
        destination: DrawerDestination,
        label: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            destination,
            label,
            icon,
            icon_family: IconFamily::Material,
            anchor: DrawerAnchor::Middle,
        }
    }

    const fn family(mut self, icon_family: IconFamily) -> Self {
        self.icon_family = icon_family;
        self
    }

    const fn anchor(mut self, anchor: DrawerAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

const HOME: DrawerEntry = DrawerEntry::new(DrawerDestination::Home, "Home", "home")
    .anchor(DrawerAnchor::Start);
const TRENDING: DrawerEntry =
    DrawerEntry::new(DrawerDestination::Trending, "Trending", "trending-up");
const SEARCH: DrawerEntry =
    DrawerEntry::new(DrawerDestination::Search, "Search", "search");

const ACCOUNT_ENTRIES: [DrawerEntry; 4] = [
    DrawerEntry::new(
        DrawerDestination::Subscriptions,
        "Subscriptions",
        "subscriptions",
    ),
    DrawerEntry::new(DrawerDestination::History, "History", "history"),
    DrawerEntry::new(DrawerDestination::Library, "Library", "library")
        .family(IconFamily::Ionicon),
    DrawerEntry::new(DrawerDestination::MyYoutube, "MyYoutube", "youtube-tv")
        .family(IconFamily::MaterialCommunity),
];

const LOGIN: DrawerEntry =
    DrawerEntry::new(DrawerDestination::Login, "Login", "login");
const SETTINGS: DrawerEntry =
    DrawerEntry::new(DrawerDestination::Settings, "Settings", "settings")
        .anchor(DrawerAnchor::Bottom);

/// Entries in display order for the current login state
pub fn drawer_entries(account_count: usize) -> Vec<DrawerEntry> {
    let mut entries = vec![HOME, TRENDING, SEARCH];
    if account_count > 0 {
        entries.extend(ACCOUNT_ENTRIES);
    } else {
        entries.push(LOGIN);
    }
    entries.push(SETTINGS);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destinations(entries: &[DrawerEntry]) -> Vec<DrawerDestination> {
        entries.iter().map(|entry| entry.destination).collect()
    }

    #[test]
    fn test_logged_out_entries() {
        use DrawerDestination::*;
        let entries = drawer_entries(0);
        assert_eq!(
            destinations(&entries),
            [Home, Trending, Search, Login, Settings]
        );
        assert!(!entries.iter().any(|e| e.destination.requires_account()));
    }

    #[test]
    fn test_logged_in_entries() {
        use DrawerDestination::*;
        let entries = drawer_entries(2);
        assert_eq!(
            destinations(&entries),
            [
                Home,
                Trending,
                Search,
                Subscriptions,
                History,
                Library,
                MyYoutube,
                Settings
            ]
        );
    }

    #[test]
    fn test_anchors_and_icon_families() {
        let entries = drawer_entries(1);
        assert_eq!(entries.first().map(|e| e.anchor), Some(DrawerAnchor::Start));
        assert_eq!(entries.last().map(|e| e.anchor), Some(DrawerAnchor::Bottom));

        let library = entries
            .iter()
            .find(|e| e.destination == DrawerDestination::Library)
            .unwrap();
        assert_eq!(library.icon_family, IconFamily::Ionicon);

        let my_youtube = entries
            .iter()
            .find(|e| e.destination == DrawerDestination::MyYoutube)
            .unwrap();
        assert_eq!(my_youtube.icon_family, IconFamily::MaterialCommunity);
        assert_eq!(my_youtube.icon, "youtube-tv");
        assert_eq!(my_youtube.label, "MyYoutube");
    }
}
