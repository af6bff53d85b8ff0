/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Home,
    Favorites,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Home => "HOME",
            ViewState::Favorites => "FAVOURITES",
        }
    }

    pub const fn all() -> &'static [ViewState] {
        &[ViewState::Home, ViewState::Favorites]
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
