//! Interactive terminal rendition of the Home and Favorites screens.

use std::fmt;

use anyhow::Result;
use cityweather_core::{AddOutcome, AppState, Storage, ViewState, WeatherProvider};
use inquire::{InquireError, Select, Text};
use tracing::{debug, warn};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeAction {
    Search,
    AddToFavorites,
    GoTo(ViewState),
    Quit,
}

impl fmt::Display for HomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeAction::Search => f.write_str("Search for a city"),
            HomeAction::AddToFavorites => f.write_str("Add to Favorites"),
            HomeAction::GoTo(view) => write!(f, "Go to {view}"),
            HomeAction::Quit => f.write_str("Quit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    ViewDetails,
    Remove,
    Back,
}

impl fmt::Display for DetailAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DetailAction::ViewDetails => "View Details",
            DetailAction::Remove => "Remove",
            DetailAction::Back => "Back",
        })
    }
}

/// Entries on the Favorites screen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FavoritesChoice {
    City(String),
    GoTo(ViewState),
}

impl fmt::Display for FavoritesChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoritesChoice::City(city) => f.write_str(city),
            FavoritesChoice::GoTo(view) => write!(f, "Back to {view}"),
        }
    }
}

/// Run until the user quits.
pub async fn run(provider: &dyn WeatherProvider, storage: &mut dyn Storage) -> Result<()> {
    let mut app = AppState::load(&*storage);
    debug!(count = app.favorites.len(), "loaded favorites");

    loop {
        let keep_going = match app.view {
            ViewState::Home => home(&mut app, provider, storage).await?,
            ViewState::Favorites => favorites(&mut app, storage)?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn home_actions(app: &AppState) -> Vec<HomeAction> {
    let mut actions = vec![HomeAction::Search];
    if app.current.is_some() {
        actions.push(HomeAction::AddToFavorites);
    }
    actions.extend(other_views(ViewState::Home).map(HomeAction::GoTo));
    actions.push(HomeAction::Quit);
    actions
}

fn favorites_choices(app: &AppState) -> Vec<FavoritesChoice> {
    app.favorites
        .iter()
        .map(|r| FavoritesChoice::City(r.city.clone()))
        .chain(other_views(ViewState::Favorites).map(FavoritesChoice::GoTo))
        .collect()
}

fn other_views(current: ViewState) -> impl Iterator<Item = ViewState> {
    ViewState::all().iter().copied().filter(move |v| *v != current)
}

/// Write favorites after a change. A failed write is reported and the
/// session carries on with the in-memory list.
fn persist(app: &AppState, storage: &mut dyn Storage) -> bool {
    match app.save_favorites(storage) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "failed to save favorites");
            eprintln!("Error: {err}");
            false
        }
    }
}

fn bookmark_current(app: &mut AppState, storage: &mut dyn Storage) -> AddOutcome {
    let outcome = app.add_to_favorites();
    if outcome.changed() {
        persist(app, storage);
    }
    outcome
}

fn remove_city(app: &mut AppState, storage: &mut dyn Storage, city: &str) -> bool {
    let removed = app.remove_favorite(city);
    if removed {
        persist(app, storage);
    }
    removed
}

async fn home(
    app: &mut AppState,
    provider: &dyn WeatherProvider,
    storage: &mut dyn Storage,
) -> Result<bool> {
    println!("\n== {} ==", ViewState::Home);
    if let Some(record) = &app.current {
        print!("{}", render::record_card(record));
    }

    let Some(action) = cancellable(Select::new("What next?", home_actions(app)).prompt())? else {
        return Ok(false);
    };

    match action {
        HomeAction::Search => {
            let input = cancellable(
                Text::new("Which city are you looking for?")
                    .with_initial_value(&app.query)
                    .prompt(),
            )?;
            let Some(input) = input else {
                return Ok(true);
            };

            app.query = input;
            let query = app.query.clone();
            if let Err(err) = app.search_weather(provider, &query).await {
                eprintln!("Error: {err}");
            }
        }
        HomeAction::AddToFavorites => {
            let outcome = bookmark_current(app, storage);
            println!("{}", outcome.message());
        }
        HomeAction::GoTo(view) => app.navigate(view),
        HomeAction::Quit => return Ok(false),
    }

    Ok(true)
}

fn favorites(app: &mut AppState, storage: &mut dyn Storage) -> Result<bool> {
    println!("\n== {} ==", ViewState::Favorites);
    print!("{}", render::favorites_table(&app.favorites));

    let choice = cancellable(Select::new("Pick a city", favorites_choices(app)).prompt())?;
    let choice = match choice {
        Some(FavoritesChoice::City(city)) => city,
        Some(FavoritesChoice::GoTo(view)) => {
            app.navigate(view);
            return Ok(true);
        }
        None => {
            app.navigate(ViewState::Home);
            return Ok(true);
        }
    };

    let actions = vec![DetailAction::ViewDetails, DetailAction::Remove, DetailAction::Back];
    let action = cancellable(Select::new(&choice, actions).prompt())?;

    match action {
        Some(DetailAction::ViewDetails) => {
            if let Some(record) = app.favorites.get(&choice).cloned() {
                app.load_detail(record);
            }
        }
        Some(DetailAction::Remove) => {
            if remove_city(app, storage, &choice) {
                println!("{choice} removed from favorites.");
            }
        }
        Some(DetailAction::Back) | None => {}
    }

    Ok(true)
}

/// Treat Esc as "no answer"; Ctrl-C and real I/O failures still propagate.
fn cancellable<T>(res: Result<T, InquireError>) -> Result<Option<T>> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
