use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use parking_lot::Mutex;
use tokio::runtime::Handle;

use cinebrowse::config::Config;
use cinebrowse::logging::init_tracing;
use cinebrowse::movies::{MovieId, MovieSummary};
use cinebrowse::mvi::ActionHandler;
use cinebrowse::network::{MovieApi, NetworkError, TmdbClient};
use cinebrowse::screens::movie_detail::{
    MovieDetailAction, MovieDetailConfiguration, MovieDetailHandler, MovieDetailState,
};
use cinebrowse::screens::movie_list::{
    MovieListAction, MovieListConfiguration, MovieListHandler, MovieListState,
};
use cinebrowse::storage::{FavoriteStorage, FileSlotStore};

#[derive(Parser)]
#[command(name = "cinebrowse", version, about = "Browse popular and top rated movies")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Currently popular movies
    Popular,
    /// Highest rated movies
    TopRated,
    /// One movie in detail
    Detail {
        id: MovieId,
        /// Also show reviews
        #[arg(long)]
        reviews: bool,
    },
    /// Manage the local favorites list
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    List,
    Add { id: MovieId },
    Remove { id: MovieId },
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let slot = Arc::new(FileSlotStore::new(config.storage.resolved_dir())?);
    let favorites = FavoriteStorage::new(slot);

    let ok = match cli.command {
        Command::Popular => {
            let api = build_api(&config)?;
            show_chart(api, favorites, Chart::Popular).await
        }
        Command::TopRated => {
            let api = build_api(&config)?;
            show_chart(api, favorites, Chart::TopRated).await
        }
        Command::Detail { id, reviews } => {
            let api = build_api(&config)?;
            show_detail(api, favorites, id, reviews).await
        }
        Command::Favorites { command } => match command {
            FavoritesCommand::List => {
                list_favorites(&favorites);
                true
            }
            FavoritesCommand::Add { id } => {
                let api = build_api(&config)?;
                add_favorite(api, favorites, id).await
            }
            FavoritesCommand::Remove { id } => {
                if !favorites.remove_movie(id)? {
                    println!("{id} is not a favorite");
                }
                true
            }
            FavoritesCommand::Clear => {
                favorites.remove()?;
                true
            }
        },
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn build_api(config: &Config) -> Result<Arc<dyn MovieApi>, NetworkError> {
    Ok(Arc::new(TmdbClient::new(&config.api)?))
}

fn list_error(state: &MovieListState) -> Option<&NetworkError> {
    state.error.as_ref()
}

fn detail_error(state: &MovieDetailState) -> Option<&NetworkError> {
    state.error.as_ref()
}

/// Observer that prints each new error once.
fn error_reporter<S: 'static>(
    error_of: fn(&S) -> Option<&NetworkError>,
) -> impl Fn(&S) + Send + Sync + 'static {
    let last: Mutex<Option<NetworkError>> = Mutex::new(None);
    move |state: &S| {
        let current = error_of(state).cloned();
        let mut last = last.lock();
        if current != *last {
            if let Some(err) = &current {
                eprintln!("error: {err}");
            }
            *last = current;
        }
    }
}

/// Remote movie lists shown by the list screen.
#[derive(Clone, Copy)]
enum Chart {
    Popular,
    TopRated,
}

impl Chart {
    fn action(self) -> MovieListAction {
        match self {
            Chart::Popular => MovieListAction::FetchPopularMovies,
            Chart::TopRated => MovieListAction::FetchTopRatedMovies,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Chart::Popular => "Popular",
            Chart::TopRated => "Top rated",
        }
    }

    fn movies(self, state: &MovieListState) -> Option<&[MovieSummary]> {
        match self {
            Chart::Popular => state.popular_list.as_deref(),
            Chart::TopRated => state.top_rated_list.as_deref(),
        }
    }
}

async fn show_chart(api: Arc<dyn MovieApi>, favorites: FavoriteStorage, chart: Chart) -> bool {
    let handler =
        MovieListHandler::new(MovieListConfiguration { api, favorites }, Handle::current());
    let _errors = handler
        .store()
        .subscribe(error_reporter(list_error));

    handler.handle(chart.action());
    handler.settle().await;

    let state = handler.current_state();
    if let Some(movies) = chart.movies(&state) {
        print_movies(chart.title(), movies);
    }

    state.error.is_none()
}

async fn show_detail(
    api: Arc<dyn MovieApi>,
    favorites: FavoriteStorage,
    id: MovieId,
    reviews: bool,
) -> bool {
    let handler = MovieDetailHandler::new(
        MovieDetailConfiguration {
            movie_id: id,
            api,
            favorites,
        },
        Handle::current(),
    );
    let _errors = handler
        .store()
        .subscribe(error_reporter(detail_error));

    handler.handle(MovieDetailAction::FetchDetail);
    if reviews {
        handler.handle(MovieDetailAction::FetchReviews);
    }
    handler.settle().await;

    let state = handler.current_state();
    print_detail(&state, reviews);

    state.error.is_none()
}

async fn add_favorite(api: Arc<dyn MovieApi>, favorites: FavoriteStorage, id: MovieId) -> bool {
    let handler = MovieDetailHandler::new(
        MovieDetailConfiguration {
            movie_id: id,
            api,
            favorites,
        },
        Handle::current(),
    );
    let _errors = handler
        .store()
        .subscribe(error_reporter(detail_error));

    handler.handle(MovieDetailAction::FetchDetail);
    handler.settle().await;

    let state = handler.current_state();
    let Some(movie) = &state.movie else {
        return false;
    };
    if state.is_favorite {
        println!("{} is already a favorite", movie.title);
        return true;
    }

    handler.handle(MovieDetailAction::ToggleFavorite);
    handler.settle().await;
    let added = handler.current_state().is_favorite;
    if added {
        println!("Added {}", movie.title);
    }
    added
}

/// Print stored favorites. Local only: no API client is built.
fn list_favorites(favorites: &FavoriteStorage) -> usize {
    match favorites.get_object() {
        Some(movies) => {
            print_movies("Favorites", &movies);
            movies.len()
        }
        None => {
            println!("Favorites: nothing stored");
            0
        }
    }
}

fn print_movies(title: &str, movies: &[MovieSummary]) {
    println!("{title} ({})", movies.len());
    for movie in movies {
        println!(
            "{:>8}  {:<48}  {:>4.1}  {}",
            movie.id,
            movie.title,
            movie.vote_average,
            movie.release_date.as_deref().unwrap_or("-")
        );
    }
}

fn print_detail(state: &MovieDetailState, reviews: bool) {
    if let Some(movie) = &state.movie {
        let marker = if state.is_favorite { " ★" } else { "" };
        println!("{}{}", movie.title, marker);
        if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
            println!("{tagline}");
        }
        println!("Popularity: {:.2}%", movie.popularity_percent());
        println!();
        println!("{}", movie.overview);
    }

    if reviews {
        if let Some(list) = &state.review_list {
            println!();
            println!("Reviews ({})", list.len());
            for review in list {
                println!("— {}", review.author);
                println!("{}", review.content);
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinebrowse::storage::MemorySlotStore;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_detail_with_reviews() {
        let cli = Cli::try_parse_from(["cinebrowse", "detail", "550", "--reviews"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Detail {
                id: 550,
                reviews: true
            }
        ));
    }

    #[test]
    fn list_favorites_reads_storage_without_api_config() {
        let favorites = FavoriteStorage::new(Arc::new(MemorySlotStore::new()));
        assert_eq!(list_favorites(&favorites), 0);

        favorites.add(MovieSummary::new(1, "A")).unwrap();
        favorites.add(MovieSummary::new(2, "B")).unwrap();
        assert_eq!(list_favorites(&favorites), 2);
    }

    #[test]
    fn parses_favorites_add_with_global_config() {
        let cli =
            Cli::try_parse_from(["cinebrowse", "favorites", "add", "7", "--config", "/tmp/c.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(
            cli.command,
            Command::Favorites {
                command: FavoritesCommand::Add { id: 7 }
            }
        ));
    }
}
