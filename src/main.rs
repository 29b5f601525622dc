use std::path::{Path, PathBuf};

use asset_router::config::ConfigError;
use asset_router::credential::StorageError;
use asset_router::{
    FileCredentials, NavigationError, NavigationGuard, NavigationIntent, Navigator, Outcome, RouteError,
    RouteTable, RouterConfig,
};
use clap::{Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("route list serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "asset-router", about = "Route table and navigation guard for the asset admin console")]
struct Cli {
    /// JSON/YAML route file to use instead of the built-in table.
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    /// Token store file (JSON object standing in for localStorage).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the route table.
    Routes {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the guard outcome for a single navigation step.
    Check {
        path: String,
        #[arg(long)]
        from: Option<String>,
    },
    /// Navigate through one or more paths, following redirects.
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Load and validate a route file.
    Validate { file: PathBuf },
    /// Store a credential token, as the login page would.
    Login {
        #[arg(long, env = "ASSET_ROUTER_TOKEN")]
        token: String,
    },
    /// Remove the stored credential token.
    Logout,
}

fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = RouterConfig::from_env()?;
    if let Some(routes) = cli.routes {
        config.routes_file = Some(routes);
    }
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    asset_router::logging::init(&config.log_filter);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, ".env not loaded"),
    }

    let store = FileCredentials::new(&config.store_path, &config.token_key);

    match cli.command {
        Command::Routes { json } => run_routes(&load_table(&config)?, json),
        Command::Check { path, from } => run_check(&config, &store, &path, from.as_deref()),
        Command::Navigate { paths } => run_navigate(&config, store, &paths),
        Command::Validate { file } => run_validate(&config, &file),
        Command::Login { token } => {
            store.write(&token)?;
            println!("token stored in {}", store.path().display());
            Ok(())
        }
        Command::Logout => {
            if store.remove()? {
                println!("token removed from {}", store.path().display());
            } else {
                println!("no token stored");
            }
            Ok(())
        }
    }
}

fn load_table(config: &RouterConfig) -> Result<RouteTable, RouteError> {
    match &config.routes_file {
        Some(path) => RouteTable::load(path),
        None => RouteTable::application(),
    }
}

fn load_guard(config: &RouterConfig, table: &RouteTable) -> Result<NavigationGuard, RouteError> {
    let guard = NavigationGuard::from_config(config);
    guard.check_table(table)?;
    Ok(guard)
}

fn run_routes(table: &RouteTable, json: bool) -> Result<(), CliError> {
    if json {
        let routes: Vec<_> = table.iter().collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }
    for route in table.iter() {
        let auth = if route.requires_auth { "auth" } else { "-" };
        println!("{:<22} {:<24} {:<5} {}", route.name, route.path, auth, route.view);
    }
    Ok(())
}

fn run_check(config: &RouterConfig, store: &FileCredentials, path: &str, from: Option<&str>) -> Result<(), CliError> {
    let table = load_table(config)?;
    let guard = load_guard(config, &table)?;

    let to = table.resolve(path).ok_or_else(|| NavigationError::NoMatch(path.to_owned()))?;
    let origin = match from {
        Some(p) => Some(table.resolve(p).ok_or_else(|| NavigationError::NoMatch(p.to_owned()))?),
        None => None,
    };

    let intent = NavigationIntent::new(&to.descriptor, origin.as_ref().map(|r| &r.descriptor));
    match guard.evaluate(intent, store) {
        Outcome::Allow => println!("allow {} ({})", to.name(), to.path),
        Outcome::Redirect { route } => {
            let href = table.href(&route, &Default::default())?;
            println!("redirect {route} ({href})");
        }
    }
    Ok(())
}

fn run_navigate(config: &RouterConfig, store: FileCredentials, paths: &[String]) -> Result<(), CliError> {
    let table = load_table(config)?;
    let guard = load_guard(config, &table)?;
    let mut navigator = Navigator::new(table, guard, store);

    for path in paths {
        let nav = navigator.navigate(path)?;
        if nav.was_redirected() {
            println!("{path} -> {} ({}) via {}", nav.route.path, nav.route.name(), nav.redirects.join(" -> "));
        } else {
            println!("{path} -> {} ({})", nav.route.path, nav.route.name());
        }
    }
    Ok(())
}

fn run_validate(config: &RouterConfig, file: &Path) -> Result<(), CliError> {
    let table = RouteTable::load(file)?;
    let guard = NavigationGuard::from_config(config);
    if let Err(e) = guard.check_table(&table) {
        tracing::warn!(error = %e, "guard redirect target missing from route file");
    }
    let protected = table.iter().filter(|r| r.requires_auth).count();
    println!("{}: {} routes, {} protected", file.display(), table.len(), protected);
    Ok(())
}
