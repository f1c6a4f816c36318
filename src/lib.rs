//! # GitHub Repo Searching
//!
//! A Rust library for searching GitHub repositories interactively, with
//! debounced queries, paginated results and a loading spinner.
//!
//! ## Main Components
//!
//! - [`GitHubSearcher`]: HTTP client for the repository search endpoint
//! - [`SearchSession`]: state of the search box, result list and pager
//! - [`SearchWidget`]: event loop running debounce timers and fetches
//! - [`LoadingSpinner`]: indicator shown while a request is in flight
//! - [`Args`]: command line and environment configuration
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use github_repo_searching::{render, Args, GitHubSearcher, SearchWidget};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let args = Args::parse();
//!     let searcher = Arc::new(GitHubSearcher::new(&args)?);
//!
//!     let (widget, handle) = SearchWidget::new(searcher, args.debounce());
//!     handle.input("tokio");
//!     drop(handle);
//!
//!     let session = widget.run(|_| {}).await;
//!     println!("{}", render::render(&session));
//!     Ok(())
//! }
//! ```

mod args;
mod error;
mod github_searcher;
pub mod input;
mod model;
pub mod pagination;
pub mod render;
pub mod session;
mod spinner;
mod widget;

// Re-export main components for documentation and external use
pub use crate::args::Args;
pub use crate::error::{InputError, SearchError};
pub use crate::github_searcher::{
    GitHubSearcher, RateLimit, RepositorySearch, SearchRequest, DEFAULT_API_URL,
};
pub use crate::model::{Owner, ResultItem, ResultSet, PAGE_SIZE};
pub use crate::session::{Effect, SearchSession};
pub use crate::spinner::LoadingSpinner;
pub use crate::widget::{SearchWidget, WidgetEvent, WidgetHandle};
