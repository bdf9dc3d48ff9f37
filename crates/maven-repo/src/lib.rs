//! Command-line front end for `maven-repo-core`.

use clap::{Parser, Subcommand};
use maven_repo_core::{
    LocalDirStatus, MavenRepoError, PublisherConfig, RepositoryType, Result,
    default_local_directory, ensure_local_directory_exists, is_local_maven_repo,
    target_repository_statement,
};

#[derive(Parser, Debug)]
#[command(
    name = "maven-repo",
    about = "Maven repository helpers for generated Android containers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the repository type of a URL (http, file or unknown)
    Classify { url: String },

    /// Print the Gradle repository statement for a publication target
    Statement {
        /// Repository URL, defaults to `mavenRepositoryUrl` from --config
        url: Option<String>,

        /// Publisher configuration as JSON, e.g. '{"mavenUser": "[myUserVar]"}'
        #[arg(long)]
        config: Option<String>,

        /// User name, or `[variable]` to reference a Gradle variable
        #[arg(long)]
        user: Option<String>,

        /// Password, or `[variable]` to reference a Gradle variable
        #[arg(long)]
        password: Option<String>,
    },

    /// Print the default local repository URL
    LocalDir,

    /// Print whether a URL is the default local repository
    IsLocal { url: String },

    /// Create the default local repository directory if it is missing
    EnsureLocal,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Executes a command and returns what should be printed on stdout.
pub fn run(command: Command) -> Result<String> {
    match command {
        Command::Classify { url } => Ok(RepositoryType::classify(&url).to_string()),
        Command::Statement {
            url,
            config,
            user,
            password,
        } => {
            let mut config = match config {
                Some(json) => PublisherConfig::from_json(&json)?,
                None => PublisherConfig::default(),
            };
            if user.is_some() {
                config.credentials.user = user;
            }
            if password.is_some() {
                config.credentials.password = password;
            }

            let url = url
                .or(config.maven_repository_url)
                .ok_or(MavenRepoError::MissingRepositoryUrl)?;
            tracing::info!("Rendering {} repository statement", RepositoryType::classify(&url));

            target_repository_statement(&url, &config.credentials)
                .ok_or(MavenRepoError::UnsupportedRepository { url })
        }
        Command::LocalDir => default_local_directory(),
        Command::IsLocal { url } => Ok(is_local_maven_repo(&url)?.to_string()),
        Command::EnsureLocal => {
            let status = ensure_local_directory_exists()?;
            Ok(match status {
                LocalDirStatus::Created => "created",
                LocalDirStatus::AlreadyExists => "exists",
            }
            .to_string())
        }
    }
}
