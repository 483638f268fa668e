// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

use anyhow::{Context, Result};
use bookgoblin_client::api::{ApiClient, ApiResponse};
use bookgoblin_client::config::ClientConfig;
use bookgoblin_client::models::{LoginRequest, RegisterRequest};
use bookgoblin_client::router::{Navigation, Router};
use bookgoblin_client::session::{FileSessionStore, SessionProvider};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bookgoblin-cli")]
#[command(about = "BookGoblin CLI - Desktop driver for the book tracker", long_about = None)]
struct Cli {
    /// Where the session token is kept
    #[arg(long, env = "BOOKGOBLIN_SESSION_FILE", default_value = "bookgoblin-session.json")]
    session_file: PathBuf,

    /// Backend origin (overrides BOOKGOBLIN_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the application's routes
    Routes,
    /// Run the navigation guard for a path
    Navigate {
        path: String,
    },
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Forget the stored session token
    Logout,
    /// Search Open Library through the backend
    Discover {
        query: String,
    },
    #[command(subcommand)]
    Books(BookCommand),
    #[command(subcommand)]
    Tags(TagCommand),
    #[command(subcommand)]
    UserBooks(UserBookCommand),
    #[command(subcommand)]
    ReadingLogs(ReadingLogCommand),
}

#[derive(Subcommand)]
enum BookCommand {
    List,
    Get { id: i64 },
    Search {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// JSON payload, e.g. '{"title":"Dune","author":"Frank Herbert"}'
    Create { json: String },
    Update { id: i64, json: String },
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum TagCommand {
    List,
    Get { id: i64 },
    ForBook { book_id: i64 },
    Create { json: String },
    Update { id: i64, json: String },
    Delete { id: i64 },
    Add { tag_id: i64, book_id: i64 },
    Remove { tag_id: i64, book_id: i64 },
}

#[derive(Subcommand)]
enum UserBookCommand {
    List,
    Get { id: i64 },
    Create { json: String },
    Update { id: i64, json: String },
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ReadingLogCommand {
    ForUserBook { user_book_id: i64 },
    Get { id: i64 },
    Create { json: String },
    Update { id: i64, json: String },
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let cli = Cli::parse();
    let store = Arc::new(FileSessionStore::new(&cli.session_file));
    let api_url = cli.api_url;
    let client = || build_client(api_url.as_deref(), store.clone());

    let response = match cli.command {
        Commands::Routes => {
            for route in Router::new().table().iter() {
                let auth = if route.requires_auth { "auth" } else { "" };
                println!("{:<14} {:<12} {:?} {}", route.path, route.name, route.view, auth);
            }
            return Ok(());
        }
        Commands::Navigate { path } => {
            match Router::new().navigate(&path, store.as_ref()) {
                Navigation::Proceed { path, route: Some(r) } => println!("{} -> {:?}", path, r.view),
                Navigation::Proceed { path, route: None } => println!("{} -> (no matching route)", path),
                Navigation::Redirect { path, .. } => println!("redirected to {}", path),
            }
            return Ok(());
        }
        Commands::Logout => {
            client()?.sign_out(store.as_ref())?;
            println!("Signed out");
            return Ok(());
        }
        Commands::Login { username, password } => {
            let response = client()?
                .sign_in(&LoginRequest::new(username, password), store.as_ref())
                .await?;
            if store.has_token() {
                println!("Signed in, token stored in {}", store.path().display());
            }
            response
        }
        Commands::Register {
            username,
            password,
            role,
        } => {
            let mut registration = RegisterRequest::user(username, password);
            registration.role = role;
            client()?.sign_up(&registration).await?
        }
        Commands::Discover { query } => client()?.search_open_library(&query).await?,
        Commands::Books(cmd) => {
            let client = client()?;
            match cmd {
                BookCommand::List => client.get_books().await?,
                BookCommand::Get { id } => client.get_book_by_id(id).await?,
                BookCommand::Search { title, author } => {
                    client.search_books(title.as_deref(), author.as_deref()).await?
                }
                BookCommand::Create { json } => client.create_book(&payload(&json)?).await?,
                BookCommand::Update { id, json } => client.update_book(id, &payload(&json)?).await?,
                BookCommand::Delete { id } => client.delete_book(id).await?,
            }
        }
        Commands::Tags(cmd) => {
            let client = client()?;
            match cmd {
                TagCommand::List => client.get_tags().await?,
                TagCommand::Get { id } => client.get_tag_by_id(id).await?,
                TagCommand::ForBook { book_id } => client.get_tags_by_book_id(book_id).await?,
                TagCommand::Create { json } => client.create_tag(&payload(&json)?).await?,
                TagCommand::Update { id, json } => client.update_tag(id, &payload(&json)?).await?,
                TagCommand::Delete { id } => client.delete_tag(id).await?,
                TagCommand::Add { tag_id, book_id } => client.add_tag_to_book(tag_id, book_id).await?,
                TagCommand::Remove { tag_id, book_id } => {
                    client.remove_tag_from_book(tag_id, book_id).await?
                }
            }
        }
        Commands::UserBooks(cmd) => {
            let client = client()?;
            match cmd {
                UserBookCommand::List => client.get_user_books().await?,
                UserBookCommand::Get { id } => client.get_user_book_by_id(id).await?,
                UserBookCommand::Create { json } => client.create_user_book(&payload(&json)?).await?,
                UserBookCommand::Update { id, json } => {
                    client.update_user_book(id, &payload(&json)?).await?
                }
                UserBookCommand::Delete { id } => client.delete_user_book(id).await?,
            }
        }
        Commands::ReadingLogs(cmd) => {
            let client = client()?;
            match cmd {
                ReadingLogCommand::ForUserBook { user_book_id } => {
                    client.get_reading_logs_by_user_book(user_book_id).await?
                }
                ReadingLogCommand::Get { id } => client.get_reading_log_by_id(id).await?,
                ReadingLogCommand::Create { json } => {
                    client.create_reading_log(&payload(&json)?).await?
                }
                ReadingLogCommand::Update { id, json } => {
                    client.update_reading_log(id, &payload(&json)?).await?
                }
                ReadingLogCommand::Delete { id } => client.delete_reading_log(id).await?,
            }
        }
    };

    print_response(&response)
}

fn build_client(api_url: Option<&str>, store: Arc<FileSessionStore>) -> Result<ApiClient> {
    let mut config = ClientConfig::from_env().context("reading BOOKGOBLIN_* environment")?;
    if let Some(url) = api_url {
        config = ClientConfig {
            base_url: url.trim_end_matches('/').to_string(),
            ..config
        };
    }
    Ok(ApiClient::with_session(config, store)?)
}

fn payload(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("payload is not valid JSON: {raw}"))
}

fn print_response(response: &ApiResponse) -> Result<()> {
    if response.body.is_null() {
        println!("{}", response.status);
    } else {
        println!("{}", serde_json::to_string_pretty(&response.body)?);
    }
    Ok(())
}
