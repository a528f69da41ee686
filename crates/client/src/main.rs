//! hobbysync-client CLI entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hobbysync_client::cli::{Cli, Commands, HobbiesAction};
use hobbysync_client::{HobbySyncClient, JsonFileCache};
use hobbysync_core::cache::KeyValueCache;
use hobbysync_core::catalog::{validate_hobby, Hobby};
use hobbysync_core::remote::{CreateHobbyRequest, RemoteApi};
use hobbysync_core::schedule::{events_on, parse_event_date, project_markings, Scheduler};
use hobbysync_core::session::{Collections, SessionError, SessionLifecycle};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hobbysync_core=info,hobbysync_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cache: Arc<dyn KeyValueCache> = Arc::new(JsonFileCache::open(&cli.cache_path).await);
    let remote: Arc<dyn RemoteApi> = Arc::new(HobbySyncClient::new(&cli.base_url));
    let collections = Collections::new(cache.clone());
    let lifecycle = SessionLifecycle::new(cache, remote.clone(), collections.clone());
    lifecycle.restore().await;

    match cli.command {
        Commands::Accounts => {
            if let Err(e) = lifecycle.refresh_accounts().await {
                eprintln!("Warning: account listing may be stale: {}", e);
            }
            let accounts = collections.accounts.current().await;
            if accounts.is_empty() {
                println!("No accounts registered.");
            }
            for account in accounts.iter() {
                println!("{}  {} <{}>", account.id, account.username, account.email);
            }
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            lifecycle.register(&username, &email, &password).await?;
            println!("Registered {}. You can now log in.", username);
        }
        Commands::Login { username, password } => {
            let account = lifecycle.login(&username, &password).await?;
            println!("Logged in as {} ({})", account.username, account.id);
        }
        Commands::Logout => {
            lifecycle.logout().await;
            println!("Logged out.");
        }
        Commands::Whoami => match lifecycle.current_account().await {
            Some(account) => {
                println!("{} <{}> ({})", account.username, account.email, account.id)
            }
            None => println!("Not logged in."),
        },
        Commands::Hobbies(command) => match command.action {
            HobbiesAction::List => {
                match lifecycle.refresh_catalog().await {
                    Err(SessionError::Remote(e)) => {
                        eprintln!("Warning: catalog may be stale: {}", e)
                    }
                    other => {
                        other?;
                    }
                }
                let hobbies = collections.catalog.current().await;
                if hobbies.is_empty() {
                    println!("The catalog is empty.");
                }
                for hobby in hobbies.iter() {
                    let difficulty = hobby
                        .difficulty
                        .map(|d| format!("  difficulty {}/5", d))
                        .unwrap_or_default();
                    println!("{}  {}{}", hobby.id, hobby.name, difficulty);
                }
            }
            HobbiesAction::Add {
                name,
                description,
                category,
                difficulty,
            } => {
                let account = lifecycle
                    .current_account()
                    .await
                    .ok_or(SessionError::NotAuthenticated)?;

                let mut hobby = Hobby::new(&name, &description);
                hobby.category = category.clone();
                hobby.difficulty = difficulty;
                validate_hobby(&hobby)?;

                let request = CreateHobbyRequest {
                    name,
                    description,
                    category,
                    difficulty,
                    account_id: account.id,
                };
                let created = remote.create_hobby(&request).await?;
                let _ = lifecycle.refresh_catalog().await;
                println!("Added {} ({})", created.name, created.id);
            }
        },
        Commands::Schedule { hobby, date, time } => {
            let account = lifecycle
                .current_account()
                .await
                .ok_or(SessionError::NotAuthenticated)?;

            let scheduler =
                Scheduler::new(remote.clone(), collections.events.clone(), lifecycle.handle());
            let event_id = scheduler
                .validate_and_schedule(Some(account.id), Some(hobby), &date, &time)
                .await?;
            let _ = lifecycle.refresh_events().await;
            println!("Scheduled event {}", event_id);
        }
        Commands::Calendar { day } => {
            lifecycle
                .current_account()
                .await
                .ok_or(SessionError::NotAuthenticated)?;

            let selected = match day {
                Some(text) => parse_event_date(&text)?,
                None => chrono::Local::now().date_naive(),
            };

            match lifecycle.refresh_events().await {
                Err(SessionError::Remote(e)) => {
                    eprintln!("Warning: calendar may be stale: {}", e)
                }
                other => {
                    other?;
                }
            }

            let events = collections.events.current().await;
            let markings = project_markings(&events, selected);
            for (date, marking) in &markings {
                let dots = "*".repeat(marking.markers.len());
                let flag = if marking.selected { "  <selected>" } else { "" };
                println!("{}  {}{}", date.format("%d.%m.%Y"), dots, flag);
            }

            let listed = events_on(&events, selected);
            if listed.is_empty() {
                println!("\nNo events on {}.", selected.format("%d.%m.%Y"));
            } else {
                println!("\nEvents on {}:", selected.format("%d.%m.%Y"));
                for event in listed {
                    println!(
                        "  {}  {}",
                        event.starts_at.with_timezone(&chrono::Local).format("%H:%M"),
                        event.hobby_name
                    );
                }
            }
        }
    }

    Ok(())
}
