//! nova CLI: mock phone/OTP login, chatroom management, and an interactive chat
//! REPL against the synthetic responder. Data dir from NOVA_DATA_DIR (default
//! ./nova-data); .env honored; RUST_LOG controls log level (logs go to stderr).

use std::io::{self, Write as _};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use auth::{fetch_countries, LoginForm, OtpChallenge};
use chat_session::{Attachment, ChatSession, ChatroomList, SendOutcome};
use clap::{Parser, Subcommand};
use nova_core::{init_tracing, Message, MessageKind, Sender, User};
use reply_rules::Responder;
use storage::{JsonFileStore, Store};
use tracing::debug;

#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "Novachat CLI: login, manage chatrooms, chat with the mock assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with name and phone number; the mock OTP is printed and verified.
    Login,
    /// Clear the stored user.
    Logout,
    /// List chatrooms, optionally filtered by a title substring.
    List {
        #[arg(default_value = "")]
        query: String,
    },
    /// Create a chatroom and print its id.
    New,
    /// Toggle a chatroom's pinned flag.
    Pin { id: String },
    /// Delete a chatroom and its message log.
    Delete { id: String },
    /// Open a chatroom and chat interactively.
    Chat { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    let data_dir =
        std::env::var("NOVA_DATA_DIR").unwrap_or_else(|_| "./nova-data".to_string());
    debug!(data_dir = %data_dir, "Opening store");
    let store: Arc<dyn Store> = Arc::new(JsonFileStore::new(data_dir));

    match cli.command {
        Commands::Login => handle_login(store).await,
        Commands::Logout => handle_logout(store).await,
        Commands::List { query } => handle_list(store, &query).await,
        Commands::New => handle_new(store).await,
        Commands::Pin { id } => handle_pin(store, &id).await,
        Commands::Delete { id } => handle_delete(store, &id).await,
        Commands::Chat { id } => handle_chat(store, &id).await,
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn current_user(store: &Arc<dyn Store>) -> Result<User> {
    store
        .user()
        .await
        .context("Not logged in. Run `nova login` first.")
}

async fn handle_login(store: Arc<dyn Store>) -> Result<()> {
    let client = reqwest::Client::new();
    let countries = fetch_countries(&client).await;
    if countries.is_empty() {
        // Directory lookup failed (already logged); the form stays usable.
        println!("Country list unavailable; enter your dial code manually.");
    } else {
        println!("Some dial codes:");
        for country in countries.iter().take(12) {
            println!("  {} {} ({})", country.flag, country.name, country.dial_code);
        }
        if countries.len() > 12 {
            println!("  ... and {} more", countries.len() - 12);
        }
    }

    let name = prompt("Name")?;
    let country_code = prompt("Dial code (e.g. +44)")?;
    let phone_number = prompt("Phone number")?;

    let challenge = match OtpChallenge::issue(LoginForm {
        name,
        country_code,
        phone_number,
    }) {
        Ok(challenge) => challenge,
        Err(e) => bail!("{}", e),
    };
    println!("{}", challenge.message());

    let entered = prompt("Enter OTP")?;
    let user = match challenge.verify(&entered) {
        Ok(user) => user,
        Err(e) => bail!("{}", e),
    };

    store.set_user(&user).await?;
    ChatroomList::new(store.clone())
        .ensure_seeded(&user.id())
        .await?;
    println!("Welcome, {}! You're logged in.", user.name);
    Ok(())
}

async fn handle_logout(store: Arc<dyn Store>) -> Result<()> {
    store.clear_user().await?;
    println!("Logged out.");
    Ok(())
}

async fn handle_list(store: Arc<dyn Store>, query: &str) -> Result<()> {
    let user = current_user(&store).await?;
    let rooms = ChatroomList::new(store).list(&user.id(), query).await;

    if rooms.is_empty() {
        println!(
            "{}",
            if query.is_empty() {
                "No conversations yet"
            } else {
                "No conversations found"
            }
        );
        return Ok(());
    }

    for room in rooms {
        println!(
            "{} {}  [{}]  {}  - {}",
            if room.pinned { "📌" } else { "  " },
            room.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
            room.id,
            room.title,
            room.last_message
        );
    }
    Ok(())
}

async fn handle_new(store: Arc<dyn Store>) -> Result<()> {
    let user = current_user(&store).await?;
    let room = ChatroomList::new(store).create(&user.id()).await?;
    println!("New conversation started: {}", room.id);
    Ok(())
}

async fn handle_pin(store: Arc<dyn Store>, id: &str) -> Result<()> {
    let user = current_user(&store).await?;
    match ChatroomList::new(store).toggle_pin(&user.id(), id).await? {
        Some(true) => println!("Conversation pinned"),
        Some(false) => println!("Conversation unpinned"),
        None => println!("No such chatroom; run `nova list`."),
    }
    Ok(())
}

async fn handle_delete(store: Arc<dyn Store>, id: &str) -> Result<()> {
    let user = current_user(&store).await?;
    ChatroomList::new(store).delete(&user.id(), id).await?;
    println!("Conversation deleted");
    Ok(())
}

async fn handle_chat(store: Arc<dyn Store>, id: &str) -> Result<()> {
    let user = current_user(&store).await?;
    let user_id = user.id();
    let list = ChatroomList::new(store.clone());
    let room = list
        .get(&user_id, id)
        .await
        .context("No such chatroom; run `nova list`.")?;

    let responder = Arc::new(Responder::new());
    let mut session =
        ChatSession::open(store.clone(), responder, &user_id, &room.id, &room.title).await?;

    println!("=== {} ===", room.title);
    for message in session.messages() {
        print_message(message);
    }
    println!("Type a message. Commands: /attach <path>, /search <query>, /quit");

    let mut staged: Option<Attachment> = None;
    loop {
        let label = if staged.is_some() { "you [image staged]" } else { "you" };
        let line = prompt(label)?;

        if line == "/quit" {
            break;
        }
        if let Some(query) = line.strip_prefix("/search ") {
            for message in session.search(query.trim()) {
                print_message(message);
            }
            continue;
        }
        if let Some(path) = line.strip_prefix("/attach ") {
            match Attachment::from_file(path.trim()).await {
                Ok(attachment) => {
                    println!("Staged {} for the next send", attachment.file_name);
                    staged = Some(attachment);
                }
                Err(e) => println!("! {}", e),
            }
            continue;
        }

        let attachment = staged.take();
        if !line.is_empty() || attachment.is_some() {
            println!("Nova is typing...");
        }
        match session.send(&line, attachment).await {
            Ok(SendOutcome::Delivered {
                reply, new_title, ..
            }) => {
                if let Some(title) = new_title {
                    println!("(conversation renamed to \"{}\")", title);
                }
                print_message(&reply);
            }
            Ok(SendOutcome::Ignored) => {}
            // The user message is already persisted; the session stays usable.
            Err(e) => println!("! Reply failed: {}", e),
        }
    }
    Ok(())
}

fn print_message(message: &Message) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "nova",
    };
    let tag = if message.kind == MessageKind::Image {
        " [image]"
    } else {
        ""
    };
    println!(
        "[{}] {}{}: {}",
        message.timestamp.with_timezone(&chrono::Local).format("%H:%M"),
        who,
        tag,
        message.content
    );
}
