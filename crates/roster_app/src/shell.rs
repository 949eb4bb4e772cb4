//! Minimal terminal front end over the roster core.
//!
//! Stands in for the presentation-layer collaborator: renders the view model
//! after each state change and turns typed commands into messages.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use roster_core::{update, AppState, LoadState, Msg, RosterViewModel, User};
use roster_engine::{EngineConfig, FetchError};
use url::Url;

use crate::effects::EffectRunner;

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

pub fn base_url_from_args() -> Result<Url, String> {
    match std::env::args().nth(1) {
        Some(raw) => {
            Url::parse(&raw).map_err(|err| format!("invalid base url {raw:?}: {err}"))
        }
        None => Url::parse(DEFAULT_BASE_URL).map_err(|err| err.to_string()),
    }
}

pub fn run(base_url: Url) -> Result<(), FetchError> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(EngineConfig::new(base_url), msg_tx.clone())?;

    let quit = Arc::new(AtomicBool::new(false));
    // Snapshot of the rendered list so the input thread can resolve `open N`
    // against what the user currently sees.
    let roster: Arc<Mutex<Vec<User>>> = Arc::new(Mutex::new(Vec::new()));
    spawn_input_thread(msg_tx, quit.clone(), roster.clone());

    print_help();
    let mut state = AppState::new();
    render(&state.view());

    loop {
        let Ok(msg) = msg_rx.recv() else { break };
        if quit.load(Ordering::Relaxed) {
            break;
        }

        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        let view = state.view();
        if state.consume_dirty() {
            render(&view);
            if let Ok(mut snapshot) = roster.lock() {
                *snapshot = view.users.clone();
            }
            if view.route.is_some() {
                // The detail line above is the navigation; mark it done.
                let (next, _) = update(state, Msg::RouteConsumed);
                state = next;
                state.consume_dirty();
            }
        }
    }

    Ok(())
}

enum Command {
    Msg(Msg),
    Help,
    Quit,
    Nothing,
    Error(String),
}

fn spawn_input_thread(
    msg_tx: mpsc::Sender<Msg>,
    quit: Arc<AtomicBool>,
    roster: Arc<Mutex<Vec<User>>>,
) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(line.trim(), &roster) {
                Command::Msg(msg) => {
                    let _ = msg_tx.send(msg);
                }
                Command::Help => print_help(),
                Command::Quit => break,
                Command::Nothing => {}
                Command::Error(message) => eprintln!("{message} (try `help`)"),
            }
        }
        // Reached on `quit`, EOF, or a read error; wake the main loop so it
        // can observe the flag.
        quit.store(true, Ordering::Relaxed);
        let _ = msg_tx.send(Msg::Tick);
    });
}

fn parse_line(line: &str, roster: &Mutex<Vec<User>>) -> Command {
    let mut parts = line.splitn(2, ' ');
    let word = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match word {
        "" => Command::Nothing,
        "load" => Command::Msg(Msg::FirstPageRequested),
        "more" => Command::Msg(Msg::NextPageRequested),
        "open" => {
            let picked = rest.parse::<usize>().ok().and_then(|index| {
                let users = roster.lock().ok()?;
                index.checked_sub(1).and_then(|i| users.get(i).cloned())
            });
            match picked {
                Some(user) => Command::Msg(Msg::UserSelected(user)),
                None => Command::Error(format!("no list entry {rest:?}")),
            }
        }
        "email" => Command::Msg(Msg::EmailChanged(rest.to_string())),
        "password" => Command::Msg(Msg::PasswordChanged(rest.to_string())),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Error(format!("unknown command {other:?}")),
    }
}

fn render(view: &RosterViewModel) {
    println!();
    match &view.load {
        LoadState::Idle => println!("No users loaded yet. Type `load` to fetch page 1."),
        LoadState::Loading => println!("Loading page 1..."),
        LoadState::Failed(message) => println!("Load failed: {message}"),
        LoadState::Loaded => {
            println!("{} users (through page {}):", view.users.len(), view.cursor);
            for (index, user) in view.users.iter().enumerate() {
                println!("  {:>3}. {} <{}>", index + 1, user.name, user.email);
            }
        }
    }
    if view.busy {
        println!("(fetching...)");
    }
    if let Some(user) = &view.route {
        println!("-> detail: #{} {} <{}>", user.id, user.name, user.email);
    }
    let validity = if view.form.is_valid { "ok" } else { "incomplete" };
    println!(
        "login form: email={:?} password={} [{}]",
        view.form.email,
        "*".repeat(view.form.password.chars().count()),
        validity
    );
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("commands:");
    println!("  load            fetch page 1 (replaces the list)");
    println!("  more            fetch the next page (appends)");
    println!("  open <n>        open list entry n");
    println!("  email <value>   set the login email field");
    println!("  password <value> set the login password field");
    println!("  help, quit");
}
