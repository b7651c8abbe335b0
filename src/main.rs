use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use fretquiz::command::{parse_command, Command, USAGE};
use fretquiz::{
    Fretboard, GuessOutcome, GuitarString, Mode, Naming, QuizConfig, QuizSession, QuizView,
    ViewState, MAX_FRET,
};

#[derive(Parser, Debug)]
#[command(name = "fretquiz", version)]
#[command(about = "Find notes on the guitar fretboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the quiz interactively
    Play(PlayArgs),
    /// Print the note at every string and fret
    Table {
        #[arg(short, long, default_value = "english")]
        naming: Naming,
    },
    /// Print board coordinates as YAML
    Layout {
        #[arg(short, long, env = "FRETQUIZ_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// YAML configuration file
    #[arg(short, long, env = "FRETQUIZ_CONFIG")]
    config: Option<PathBuf>,

    /// single-string or all-strings
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Seed for reproducible targets
    #[arg(short, long)]
    seed: Option<u64>,

    /// english or solfege
    #[arg(short, long)]
    naming: Option<Naming>,

    /// Start with the note grid shown
    #[arg(short, long)]
    debug: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<QuizConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Ok(QuizConfig::load(path)?)
        }
        None => Ok(QuizConfig::default()),
    }
}

fn print_grid(board: &Fretboard, naming: Naming) {
    print!("{:>8}", "");
    for fret in 0..=MAX_FRET {
        print!("{:>8}", fret);
    }
    println!();
    for string in GuitarString::ALL {
        print!("{:>8}", string.label(naming));
        for note in board.string_notes(string) {
            let name = match naming {
                Naming::English => note.name(),
                Naming::Solfege => note.solfege(),
            };
            print!("{:>8}", name);
        }
        println!();
    }
}

fn print_status(view: &QuizView, board: &Fretboard, naming: Naming) {
    println!();
    match &view.required_string_label {
        Some(string) => println!("Find {} on string {}", view.target_label, string),
        None => println!("Find {} on any string", view.target_label),
    }
    println!("Score: {} | Mode: {}", view.score, view.mode_label);
    if let Some(hovered) = view.hovered {
        println!("Hovering {} ({})", hovered, board.note_at_position(hovered));
    }
    if view.debug {
        print_grid(board, naming);
    }
}

fn play(args: PlayArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(naming) = args.naming {
        config.naming = naming;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.debug |= args.debug;

    let naming = config.naming;
    let mut session = QuizSession::from_config(&config);
    let mut view = ViewState::new(config.debug);

    println!("{}", USAGE);
    print_status(&QuizView::capture(&session, &view, naming), session.board(), naming);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "rejected input");
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", USAGE);
                continue;
            }
            Command::Guess(position) => match session.submit_position(position) {
                GuessOutcome::Correct { score } => println!("Correct! Score: {}", score),
                GuessOutcome::Incorrect { note } => {
                    let shown = match naming {
                        Naming::English => note.name(),
                        Naming::Solfege => note.solfege(),
                    };
                    println!("No, {} is {}", position, shown);
                }
            },
            Command::ToggleMode => session.toggle_mode(),
            Command::SetMode(mode) => session.set_mode(mode),
            Command::ToggleDebug => view.toggle_debug(),
            Command::Hover(hovered) => view.set_hovered(hovered),
        }
        print_status(&QuizView::capture(&session, &view, naming), session.board(), naming);
    }

    println!("Final score: {}", session.score());
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Table { naming } => {
            print_grid(&Fretboard::standard(), naming);
            Ok(())
        }
        Commands::Layout { config } => {
            let config = load_config(config.as_ref())?;
            print!("{}", serde_yaml::to_string(&config.layout.snapshot())?);
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
