use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use rusty_maze::{
    render_ascii, ClickOutcome, Command, Dimensions, DragOutcome, JsonLinesRenderer,
    LogTelemetry, Renderer, Session, SessionConfig, SolveStep, StepDelay,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fichier de configuration JSON, ignoré s'il n'existe pas
    #[arg(short, long, default_value = "rusty-maze.json")]
    config: PathBuf,

    #[arg(short, long)]
    rows: Option<usize>,

    #[arg(short = 'C', long)]
    cols: Option<usize>,

    /// Délai entre deux pas du solveur, en millisecondes (0 à 200)
    #[arg(short, long)]
    delay: Option<u64>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Sortie des événements du moteur
    #[arg(long, value_enum, default_value_t = EventFormat::Ascii)]
    events: EventFormat,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EventFormat {
    /// Dessin ASCII du labyrinthe, événements ignorés
    Ascii,
    /// Un objet JSON par événement sur la sortie standard
    Json,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Mode {
    /// Génère un labyrinthe et l'affiche
    Generate,
    /// Génère puis résout un labyrinthe
    Solve,
    /// Mode interactif: commandes lues sur l'entrée standard
    Play,
}

type CliSession = Session<StdRng, Box<dyn Renderer>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = SessionConfig::load_from_file(&args.config)
        .with_context(|| format!("Failed to load config file: {:?}", args.config))?;
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(delay) = args.delay {
        config.step_delay_ms = delay;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let (dimensions, delay) = config.validate().context("Invalid session parameters")?;
    info!("Starting with {config:?}");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let renderer: Box<dyn Renderer> = match args.events {
        EventFormat::Ascii => Box::new(()),
        EventFormat::Json => Box::new(JsonLinesRenderer::new(io::stdout())),
    };
    let mut session: CliSession = Session::new(dimensions, rng, renderer, &mut LogTelemetry);

    match args.mode.unwrap_or(Mode::Play) {
        Mode::Generate => show(&session, args.events, false),
        Mode::Solve => {
            solve(&mut session, delay);
            show(&session, args.events, true);
        }
        Mode::Play => play(&mut session, args.events, delay)?,
    }
    Ok(())
}

fn solve(session: &mut CliSession, delay: StepDelay) {
    let solved = session.solve_paced(|step| {
        if !delay.is_zero() && matches!(step, SolveStep::Advance { .. } | SolveStep::Backtrack { .. }) {
            thread::sleep(delay.as_duration());
        }
    });
    if solved.is_none() {
        warn!("no path from entrance to exit");
    }
}

fn show(session: &CliSession, format: EventFormat, with_solution: bool) {
    if format == EventFormat::Ascii {
        let overlay = if with_solution {
            session.solution()
        } else {
            Some(session.traced_path())
        };
        print!("{}", render_ascii(session.maze(), overlay));
    }
}

fn report<T: Serialize>(format: EventFormat, text: String, value: &T) {
    match format {
        EventFormat::Ascii => println!("{}", text),
        EventFormat::Json => match serde_json::to_string(value) {
            Ok(line) => println!("{{\"outcome\":{}}}", line),
            Err(e) => warn!("could not serialize outcome: {}", e),
        },
    }
}

fn describe_click(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Appended(cell) => format!("added {}", cell),
        ClickOutcome::Undone(cell) => format!("removed {}", cell),
        ClickOutcome::Completed(cell) => format!("reached the exit at {}, well done", cell),
        ClickOutcome::Ignored => "maze already completed, type `reset` or `new`".to_string(),
        ClickOutcome::Rejected(reason) => format!("rejected: {:?}", reason),
    }
}

fn play(session: &mut CliSession, format: EventFormat, delay: StepDelay) -> Result<()> {
    show(session, format, false);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match command {
            Command::Click(cell) => {
                let outcome = session.click(cell);
                report(format, describe_click(&outcome), &outcome);
            }
            Command::Drag { from, to } => {
                let outcome = session.drag(from, to);
                let text = match &outcome {
                    DragOutcome::Applied(clicks) => clicks
                        .iter()
                        .map(describe_click)
                        .collect::<Vec<_>>()
                        .join("\n"),
                    DragOutcome::Ignored => describe_click(&ClickOutcome::Ignored),
                    DragOutcome::Rejected(reason) => format!("rejected: {:?}", reason),
                };
                report(format, text, &outcome);
            }
            Command::Reset => session.reset_trace(),
            Command::Solve => {
                solve(session, delay);
                show(session, format, true);
            }
            Command::New(size) => {
                match size {
                    None => {
                        session.regenerate();
                    }
                    Some((rows, cols)) => match Dimensions::new(rows, cols) {
                        Ok(dimensions) => {
                            session.generate(dimensions);
                        }
                        Err(e) => {
                            eprintln!("{}", e);
                            continue;
                        }
                    },
                }
                show(session, format, false);
            }
            Command::Show => show(session, format, false),
            Command::Quit => break,
        }
        io::stdout().flush().context("Failed to flush stdout")?;
    }
    Ok(())
}
