//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: Genetic progress, stagnation restarts, limits, A* goal paths
//! - **TRACE**: Individual A* expansions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "nqueens_solver=info";

/// Inner width of the summary box, between the two border characters.
const BOX_WIDTH: usize = 58;

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _   _        ___
| \ | |      / _ \ _   _  ___  ___ _ __  ___
|  \| |_____| | | | | | |/ _ \/ _ \ '_ \/ __|
| |\  |_____| |_| | |_| |  __/  __/ | | \__ \
|_| \_|      \__\_\\__,_|\___|\___|_| |_|___/
"#;

    let version_line = format!("            v{VERSION} - DFS, BFS, A* and Genetic Search\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from the solver crate and the facade
        if !target.starts_with("nqueens_solver") && !target.starts_with("nqueens::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    heuristic: Option<String>,
    board_size: Option<u64>,
    success: Option<bool>,
    cut_off: Option<bool>,
    solved: Option<bool>,
    nodes_explored: Option<u64>,
    nodes_generated: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    generation: Option<u64>,
    generations: Option<u64>,
    best_fitness: Option<u64>,
    window: Option<u64>,
    path_length: Option<u64>,
    open: Option<u64>,
    closed: Option<u64>,
    f: Option<u64>,
    g: Option<u64>,
    h: Option<u64>,
    depth: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "algorithm" => self.algorithm = Some(s),
            "heuristic" => self.heuristic = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "board_size" => self.board_size = Some(value),
            "nodes_explored" => self.nodes_explored = Some(value),
            "nodes_generated" => self.nodes_generated = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "generation" => self.generation = Some(value),
            "generations" => self.generations = Some(value),
            "best_fitness" => self.best_fitness = Some(value),
            "window" => self.window = Some(value),
            "path_length" => self.path_length = Some(value),
            "open" => self.open = Some(value),
            "closed" => self.closed = Some(value),
            "f" => self.f = Some(value),
            "g" => self.g = Some(value),
            "h" => self.h = Some(value),
            "depth" => self.depth = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "success" => self.success = Some(value),
            "cut_off" => self.cut_off = Some(value),
            "solved" => self.solved = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "heuristic" => self.heuristic = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "generation" => format_generation(v),
        "stagnation_restart" => format_stagnation(v),
        "node_limit_reached" => format_node_limit(v),
        "generation_limit_reached" => format_generation_limit(v),
        "goal_reached" => format_goal_reached(v),
        "expand" => format_expand(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} Solving │ {} │ {} queens",
        format_elapsed(),
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        count(v.board_size).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let success = v.success.unwrap_or(false);
    let duration = v.duration_ms.unwrap_or(0);

    let cut_off = v.cut_off.unwrap_or(false);

    let status = if success {
        "SOLVED".bright_green().bold().to_string()
    } else if cut_off {
        "NODE LIMIT".yellow().bold().to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} explored │ {} generated │ {} │ {} nodes/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        count(v.nodes_explored).white(),
        count(v.nodes_generated).white(),
        format_duration_ms(duration).yellow(),
        count(v.speed).bright_magenta().bold(),
    );

    // Summary box
    let border = "═".repeat(BOX_WIDTH);
    output.push_str("\n\n");
    output.push_str(&format!("╔{border}╗").bright_cyan().to_string());
    output.push('\n');

    let status_text = if success {
        "SOLUTION FOUND"
    } else if cut_off {
        "STOPPED AT NODE LIMIT"
    } else {
        "NO SOLUTION FOUND"
    };
    let total_pad = BOX_WIDTH.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let status_colored = if success {
        status_text.bright_green().bold().to_string()
    } else {
        status_text.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&format!("╠{border}╣").bright_cyan().to_string());
    output.push('\n');

    for (label, value) in [
        ("Algorithm:", v.algorithm.clone().unwrap_or_default()),
        ("Nodes explored:", count(v.nodes_explored)),
        ("Time:", format_duration_ms(duration)),
    ] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&format!("╚{border}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_generation(v: &EventVisitor) -> String {
    let fitness = v.best_fitness.unwrap_or(0);
    let fitness_str = if fitness == 0 {
        fitness.to_string().bright_green().bold().to_string()
    } else {
        fitness.to_string().yellow().to_string()
    };

    let mut output = format!(
        "{} {} Generation {:>10} │ best fitness {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.generation).white(),
        fitness_str,
    );
    if v.solved == Some(true) {
        output.push_str(&format!(" │ {}", "solved".bright_green()));
    }
    output
}

fn format_stagnation(v: &EventVisitor) -> String {
    format!(
        "{} {} Stagnation at generation {} │ best fitness {} for {} generations │ reseeding",
        format_elapsed(),
        "↻".bright_yellow(),
        count(v.generation).white(),
        count(v.best_fitness).yellow(),
        count(v.window).white(),
    )
}

fn format_node_limit(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("search");

    format!(
        "{} {} Node limit reached │ {} │ {} explored",
        format_elapsed(),
        "⚠".bright_red(),
        algorithm.white(),
        count(v.nodes_explored).bright_yellow(),
    )
}

fn format_generation_limit(v: &EventVisitor) -> String {
    format!(
        "{} {} Generation limit reached │ {} generations │ best fitness {}",
        format_elapsed(),
        "⚠".bright_red(),
        count(v.generations).bright_yellow(),
        count(v.best_fitness).yellow(),
    )
}

fn format_goal_reached(v: &EventVisitor) -> String {
    let heuristic = v.heuristic.as_deref().unwrap_or("unknown");

    format!(
        "{} {} Goal reached │ {} heuristic │ path of {} boards │ {} open │ {} closed",
        format_elapsed(),
        "✓".bright_green(),
        heuristic.white(),
        count(v.path_length).white(),
        count(v.open).bright_black(),
        count(v.closed).bright_black(),
    )
}

fn format_expand(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Expand │ f {:>4} │ g {:>4} │ h {:>4} │ depth {:>4}",
        format_elapsed(),
        "·".bright_black(),
        v.f.unwrap_or(0),
        v.g.unwrap_or(0),
        v.h.unwrap_or(0),
        v.depth.unwrap_or(0),
    )
    .bright_black()
    .to_string()
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
