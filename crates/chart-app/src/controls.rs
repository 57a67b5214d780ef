//! Stdin command surface standing in for the page's control widgets.

/// A control event from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TogglePlayPause,
    SetSpeed(u32),
    Export,
    RefreshPrediction,
    RefreshHistory(Option<String>),
    Help,
    Quit,
}

/// Parse one input line; `None` for anything unrecognized.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "p" | "play" | "pause" => Some(Command::TogglePlayPause),
        "s" | "speed" => parts
            .next()
            .and_then(|v| v.parse().ok())
            .map(Command::SetSpeed),
        "d" | "download" | "export" => Some(Command::Export),
        "predict" => Some(Command::RefreshPrediction),
        "history" => Some(Command::RefreshHistory(parts.next().map(str::to_string))),
        "h" | "help" => Some(Command::Help),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

pub fn print_help() {
    println!("commands:");
    println!("  p             toggle play/pause");
    println!("  s <1-10>      playback speed (ticks/sec)");
    println!("  d             download chart data as CSV");
    println!("  predict       re-fetch the prediction");
    println!("  history [1y]  re-fetch historical closes");
    println!("  q             quit");
}
