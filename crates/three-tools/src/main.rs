//! three-tools - Interactive scaffolding for three.js webpack apps

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "three-tools")]
#[command(about = "Scaffold a new three.js app with a webpack toolchain")]
#[command(version)]
pub struct Args {
    /// Echo npm output while dependencies install
    #[arg(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C: restore the cursor and leave any partial project behind
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = three_scaffold::tui::run(args.verbose).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
