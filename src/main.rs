// Entrypoint for the Dog Image Browser.
// - Keeps `main` small: set up logging, create an API client and hand it to
//   the interaction loop.
// - Logging is off unless RUST_LOG asks for it, so the menu stays readable.

use dog_browser_cli::api::ApiClient;
use dog_browser_cli::ui::{InputMode, InteractionLoop, LinePrompter, Prompter, TerminalPrompter};
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let api = ApiClient::new()?;

    match InputMode::detect(io::stdin().is_terminal(), io::stderr().is_terminal()) {
        InputMode::Terminal => run(api, TerminalPrompter),
        InputMode::Lines => run(api, LinePrompter::new(io::stdin().lock())),
    }
}

fn run<P: Prompter>(api: ApiClient, prompter: P) -> anyhow::Result<()> {
    log::info!("starting session");
    InteractionLoop::new(api, prompter, io::stdout().lock()).run()
}
