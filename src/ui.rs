// UI layer: the interactive menu loop.
//
// The loop is an explicit state machine (see `State`). Each call to `step`
// consumes at most one line of input and performs at most one request, so
// every error path can report and hand control back to the main menu.

use crate::api::DogApi;
use crate::catalog::{normalize_name, BreedCatalog};
use crate::error::InputError;
use crate::view;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Duration;

/// Source of user input. Returns `Ok(None)` once input is exhausted.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Whether `ask` displays the prompt itself. When it does not, the loop
    /// writes the prompt to its own output first.
    fn draws_prompt(&self) -> bool {
        true
    }
}

/// How answers are read for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `dialoguer` prompts ([`TerminalPrompter`]).
    Terminal,
    /// Plain lines from stdin ([`LinePrompter`]).
    Lines,
}

impl InputMode {
    /// dialoguer draws and reads through stderr and returns an empty answer
    /// at once when stderr is not a terminal, so both ends must be attended.
    pub fn detect(stdin_is_terminal: bool, stderr_is_terminal: bool) -> Self {
        if stdin_is_terminal && stderr_is_terminal {
            InputMode::Terminal
        } else {
            InputMode::Lines
        }
    }
}

/// Interactive prompt on a real terminal, backed by `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(line))
    }
}

/// Reads one answer per line from any buffered reader (piped stdin, tests).
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        LinePrompter { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    /// Invalid UTF-8 is replaced rather than rejected, so a garbled line
    /// ends up as an invalid answer instead of an I/O error.
    fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn draws_prompt(&self) -> bool {
        false
    }
}

/// Entries of the main menu, typed as the digits 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowBreeds,
    RandomBreedImage,
    RandomSubBreedImage,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ShowBreeds),
            "2" => Ok(MenuChoice::RandomBreedImage),
            "3" => Ok(MenuChoice::RandomSubBreedImage),
            "4" => Ok(MenuChoice::Exit),
            other => Err(InputError::InvalidChoice(other.to_string())),
        }
    }
}

/// States of the interactive session. `Menu` is initial, `Exit` terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Menu,
    /// Catalog fetched and shown; waiting for a breed name. `sub_breed`
    /// says whether the user asked for a sub-breed image (menu 3).
    AwaitingBreed {
        catalog: BreedCatalog,
        sub_breed: bool,
    },
    AwaitingSubBreed {
        breed: String,
        sub_breeds: BTreeSet<String>,
    },
    Exit,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Menu => "menu",
            State::AwaitingBreed { .. } => "awaiting-breed",
            State::AwaitingSubBreed { .. } => "awaiting-sub-breed",
            State::Exit => "exit",
        }
    }
}

const MENU: &str = "\nWhat would you like to do?\n\
1. Show all breeds\n\
2. Get a random image from a breed\n\
3. Get a random image from a sub-breed\n\
4. Exit";

/// Drives the menu: reads input through `P`, talks to the API through `A`
/// and writes everything the user should see to `W`.
pub struct InteractionLoop<A, P, W> {
    api: A,
    prompter: P,
    out: W,
}

impl<A: DogApi, P: Prompter, W: Write> InteractionLoop<A, P, W> {
    pub fn new(api: A, prompter: P, out: W) -> Self {
        InteractionLoop { api, prompter, out }
    }

    /// Run the session until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Dog Image Browser!")?;
        let mut state = State::Menu;
        while state != State::Exit {
            let next = self.step(state)?;
            debug!("state -> {}", next.name());
            state = next;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Perform one transition of the state machine.
    pub fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::Menu => self.on_menu(),
            State::AwaitingBreed { catalog, sub_breed } => self.on_breed(&catalog, sub_breed),
            State::AwaitingSubBreed { breed, sub_breeds } => {
                self.on_sub_breed(&breed, &sub_breeds)
            }
            State::Exit => Ok(State::Exit),
        }
    }

    pub fn into_parts(self) -> (A, P, W) {
        (self.api, self.prompter, self.out)
    }

    fn on_menu(&mut self) -> Result<State> {
        writeln!(self.out, "{MENU}")?;
        let Some(input) = self.ask("Enter your choice (1-4)")? else {
            return Ok(State::Exit);
        };

        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::ShowBreeds) => {
                match self.load_catalog()? {
                    Some(catalog) => write!(self.out, "\n{}", view::render(&catalog))?,
                    None => writeln!(self.out, "No breeds available to display.")?,
                }
                Ok(State::Menu)
            }
            Ok(MenuChoice::RandomBreedImage) => self.show_catalog_for_lookup(false),
            Ok(MenuChoice::RandomSubBreedImage) => self.show_catalog_for_lookup(true),
            Ok(MenuChoice::Exit) => {
                writeln!(self.out, "Thank you for using the Dog Image Browser. Goodbye!")?;
                Ok(State::Exit)
            }
            Err(e) => self.reject(e),
        }
    }

    fn show_catalog_for_lookup(&mut self, sub_breed: bool) -> Result<State> {
        let Some(catalog) = self.load_catalog()? else {
            writeln!(self.out, "Unable to fetch breeds. Please try again later.")?;
            return Ok(State::Menu);
        };
        write!(self.out, "\n{}", view::render(&catalog))?;
        Ok(State::AwaitingBreed { catalog, sub_breed })
    }

    fn on_breed(&mut self, catalog: &BreedCatalog, sub_breed: bool) -> Result<State> {
        let Some(input) = self.ask("Enter breed name")? else {
            return Ok(State::Exit);
        };
        let breed = normalize_name(&input);
        let Some(sub_breeds) = catalog.sub_breeds(&breed) else {
            return self.reject(InputError::UnknownBreed(breed));
        };

        if !sub_breed {
            let spinner = spinner(&format!("Fetching a random {breed} image..."));
            let result = self.api.fetch_random_image(&breed);
            spinner.finish_and_clear();
            self.report_image(&breed, result)?;
            return Ok(State::Menu);
        }

        if sub_breeds.is_empty() {
            return self.reject(InputError::NoSubBreeds(breed));
        }
        write!(self.out, "\n{}", view::render_sub_breeds(&breed, sub_breeds))?;
        Ok(State::AwaitingSubBreed {
            breed,
            sub_breeds: sub_breeds.clone(),
        })
    }

    fn on_sub_breed(&mut self, breed: &str, sub_breeds: &BTreeSet<String>) -> Result<State> {
        let Some(input) = self.ask("Enter sub-breed name")? else {
            return Ok(State::Exit);
        };
        let sub_breed = normalize_name(&input);
        if !sub_breeds.contains(&sub_breed) {
            return self.reject(InputError::UnknownSubBreed {
                breed: breed.to_string(),
                sub_breed,
            });
        }

        let spinner = spinner(&format!("Fetching a random {breed} {sub_breed} image..."));
        let result = self.api.fetch_random_sub_breed_image(breed, &sub_breed);
        spinner.finish_and_clear();
        self.report_image(&format!("{breed} {sub_breed}"), result)?;
        Ok(State::Menu)
    }

    /// Fetch the catalog. Any failure, and an empty catalog, yield `None`
    /// after the cause has been shown to the user.
    fn load_catalog(&mut self) -> Result<Option<BreedCatalog>> {
        let spinner = spinner("Fetching breed list...");
        let result = self.api.fetch_all_breeds();
        spinner.finish_and_clear();

        match result {
            Ok(catalog) if !catalog.is_empty() => Ok(Some(catalog)),
            Ok(_) => Ok(None),
            Err(e) => {
                writeln!(
                    self.out,
                    "Error: Could not fetch breed list from API. Details: {e}"
                )?;
                Ok(None)
            }
        }
    }

    fn report_image<E: std::fmt::Display>(
        &mut self,
        label: &str,
        result: std::result::Result<String, E>,
    ) -> Result<()> {
        match result {
            Ok(url) => writeln!(self.out, "\nRandom image URL for {label}: {url}")?,
            Err(e) => writeln!(
                self.out,
                "Error: Could not get an image for {label} ({e}). Please try again."
            )?,
        }
        Ok(())
    }

    fn reject(&mut self, err: InputError) -> Result<State> {
        debug!("rejected input: {err:?}");
        writeln!(self.out, "Error: {err}")?;
        Ok(State::Menu)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.prompter.draws_prompt() {
            write!(self.out, "{prompt}: ")?;
        }
        self.out.flush()?;
        self.prompter.ask(prompt)
    }
}

/// Spinner shown on stderr while a request is in flight. Hidden when stderr
/// is not a terminal.
fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
