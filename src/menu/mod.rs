/*!
Console menu.

`MenuController` runs the `ShowMenu -> Dispatch -> ShowMenu | Exit` loop over any line-based input
and output, handing drawing off to a `Renderer`.
*/

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    campus::CampusGraph,
    gui::{RenderError, Renderer},
    routing::find_shortest_path,
};

pub const MENU_TITLE: &str = "Campus Navigation System";
pub const OPTION_PROMPT: &str = "Choose an option (1, 2, or 3): ";
pub const START_PROMPT: &str = "Enter the start node: ";
pub const END_PROMPT: &str = "Enter the end node: ";
pub const INVALID_NODE_MESSAGE: &str =
    "Invalid start or end node. Please make sure the nodes exist in the campus layout.";
pub const INVALID_OPTION_MESSAGE: &str = "Invalid option.";
pub const EXIT_MESSAGE: &str = "Exiting the system.";

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    ShowMenu,
    Dispatch(String),
    Exit,
}

pub struct MenuController<'a, I, O, R> {
    campus: &'a CampusGraph,
    input: I,
    output: O,
    renderer: R,
}

impl<'a, I, O, R> MenuController<'a, I, O, R>
where
    I: BufRead,
    O: Write,
    R: Renderer,
{
    pub fn new(campus: &'a CampusGraph, input: I, output: O, renderer: R) -> Self {
        Self {
            campus,
            input,
            output,
            renderer,
        }
    }

    /// Runs until option 3 is chosen or the input ends.
    pub fn run(&mut self) -> Result<(), MenuError> {
        let mut state = MenuState::ShowMenu;
        loop {
            state = match state {
                MenuState::ShowMenu => self.show_menu()?,
                MenuState::Dispatch(option) => self.dispatch(&option)?,
                MenuState::Exit => return Ok(()),
            };
        }
    }

    fn show_menu(&mut self) -> Result<MenuState, MenuError> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU_TITLE}")?;
        writeln!(self.output, "1. Visualize graph")?;
        writeln!(self.output, "2. Find shortest path")?;
        writeln!(self.output, "3. Exit")?;
        Ok(match self.prompt(OPTION_PROMPT)? {
            Some(option) => MenuState::Dispatch(option),
            None => MenuState::Exit,
        })
    }

    fn dispatch(&mut self, option: &str) -> Result<MenuState, MenuError> {
        debug!("[menu] Option {:?}", option);
        match option {
            "1" => {
                self.renderer.render(self.campus, None)?;
                Ok(MenuState::ShowMenu)
            }
            "2" => self.route_between_landmarks(),
            "3" => {
                writeln!(self.output, "{EXIT_MESSAGE}")?;
                Ok(MenuState::Exit)
            }
            _ => {
                writeln!(self.output, "{INVALID_OPTION_MESSAGE}")?;
                Ok(MenuState::ShowMenu)
            }
        }
    }

    fn route_between_landmarks(&mut self) -> Result<MenuState, MenuError> {
        let Some(start) = self.prompt(START_PROMPT)? else {
            return Ok(MenuState::Exit);
        };
        let Some(end) = self.prompt(END_PROMPT)? else {
            return Ok(MenuState::Exit);
        };

        if !self.campus.contains(&start) || !self.campus.contains(&end) {
            writeln!(self.output, "{INVALID_NODE_MESSAGE}")?;
            return Ok(MenuState::ShowMenu);
        }

        match find_shortest_path(self.campus, &start, &end) {
            Ok(route) => {
                writeln!(self.output, "Shortest Path: {}", landmark_list(&route.nodes))?;
                writeln!(self.output, "Total Distance Travelled: {}", route.total_distance)?;
                self.output.flush()?;
                self.renderer.render(self.campus, Some(&route))?;
            }
            Err(e) => {
                warn!("[menu] Route lookup failed: {}", e);
                writeln!(self.output, "{e}")?;
            }
        }
        Ok(MenuState::ShowMenu)
    }

    /// Prints `text` and reads one trimmed line; `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("[menu] End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Formats names as `['A', 'B']`.
fn landmark_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
    format!("[{}]", quoted.join(", "))
}
