use std::io::{BufRead, Write};

use pixel_engine_edit::{EditMode, EngineError, GridEditState, GridUndoState, PaintOutcome};

use crate::{
    command::{parse_line, Command},
    settings::Settings,
};

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One editing session: a grid state plus the settings it was started with
pub struct Session {
    state: GridEditState,
    export_pixel_size: u32,
}

impl Session {
    pub fn new(side_length: usize, settings: &Settings) -> pixel_engine_edit::Result<Self> {
        let mut state = GridEditState::new(side_length)?;
        state.set_active_color(settings.default_color.clone());
        Ok(Self {
            state,
            export_pixel_size: settings.export_pixel_size,
        })
    }

    pub fn state(&self) -> &GridEditState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GridEditState {
        &mut self.state
    }

    /// Read commands from `input` until it ends or `quit` is given.
    ///
    /// Bad commands and failed edits are reported to `out` and logged; they
    /// never end the session. Returns the number of failed lines.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> std::io::Result<usize> {
        let mut failures = 0;
        for (line_no, line) in input.lines().enumerate() {
            let line = line?;
            let cmd = match parse_line(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(msg) => {
                    log::warn!("line {}: {}", line_no + 1, msg);
                    writeln!(out, "error: {msg}")?;
                    failures += 1;
                    continue;
                }
            };

            match self.execute(cmd, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => {
                    if err.is_recoverable() {
                        log::warn!("line {}: {}", line_no + 1, err);
                    } else {
                        log::error!("line {}: {}", line_no + 1, err);
                    }
                    writeln!(out, "error: {err}")?;
                    failures += 1;
                }
            }
        }
        Ok(failures)
    }

    /// Execute one command, writing any report to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> pixel_engine_edit::Result<Flow> {
        match cmd {
            Command::PointerDown(index) => {
                let outcome = self.state.pointer_down(index)?;
                self.report_pick(&outcome, out)?;
            }
            Command::PointerMove(index) => {
                self.state.pointer_move(index)?;
            }
            Command::PointerUp => self.state.pointer_up(),
            Command::PointerLeave => self.state.pointer_leave(),
            Command::Paint { index, color } => {
                let color = color.unwrap_or_else(|| self.state.active_color().to_string());
                self.state.paint(index, &color, EditMode::Draw)?;
            }
            Command::Erase(index) => {
                self.state.paint(index, "", EditMode::Erase)?;
            }
            Command::Pick(index) => {
                let outcome = self.state.paint(index, "", EditMode::Eyedropper)?;
                if let Some(color) = outcome.picked() {
                    self.state.set_active_color(color);
                }
                self.report_pick(&outcome, out)?;
            }
            Command::SetColor(color) => self.state.set_active_color(color),
            Command::SetMode(mode) => self.state.set_mode(mode),
            Command::Undo => {
                if !self.state.undo() {
                    writeln!(out, "nothing to undo")?;
                }
            }
            Command::Redo => {
                if !self.state.redo() {
                    writeln!(out, "nothing to redo")?;
                }
            }
            Command::Show => writeln!(out, "{}", self.state.text())?,
            Command::History => {
                writeln!(
                    out,
                    "step {} of {}{}",
                    self.state.history_step(),
                    self.state.history_len(),
                    if self.state.is_dirty() { " (modified)" } else { "" }
                )?;
            }
            Command::Text(text) => self.state.apply_text(&text)?,
            Command::Replace { pattern, replacement } => {
                let count = self.state.replace_in_text(&pattern, &replacement)?;
                writeln!(out, "replaced {count} occurrence(s)")?;
            }
            Command::Load(path) => self.state.load_json(&path)?,
            Command::Save(path) => self.state.save_json(&path)?,
            Command::Export { path, pixel_size } => {
                self.state.export_png(&path, pixel_size.unwrap_or(self.export_pixel_size))?;
            }
            Command::Import(path) => self.state.import_image(&path)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report_pick<W: Write>(&self, outcome: &PaintOutcome, out: &mut W) -> Result<(), EngineError> {
        if let Some(color) = outcome.picked() {
            if color.is_empty() {
                writeln!(out, "picked empty cell")?;
            } else {
                writeln!(out, "picked {color}")?;
            }
        }
        Ok(())
    }
}
