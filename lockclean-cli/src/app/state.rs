use std::path::{Path, PathBuf};

use lockclean_core::{
    DeletionOutcome, DeletionTally, LockcleanError, MatchSet, ScanProgress, format_count,
    relative_display, validate_root,
};
use tracing::{info, warn};

use super::action::Action;
use super::display::{Display, Tone};
use super::input::TextInput;
use super::message::{Effect, Msg};

/// Lines moved per page scroll
const PAGE_SIZE: usize = 10;

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a folder path
    Input,
    /// Last submitted path was rejected; waiting for another
    Error,
    /// Scan in progress
    Searching,
    /// Matches listed, waiting for yes/no
    Confirm,
    /// Removing files one at a time
    Deleting,
    /// All deletions attempted
    Summary,
    /// Nothing left to do (no matches, cancelled, or quitting)
    Quit,
}

/// Pending choice in the confirmation view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Proceed,
    Cancel,
}

impl Selection {
    pub fn flipped(self) -> Self {
        match self {
            Selection::Proceed => Selection::Cancel,
            Selection::Cancel => Selection::Proceed,
        }
    }
}

/// The single asynchronous operation the controller is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlight {
    Scan,
    Delete(usize),
}

/// Application state and the transition function driving it
pub struct AppState {
    /// Current phase
    pub phase: Phase,
    /// Whether app should quit
    pub should_quit: bool,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Lines scrolled back from the bottom of the content
    pub scroll_back: usize,
    /// Match extension, used in messages
    extension: String,
    /// Folder prompt
    input: TextInput,
    /// Validated scan root
    root: Option<PathBuf>,
    /// Result of the completed scan
    matches: Option<MatchSet>,
    /// Yes/No choice in the confirmation view
    selection: Selection,
    /// Counts of deleted and failed files
    tally: DeletionTally,
    /// Every outcome received, in order
    outcomes: Vec<DeletionOutcome>,
    /// Latest scan heartbeat
    progress: ScanProgress,
    error_message: Option<String>,
    quit_message: Option<String>,
    in_flight: Option<InFlight>,
    display: Display,
}

impl AppState {
    pub fn new(extension: impl Into<String>) -> Self {
        let mut state = Self {
            phase: Phase::Input,
            should_quit: false,
            spinner_frame: 0,
            scroll_back: 0,
            extension: extension.into(),
            input: TextInput::default(),
            root: None,
            matches: None,
            selection: Selection::default(),
            tally: DeletionTally::default(),
            outcomes: Vec::new(),
            progress: ScanProgress::default(),
            error_message: None,
            quit_message: None,
            in_flight: None,
            display: Display::default(),
        };
        state.render();
        state
    }

    /// Apply the startup folder, if any.
    ///
    /// A valid folder skips the prompt and starts the scan; an invalid one
    /// lands in the error phase with the path left in the prompt for editing.
    pub fn start(&mut self, folder: Option<&str>) -> Option<Effect> {
        let folder = folder?;
        self.input.set_value(folder);
        let effect = self.submit();
        self.render();
        effect
    }

    /// Process one message and return the follow-up work, if any
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        let effect = match msg {
            Msg::Action(action) => self.handle_action(action),
            Msg::ScanProgress(progress) => {
                if self.in_flight == Some(InFlight::Scan) {
                    self.progress = progress;
                }
                None
            }
            Msg::ScanComplete(matches) => {
                self.finish_scan(matches);
                None
            }
            Msg::DeleteOutcome(outcome) => self.record_outcome(outcome),
            Msg::Resize(_, _) => None,
            Msg::Tick => {
                self.tick_spinner();
                None
            }
        };
        self.render();
        effect
    }

    // --- Accessors ---

    /// Content for the current phase
    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn matches(&self) -> Option<&MatchSet> {
        self.matches.as_ref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn tally(&self) -> &DeletionTally {
        &self.tally
    }

    pub fn progress(&self) -> &ScanProgress {
        &self.progress
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether a scan or deletion is outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
    }

    // --- Transitions ---

    fn handle_action(&mut self, action: Action) -> Option<Effect> {
        if action == Action::Quit {
            self.quit();
            return None;
        }

        match self.phase {
            Phase::Input | Phase::Error => self.handle_input_action(action),
            Phase::Confirm => {
                match action {
                    Action::SelectProceed => self.selection = Selection::Proceed,
                    Action::SelectCancel => self.selection = Selection::Cancel,
                    Action::ToggleSelection => self.selection = self.selection.flipped(),
                    Action::Confirm => return self.confirm(),
                    other => self.scroll(other),
                }
                None
            }
            Phase::Deleting | Phase::Summary | Phase::Quit => {
                self.scroll(action);
                None
            }
            Phase::Searching => None,
        }
    }

    fn handle_input_action(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::InsertChar(c) => self.input.insert(c),
            Action::DeleteBackward => self.input.delete_backward(),
            Action::DeleteForward => self.input.delete_forward(),
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::CursorHome => self.input.move_home(),
            Action::CursorEnd => self.input.move_end(),
            Action::Submit => return self.submit(),
            _ => {}
        }
        None
    }

    fn submit(&mut self) -> Option<Effect> {
        if self.in_flight.is_some() {
            return None;
        }

        let submitted = self.input.value().trim().to_string();
        match validate_root(&submitted) {
            Ok(root) => {
                info!(root = %root.display(), "starting scan");
                self.error_message = None;
                self.progress = ScanProgress::default();
                self.root = Some(root.clone());
                self.phase = Phase::Searching;
                self.in_flight = Some(InFlight::Scan);
                Some(Effect::Scan { root })
            }
            Err(e) => {
                info!(input = %submitted, error = %e, "rejected folder");
                self.error_message = Some(error_text(&e, &submitted));
                self.phase = Phase::Error;
                None
            }
        }
    }

    fn finish_scan(&mut self, matches: MatchSet) {
        if self.phase != Phase::Searching || self.in_flight != Some(InFlight::Scan) {
            warn!(phase = ?self.phase, "ignoring unexpected scan result");
            return;
        }
        self.in_flight = None;

        info!(count = matches.len(), "scan complete");
        if matches.is_empty() {
            self.quit_message = Some(format!(
                "No {} files found in '{}'.",
                self.extension,
                matches.root().display()
            ));
            self.phase = Phase::Quit;
            return;
        }

        self.matches = Some(matches);
        self.selection = Selection::Proceed;
        self.scroll_back = 0;
        self.phase = Phase::Confirm;
    }

    fn confirm(&mut self) -> Option<Effect> {
        match self.selection {
            Selection::Proceed => {
                let matches = self.matches.clone()?;
                if self.in_flight.is_some() {
                    return None;
                }
                self.tally = DeletionTally::default();
                self.outcomes.clear();
                self.scroll_back = 0;
                self.phase = Phase::Deleting;
                self.in_flight = Some(InFlight::Delete(0));
                Some(Effect::Delete { matches, index: 0 })
            }
            Selection::Cancel => {
                info!("deletion cancelled");
                self.quit_message = Some("Operation cancelled.".to_string());
                self.phase = Phase::Quit;
                None
            }
        }
    }

    fn record_outcome(&mut self, outcome: DeletionOutcome) -> Option<Effect> {
        let expected = Some(InFlight::Delete(outcome.index));
        if self.phase != Phase::Deleting || self.in_flight != expected {
            warn!(index = outcome.index, phase = ?self.phase, "ignoring unexpected deletion outcome");
            return None;
        }
        let matches = self.matches.clone()?;

        self.tally.record(&outcome);
        let index = outcome.index;
        self.outcomes.push(outcome);
        self.scroll_back = 0;

        if Some(index) == matches.last_index() {
            info!(
                deleted = self.tally.deleted,
                failed = self.tally.failed.len(),
                total = matches.len(),
                "deletion complete"
            );
            self.in_flight = None;
            self.phase = Phase::Summary;
            return None;
        }

        let next = index + 1;
        self.in_flight = Some(InFlight::Delete(next));
        Some(Effect::Delete {
            matches,
            index: next,
        })
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.phase = Phase::Quit;
        self.should_quit = true;
    }

    fn scroll(&mut self, action: Action) {
        match action {
            Action::ScrollUp => self.scroll_back += 1,
            Action::ScrollDown => self.scroll_back = self.scroll_back.saturating_sub(1),
            Action::PageUp => self.scroll_back += PAGE_SIZE,
            Action::PageDown => self.scroll_back = self.scroll_back.saturating_sub(PAGE_SIZE),
            _ => {}
        }
    }

    // --- Display ---

    fn render(&mut self) {
        let mut display = Display::default();

        match self.phase {
            Phase::Input => self.render_prompt(&mut display),
            Phase::Error => {
                self.render_prompt(&mut display);
                if let Some(message) = &self.error_message {
                    display.blank();
                    display.text(Tone::Warning, message.clone());
                }
            }
            Phase::Searching => {
                let root = self.root_label();
                display.text(
                    Tone::Subtle,
                    format!("Searching for {} files in '{}'...", self.extension, root),
                );
                display.blank();
                display.text(
                    Tone::Subtle,
                    format!(
                        "{} directories scanned, {} found",
                        format_count(self.progress.dirs_scanned),
                        format_count(self.progress.matches_found)
                    ),
                );
            }
            Phase::Confirm => self.render_confirm(&mut display),
            Phase::Deleting => self.render_outcomes(&mut display),
            Phase::Summary => {
                self.render_outcomes(&mut display);
                self.render_summary(&mut display);
            }
            Phase::Quit => {
                if let Some(message) = &self.quit_message {
                    display.text(Tone::Plain, message.clone());
                    display.blank();
                }
                display.text(Tone::Subtle, "See you later!");
            }
        }

        self.display = display;
    }

    fn render_prompt(&self, display: &mut Display) {
        display.text(
            Tone::Plain,
            format!(
                "Please enter the folder path where you want to search for {} files:",
                self.extension
            ),
        );
        display.blank();
        display.input(self.input.value(), self.input.cursor());
    }

    fn render_confirm(&self, display: &mut Display) {
        let Some(matches) = &self.matches else {
            return;
        };

        display.text(
            Tone::Plain,
            format!(
                "Found {} {} files in '{}':",
                matches.len(),
                self.extension,
                matches.root().display()
            ),
        );
        display.blank();
        for path in matches.iter() {
            display.text(Tone::File, relative_display(path, matches.root()));
        }
        display.blank();
        display.text(Tone::Highlight, "Do you want to proceed with deletion?");
        display.blank();
        display.choice(self.selection);
    }

    fn render_outcomes(&self, display: &mut Display) {
        display.text(Tone::Plain, "Deleting files...");
        display.blank();
        for outcome in &self.outcomes {
            if outcome.success {
                display.text(
                    Tone::Success,
                    format!("Deleted: {}", outcome.path.display()),
                );
            } else {
                display.text(
                    Tone::Warning,
                    format!("Failed to delete: {}", outcome.path.display()),
                );
            }
        }
    }

    fn render_summary(&self, display: &mut Display) {
        let total = self.matches.as_ref().map(MatchSet::len).unwrap_or(0);

        display.blank();
        display.text(
            Tone::Plain,
            format!(
                "Operation complete. {} out of {} files were deleted.",
                self.tally.deleted, total
            ),
        );
        if !self.tally.failed.is_empty() {
            display.blank();
            display.text(Tone::Warning, "Failed to delete the following files:");
            for path in &self.tally.failed {
                display.text(Tone::Warning, format!("  {}", path.display()));
            }
        }
        display.blank();
        display.text(Tone::Subtle, "Press q to quit.");
    }

    fn root_label(&self) -> String {
        self.root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

/// User-facing text for a rejected folder
fn error_text(error: &LockcleanError, submitted: &str) -> String {
    match error {
        LockcleanError::EmptyPath => "Error: No folder path provided.".to_string(),
        LockcleanError::PathNotFound(_) => {
            format!("Error: The folder '{}' does not exist.", submitted)
        }
        LockcleanError::NotADirectory(_) => format!("Error: '{}' is not a folder.", submitted),
        LockcleanError::Io(e) => format!("Error: Cannot open '{}': {}", submitted, e),
    }
}
