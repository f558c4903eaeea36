/// User actions that can be performed in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the folder prompt
    InsertChar(char),
    /// Delete the character before the cursor
    DeleteBackward,
    /// Delete the character under the cursor
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Submit the folder prompt
    Submit,
    /// Select "Yes" in the confirmation
    SelectProceed,
    /// Select "No" in the confirmation
    SelectCancel,
    /// Flip between "Yes" and "No"
    ToggleSelection,
    /// Accept the current selection
    Confirm,
    /// Scroll content up one line
    ScrollUp,
    /// Scroll content down one line
    ScrollDown,
    /// Scroll content up by a page
    PageUp,
    /// Scroll content down by a page
    PageDown,
    /// Quit the application
    Quit,
    /// No action
    None,
}
