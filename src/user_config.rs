// ewig configuration
// Edit this file to customize your editor, then rebuild.

use crate::config::Config;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Movement
    config.bind("Up", "move-up");
    config.bind("Down", "move-down");
    config.bind("Left", "move-left");
    config.bind("Right", "move-right");
    config.bind("PageDown", "page-down");
    config.bind("PageUp", "page-up");
    config.bind("Home", "move-beginning-of-line");
    config.bind("^A", "move-beginning-of-line");
    config.bind("End", "move-end-of-line");
    config.bind("^E", "move-end-of-line");

    // Editing
    config.bind("Backspace", "delete-char");
    config.bind("Delete", "delete-char-right");
    config.bind("Tab", "insert-tab");
    config.bind("^I", "insert-tab");
    config.bind("Enter", "new-line");
    config.bind("^J", "new-line");
    config.bind("^K", "kill-line");

    // Region
    config.bind("^@", "start-selection"); // C-SPC
    config.bind("^W", "cut");
    config.bind("ESC-w", "copy"); // M-w
    config.bind("^Y", "paste");

    config.bind("^X^C", "quit");

    // Display
    config.set("tab_width", 8i64);
    config.set("message_fg", "yellow");
    config.set("selection_fg", "black");
    config.set("selection_bg", "yellow");
}
