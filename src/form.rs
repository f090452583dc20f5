use log::debug;

use crate::shell::{CreateOutcome, Shell};

pub const NAME_TAKEN: &str = "Node name already taken";
pub const IP_EXISTS: &str = "IP node already exists";

pub const NAME_TAKEN_FRIENDLY: &str = "This name is already taken. Please choose a different name.";
pub const IP_EXISTS_FRIENDLY: &str = "A node with your IP address already exists.";
pub const GENERIC_FAILURE: &str = "Failed to create node. Please try again.";

/// Maps a creation error message to the text shown under the form.
pub fn friendly_message(msg: &str) -> String {
    if msg.contains(NAME_TAKEN) {
        NAME_TAKEN_FRIENDLY.to_string()
    } else if msg.contains(IP_EXISTS) {
        IP_EXISTS_FRIENDLY.to_string()
    } else if msg.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        msg.to_string()
    }
}

/// State of the node creation form.
#[derive(Clone, Debug, Default)]
pub struct CreationForm {
    name: String,
    submitting: bool,
    error: Option<String>,
}

impl CreationForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct access for text widgets. Call [`CreationForm::input_changed`]
    /// when the widget reports an edit.
    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.input_changed();
    }

    pub fn input_changed(&mut self) {
        self.error = None;
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit control is enabled only with a non-blank name and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.name.trim().is_empty()
    }

    /// Hands the name to the shell. Returns `true` if a request went out.
    ///
    /// A precondition failure reported by the shell is shown right away.
    pub fn submit(&mut self, shell: &mut Shell) -> bool {
        if !self.can_submit() {
            return false;
        }

        self.submitting = true;
        self.error = None;
        match shell.create_node(&self.name) {
            Ok(()) => true,
            Err(err) => {
                self.fail(&err.to_string());
                false
            }
        }
    }

    /// Applies the outcome of the request started by [`CreationForm::submit`].
    pub fn resolve(&mut self, outcome: &CreateOutcome) {
        match outcome {
            Ok(node) => {
                debug!("form cleared after creating {}", node.name);
                self.name.clear();
                self.error = None;
                self.submitting = false;
            }
            Err(err) => self.fail(&err.to_string()),
        }
    }

    fn fail(&mut self, msg: &str) {
        self.error = Some(friendly_message(msg));
        self.submitting = false;
    }
}
