#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

pub const TIMEOUT_TEXT: &str = "The request timed out. Please try again.";
pub const FAILURE_TEXT: &str = "Something went wrong. Please try again.";

/// State for one mounted chat widget.
///
/// Held in a single `RwSignal` shared by the component tree and the
/// `WidgetHandle` exported to JavaScript. Transitions are plain methods so
/// they can be tested without a browser.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub open: bool,
    /// `true` while a chat request is in flight; further sends are ignored.
    pub loading: bool,
    pub status: Status,
    pub bubbles: Vec<Bubble>,
    /// Tenant config, fetched on the first send and reused afterwards.
    pub config: Option<serde_json::Value>,
}

/// A single rendered chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bubble {
    pub id: usize,
    pub role: Role,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::User => "cbw-bubble cbw-bubble-user",
            Self::Bot => "cbw-bubble cbw-bubble-bot",
        }
    }
}

/// Footer status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ready,
    Loading,
    Thinking,
}

impl Status {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Loading => "Loading...",
            Self::Thinking => "Thinking...",
        }
    }
}

/// How a send attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The server answered; carries the text to show (reply or error).
    Answered(String),
    TimedOut,
    Failed,
}

impl SendOutcome {
    #[must_use]
    pub fn bot_text(&self) -> &str {
        match self {
            Self::Answered(text) => text,
            Self::TimedOut => TIMEOUT_TEXT,
            Self::Failed => FAILURE_TEXT,
        }
    }
}

impl WidgetState {
    /// Show the panel. The welcome bubble is added only while the log is empty.
    pub fn open(&mut self, welcome: &str) {
        self.open = true;
        if self.bubbles.is_empty() {
            self.push(Role::Bot, welcome);
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self, welcome: &str) {
        if self.open {
            self.close();
        } else {
            self.open(welcome);
        }
    }

    /// Start sending `input`.
    ///
    /// Returns the trimmed message to send, or `None` when a request is
    /// already in flight or the input is blank. On `Some`, the user bubble has
    /// been appended and the widget is marked loading.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if self.loading {
            return None;
        }
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();
        self.push(Role::User, &text);
        self.loading = true;
        self.status = Status::Thinking;
        Some(text)
    }

    /// Mark the tenant config fetch as started.
    pub fn begin_config_load(&mut self) {
        self.status = Status::Loading;
    }

    /// Cache a successfully fetched tenant config.
    pub fn store_config(&mut self, config: serde_json::Value) {
        self.config = Some(config);
        self.status = Status::Thinking;
    }

    /// Finish the in-flight send: append the bot bubble and return to ready.
    pub fn finish_send(&mut self, outcome: &SendOutcome) {
        self.push(Role::Bot, outcome.bot_text());
        self.loading = false;
        self.status = Status::Ready;
    }

    fn push(&mut self, role: Role, text: &str) {
        let id = self.bubbles.len();
        self.bubbles.push(Bubble { id, role, text: text.to_owned() });
    }
}
