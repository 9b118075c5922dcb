use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// The three screens, in tab order. Doubles as the `--tab` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Tab {
    Home,
    Chat,
    Music,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Chat, Tab::Music];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Chat => "Chat",
            Tab::Music => "Music",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Chat => 1,
            Tab::Music => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Chat,
            Tab::Chat => Tab::Music,
            Tab::Music => Tab::Home,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Home => Tab::Music,
            Tab::Chat => Tab::Home,
            Tab::Music => Tab::Chat,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Home => write!(f, "home"),
            Tab::Chat => write!(f, "chat"),
            Tab::Music => write!(f, "music"),
        }
    }
}
