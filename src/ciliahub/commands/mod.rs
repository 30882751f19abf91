use crate::model::GeneRecord;
use crate::usage::UsageEntry;
use std::path::PathBuf;

pub mod batch;
pub mod export;
pub mod popular;
pub mod search;
pub mod stats;
pub mod suggest;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result every command returns; the CLI decides how to render
/// it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<GeneRecord>,
    /// Set when no predicate was active: the caller should show a search
    /// prompt, never the full table.
    pub prompt: bool,
    pub stats: Option<stats::StatsReport>,
    pub popular: Vec<UsageEntry>,
    pub suggestions: Vec<suggest::Suggestion>,
    pub written_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<GeneRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_prompt(mut self) -> Self {
        self.prompt = true;
        self
    }

    pub fn with_stats(mut self, stats: stats::StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_popular(mut self, popular: Vec<UsageEntry>) -> Self {
        self.popular = popular;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<suggest::Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }
}
