use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// How a candidate file's leading bytes are judged to be text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDetection {
    /// MIME sniffing; only `text/*` media types pass.
    #[default]
    Sniff,
    /// `content_inspector`; anything it does not call binary passes.
    Inspect,
    /// Every readable file passes.
    None,
}
pub const DEFAULT_SNIFF_LEN: usize = 512;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipcatOptions {
    pub targets: Vec<PathBuf>,
    pub exclude: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub text_detection: TextDetection,
    pub sniff_len: usize,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub sort_entries: bool,
}
impl Default for ClipcatOptions {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            exclude: Vec::new(),
            ignore_patterns: Vec::new(),
            text_detection: TextDetection::Sniff,
            sniff_len: DEFAULT_SNIFF_LEN,
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
            sort_entries: true,
        }
    }
}
/// Splits a comma-separated exclusion string into trimmed, non-empty entries.
pub fn parse_exclude_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
#[derive(Debug, Default)]
pub struct ClipcatBuilder {
    options: ClipcatOptions,
}
impl ClipcatBuilder {
    pub fn new<I, P>(targets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            options: ClipcatOptions {
                targets: targets.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        }
    }
    pub fn target(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.targets.push(path.into());
        self
    }
    pub fn exclude(mut self, substrings: Vec<String>) -> Self {
        self.options.exclude = substrings;
        self
    }
    pub fn exclude_list(mut self, raw: &str) -> Self {
        self.options.exclude = parse_exclude_list(raw);
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn text_detection(mut self, method: TextDetection) -> Self {
        self.options.text_detection = method;
        self
    }
    pub fn sniff_len(mut self, len: usize) -> Self {
        self.options.sniff_len = len;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn build(self) -> ClipcatOptions {
        self.options
    }
}
