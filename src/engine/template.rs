//! In-memory translation template backed by a `polib` catalog.
//!
//! Entries are unique by their exact `msgid`. Location comments live in the
//! message's extracted comments (`#.` lines), one location per line.
//!
//! The header entry is kept as raw text and written back verbatim. Only the
//! entries after it go through `polib`, behind a complete stand-in header,
//! since `polib` cannot read headers lacking keys such as `Plural-Forms`.

use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use polib::{
    catalog::Catalog,
    message::{Message, MessageMutView, MessageView},
    metadata::CatalogMetadata,
    po_file,
};
use tempfile::NamedTempFile;

use crate::header::{format_timestamp, now_local};

/// Header entry with every key `polib` requires when reading a catalog.
const CATALOG_HEADER: &str = r#"msgid ""
msgstr ""
"Project-Id-Version: \n"
"POT-Creation-Date: \n"
"PO-Revision-Date: \n"
"Last-Translator: \n"
"Language-Team: \n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Language: \n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

"#;

const ENTRY_KEYWORDS: &[&str] = &["msgctxt", "msgid", "msgid_plural", "msgstr"];

/// Read-only view of one template entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub locations: Vec<String>,
}

pub struct Template {
    catalog: Catalog,
    /// Position of each msgid in catalog order. First occurrence wins.
    index: HashMap<String, usize>,
    /// Header block, from the top of the file through the `msgid ""` entry.
    header: String,
    /// File the template was loaded from, if any.
    origin: Option<PathBuf>,
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("index", &self.index)
            .field("header", &self.header)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl Template {
    /// Create an empty template that has not been associated with a file yet.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(CatalogMetadata::new()),
            index: HashMap::new(),
            header: default_header(),
            origin: None,
        }
    }

    /// Load an existing template file and remember it as the save target.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        let (header, body) = split_header(&content);

        let catalog = parse_entries(body)
            .with_context(|| format!("Could not parse {} as a template", path.display()))?;

        let mut index = HashMap::new();
        for (position, message) in catalog.messages().enumerate() {
            index.entry(message.msgid().to_string()).or_insert(position);
        }

        Ok(Self {
            catalog,
            index,
            header: header.map_or_else(default_header, str::to_string),
            origin: Some(path.to_path_buf()),
        })
    }

    /// Load `path` when it already holds data, otherwise start empty.
    ///
    /// Returns the template and whether existing content was loaded.
    pub fn open_or_new(path: &Path) -> Result<(Self, bool)> {
        let has_content = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
        if has_content {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::new(), false))
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Locations recorded for `text`, in first-seen order.
    pub fn locations(&self, text: &str) -> Option<Vec<String>> {
        let position = *self.index.get(text)?;
        self.catalog
            .messages()
            .nth(position)
            .map(|message| split_locations(message.comments()))
    }

    /// All entries in template order.
    pub fn entries(&self) -> Vec<Entry> {
        self.catalog
            .messages()
            .map(|message| Entry {
                text: message.msgid().to_string(),
                locations: split_locations(message.comments()),
            })
            .collect()
    }

    /// Append a new entry with a single location. The caller guarantees `text` is absent.
    pub(crate) fn push(&mut self, text: &str, location: &str) {
        let message = Message::build_singular()
            .with_msgid(text.to_string())
            .with_comments(location.to_string())
            .done();
        self.catalog.append_or_update(message);
        let position = self.catalog.messages().count() - 1;
        self.index.insert(text.to_string(), position);
    }

    /// Replace the location lines of an existing entry.
    pub(crate) fn set_locations(&mut self, text: &str, locations: &[String]) -> bool {
        let Some(&position) = self.index.get(text) else {
            return false;
        };
        match self.catalog.messages_mut().nth(position) {
            Some(mut message) => {
                *message.comments_mut() = locations.join("\n");
                true
            }
            None => false,
        }
    }

    /// Save back to the file this template was loaded from.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.origin else {
            bail!("Template has no associated file; use save_as");
        };
        self.write(path)
    }

    /// Write to `path` and associate the template with it.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write(path)?;
        self.origin = Some(path.to_path_buf());
        Ok(())
    }

    fn write(&self, path: &Path) -> Result<()> {
        po_file::write(&self.catalog, path)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
        let written = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;

        // Swap the header `polib` generated for the one this template carries.
        let (_, body) = split_header(&written);
        let mut content = self.header.clone();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(body);

        fs::write(path, content)
            .with_context(|| format!("Failed to write template: {}", path.display()))
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

/// Split template text into its header block and the entries after it.
///
/// Leading blank lines are skipped. The header block runs up to the first
/// blank line and must contain the `msgid ""` entry; otherwise there is no
/// header and every line belongs to the entries.
pub fn split_header(content: &str) -> (Option<&str>, &str) {
    let mut lines = content.split_inclusive('\n').peekable();
    let mut start = 0;
    while let Some(line) = lines.next_if(|line| line.trim().is_empty()) {
        start += line.len();
    }

    let mut end = start;
    let mut has_header_entry = false;
    for line in lines {
        if line.trim().is_empty() {
            break;
        }
        if line.trim_end() == "msgid \"\"" {
            has_header_entry = true;
        }
        end += line.len();
    }

    if has_header_entry {
        (Some(&content[start..end]), &content[end..])
    } else {
        (None, &content[start..])
    }
}

/// Parse the entries of a template, `polib` reading them behind [`CATALOG_HEADER`].
fn parse_entries(body: &str) -> Result<Catalog> {
    check_entry_lines(body)?;

    let mut scratch = NamedTempFile::new().context("Failed to create a scratch file")?;
    scratch
        .write_all(CATALOG_HEADER.as_bytes())
        .and_then(|_| scratch.write_all(body.as_bytes()))
        .and_then(|_| scratch.flush())
        .context("Failed to write a scratch file")?;

    po_file::parse(scratch.path()).map_err(|err| anyhow!("{err}"))
}

/// Reject keyword and continuation lines whose value is not a quoted string.
fn check_entry_lines(body: &str) -> Result<()> {
    for (number, line) in body.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let value = if line.starts_with('"') {
            line
        } else {
            match line.split_once(' ') {
                Some((keyword, value)) if is_entry_keyword(keyword) => value,
                _ => continue,
            }
        };
        if value.len() < 2 || !value.starts_with('"') || !value.ends_with('"') {
            bail!("line {} of the entries is not a quoted string: {}", number + 1, line);
        }
    }
    Ok(())
}

fn is_entry_keyword(keyword: &str) -> bool {
    ENTRY_KEYWORDS.contains(&keyword) || (keyword.starts_with("msgstr[") && keyword.ends_with(']'))
}

/// Header of a template created from scratch, in the layout `xgettext` uses.
fn default_header() -> String {
    let timestamp = format_timestamp(now_local()).unwrap_or_default();
    format!(
        r#"# SOME DESCRIPTIVE TITLE.
# Copyright (C) YEAR THE PACKAGE'S COPYRIGHT HOLDER
# This file is distributed under the same license as the PACKAGE package.
# FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.
#
#, fuzzy
msgid ""
msgstr ""
"Project-Id-Version: PACKAGE VERSION\n"
"Report-Msgid-Bugs-To: \n"
"POT-Creation-Date: {timestamp}\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
"Language-Team: LANGUAGE <LL@li.org>\n"
"Language: \n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"#
    )
}

fn split_locations(comments: &str) -> Vec<String> {
    comments
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
