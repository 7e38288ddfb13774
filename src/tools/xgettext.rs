use std::{ffi::OsString, path::Path, process::Command};

use anyhow::Result;

pub const PROGRAM: &str = "xgettext";

/// One `xgettext` run over the files of a single language.
#[derive(Debug, Clone)]
pub struct Xgettext<'a> {
    pub keywords: &'a [String],
    pub output: &'a Path,
    /// Append to the existing output instead of overwriting it.
    pub join_existing: bool,
    pub language: &'a str,
    pub files: &'a [String],
}

impl Xgettext<'_> {
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .keywords
            .iter()
            .map(|keyword| format!("--keyword={}", keyword).into())
            .collect();
        args.extend(
            ["--no-wrap", "--sort-by-file", "--add-comments", "--from-code=UTF-8"]
                .map(OsString::from),
        );
        let mut output = OsString::from("--output=");
        output.push(self.output);
        args.push(output);
        if self.join_existing {
            args.push("--join-existing".into());
        }
        args.push(format!("--language={}", self.language).into());
        args.extend(self.files.iter().map(OsString::from));
        args
    }

    /// Run inside `working_dir`, which relative file names are resolved against.
    pub fn run(&self, working_dir: &Path) -> Result<()> {
        super::run(Command::new(PROGRAM).current_dir(working_dir).args(self.args()))?;
        Ok(())
    }
}
