use std::ffi::OsString;
use std::path::Path;

/// The external build-and-run command; the file path is appended last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InvocationCommand {
    /// Splits a non-empty argv template into program and leading arguments.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn to_args(&self, file: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push(file.as_os_str().to_os_string());
        args
    }
}

impl Default for InvocationCommand {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
            args: vec!["run".to_string(), "--".to_string()],
        }
    }
}
