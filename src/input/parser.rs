/// One input line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Splits `line` on single spaces after trimming the ends.
    ///
    /// Runs of spaces are not collapsed: `"echo a  b"` yields the arguments
    /// `["a", "", "b"]`. The first token is the name even when it is empty.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.trim().split(' ').map(str::to_owned);
        let name = tokens.next().unwrap_or_default();

        Self {
            name,
            args: tokens.collect(),
        }
    }

    /// True for a blank input line.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.args.is_empty()
    }
}
