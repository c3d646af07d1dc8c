use super::{Command, CommandError, Context, ExitCode, Outcome};

/// Names `type` reports as shell builtins. `cd` and `pwd` are looked up on
/// the search path like any other name.
pub const TYPE_BUILTINS: [&str; 3] = ["echo", "exit", "type"];

/// `type <name>`: says whether a name is a builtin or where it lives on
/// the search path.
#[derive(Clone, Copy, Default)]
pub struct TypeCommand;

impl Command for TypeCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        let name = args
            .first()
            .ok_or(CommandError::Usage("type <command>"))?;

        if TYPE_BUILTINS.contains(&name.as_str()) {
            writeln!(ctx.out, "{} is a shell builtin", name)?;
        } else if let Some(path) = ctx.state.search_paths.find(name, ctx.probe) {
            writeln!(ctx.out, "{} is {}", name, path)?;
        } else {
            writeln!(ctx.out, "{} not found", name)?;
        }

        Ok(Outcome::Continue(ExitCode::Success))
    }
}
