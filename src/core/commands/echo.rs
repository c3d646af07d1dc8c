use super::{Command, CommandError, Context, ExitCode, Outcome};

#[derive(Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Outcome, CommandError> {
        writeln!(ctx.out, "{}", args.join(" ").trim())?;
        Ok(Outcome::Continue(ExitCode::Success))
    }
}
