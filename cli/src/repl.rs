use crate::{
    command::{Command, HELP},
    err::*,
    render,
};
use colored::Colorize;
use stab_driver::{Conf, Session, SessionError};
use stab_navigate::Transition;
use std::io::Write;

pub enum Reply {
    Text(String),
    Quit,
}

pub struct Repl {
    session: Session,
    width: usize,
}

impl Repl {
    pub fn new(conf: Conf) -> Self {
        let width = conf.view.width;
        Repl { session: Session::new(conf), width }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run_line(&mut self, line: &str) -> Result<Reply> {
        self.exec(line.parse()?)
    }

    pub fn exec(&mut self, cmd: Command) -> Result<Reply> {
        log::trace!("{:?}", cmd);
        let text = match cmd {
            | Command::Nothing => String::new(),
            | Command::Add { id, a, b } => {
                let seg = match id {
                    | Some(id) => self.session.add_named(id, a, b)?,
                    | None => self.session.add(a, b)?,
                };
                format!("added {}\n", seg)
            }
            | Command::Random(count) => {
                let count = count.unwrap_or(self.session.conf().random.count);
                self.session.randomize(count)?;
                format!("added {} random intervals\n", count)
                    + &render::plot(&self.session.intervals(), self.width)
            }
            | Command::List => render::plot(&self.session.intervals(), self.width),
            | Command::Build => {
                let tree = self.session.build()?;
                let summary =
                    format!("built {} nodes, height {}\n", tree.len(), tree.height());
                summary + &self.tree_view()? + &self.position()?
            }
            | Command::Query(x) => {
                self.session.query(x)?;
                self.position()?
            }
            | Command::Stab(x) => {
                let Some(tree) = self.session.tree() else {
                    return Err(SessionError::PreconditionViolation(
                        "build the tree before stabbing".to_owned(),
                    )
                    .into());
                };
                format!("{} is contained in {}\n", x, render::names(tree, &tree.stab(x)))
            }
            | Command::Act(action) => {
                let t = self.session.perform(action);
                self.act(t, &action.to_string())?
            }
            | Command::Step => {
                let t = self.session.step();
                self.act(t, "step")?
            }
            | Command::Show => self.position()?,
            | Command::Tree => self.tree_view()?,
            | Command::Reset => {
                self.session.reset();
                "back to drawing\n".to_owned()
            }
            | Command::Help => HELP.to_owned(),
            | Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn act(&self, t: Option<Transition>, what: &str) -> Result<String> {
        let Some(t) = t else {
            return Err(SessionError::PreconditionViolation(format!(
                "nothing to navigate; {} needs a built tree",
                what
            ))
            .into());
        };
        Ok(self.moved(&t)? + &self.position()?)
    }

    fn moved(&self, t: &Transition) -> Result<String> {
        match (self.session.tree(), self.session.navigator()) {
            | (Some(tree), Some(nav)) => Ok(render::transition(tree, nav, t)),
            | _ => Ok(String::new()),
        }
    }

    /// The current checkpoint followed by the actions available from it.
    fn position(&self) -> Result<String> {
        let (Some(tree), Some(nav)) = (self.session.tree(), self.session.navigator()) else {
            return Err(SessionError::PreconditionViolation(
                "nothing to show; build the tree first".to_owned(),
            )
            .into());
        };
        Ok(render::checkpoint(tree, nav) + &render::actions(&self.session))
    }

    fn tree_view(&self) -> Result<String> {
        let Some(tree) = self.session.tree() else {
            return Err(SessionError::PreconditionViolation("no tree built yet".to_owned()).into());
        };
        let current = self.session.navigator().map(|nav| nav.current_node());
        Ok(render::tree(tree, current))
    }

    /// Reads commands from standard input until `quit` or end of input.
    pub fn launch(&mut self) -> Result<()> {
        println!("stab v{}; type `help` for commands", env!("CARGO_PKG_VERSION"));
        let stdin = std::io::stdin();
        loop {
            print!("{}> ", self.session.phase());
            std::io::stdout().flush()?;
            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                break;
            }
            match self.run_line(&line) {
                | Ok(Reply::Text(text)) => print!("{}", text),
                | Ok(Reply::Quit) => break,
                | Err(err) => println!("{} {}", "error:".red().bold(), err),
            }
        }
        Ok(())
    }

    /// Runs a script line by line, echoing each command before its output. A line starting with
    /// `!` must fail; any other failure stops the script.
    pub fn run_script(&mut self, script: &str, out: &mut impl Write) -> Result<()> {
        for (idx, line) in script.lines().enumerate() {
            let (must_fail, line) = match line.trim_start().strip_prefix('!') {
                | Some(rest) => (true, rest),
                | None => (false, line),
            };
            let res = self.run_line(line);
            if !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                writeln!(out, "{} {}", ">".dimmed(), line.trim())?;
            }
            match (res, must_fail) {
                | (Ok(Reply::Quit), false) => break,
                | (Ok(Reply::Text(text)), false) => write!(out, "{}", text)?,
                | (Err(err), true) => writeln!(out, "{} {}", "error (expected):".yellow(), err)?,
                | (Ok(_), true) => return Err(CommandError::Unexpected(idx + 1)),
                | (Err(err), false) => {
                    return Err(CommandError::Script { line: idx + 1, source: Box::new(err) });
                }
            }
        }
        Ok(())
    }
}
