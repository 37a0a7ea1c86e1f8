use log::{debug, info};

use rust_prompts_core::error::{Error, Result};

use super::Prompt;
use crate::terminal::Tty;

/// Drives `prompt` until it yields a value: draw, read a key, repeat.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] when the user cancels, and terminal errors
/// as they occur.
pub fn run<P: Prompt, T: Tty>(prompt: &mut P, tty: &mut T) -> Result<P::Value> {
    loop {
        tty.draw(&prompt.render())?;
        let key = tty.read_key()?;
        debug!("Key pressed: {}", key.name);

        match prompt.handle_event(&key) {
            Ok(Some(value)) => {
                tty.finish(&prompt.success_line(&value))?;
                return Ok(value);
            }
            Ok(None) => {}
            Err(Error::Interrupted) => {
                info!("Prompt cancelled");
                return Err(Error::Interrupted);
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::keys::KeyPress;
    use crate::prompt::Frame;
    use crate::terminal::ScriptedTty;

    struct Counter {
        presses: usize,
    }

    impl Prompt for Counter {
        type Value = usize;

        fn render(&self) -> Frame {
            Frame {
                text: format!("presses: {}", self.presses),
                cursor_column: None,
            }
        }

        fn handle_event(&mut self, key: &KeyPress) -> Result<Option<usize>> {
            if key.is_interrupt() {
                return Err(Error::Interrupted);
            }
            self.presses += 1;
            Ok((key.name == "return").then_some(self.presses))
        }

        fn success_line(&self, value: &usize) -> String {
            format!("done after {value}")
        }
    }

    #[test]
    fn test_run_until_value() {
        let mut tty = ScriptedTty::new([
            KeyPress::char('a'),
            KeyPress::char('b'),
            KeyPress::named("return"),
        ]);
        let value = run(&mut Counter { presses: 0 }, &mut tty).unwrap();
        assert_eq!(value, 3);
        assert_eq!(tty.frames(), ["presses: 0", "presses: 1", "presses: 2"]);
        assert_eq!(tty.finished(), Some("done after 3"));
    }

    #[test]
    fn test_run_interrupted() {
        let mut tty = ScriptedTty::new([KeyPress::ctrl('c')]);
        let result = run(&mut Counter { presses: 0 }, &mut tty);
        assert!(matches!(result, Err(Error::Interrupted)));
        assert_eq!(tty.finished(), None);
    }
}
