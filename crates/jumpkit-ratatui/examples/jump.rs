use std::io::{stdout, Stdout};
use std::time::Duration;

use jumpkit::crossterm::{
    self,
    event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};

use ratatui::backend::CrosstermBackend;

use jumpkit::{
    config::JumpConfig,
    controller::JumpController,
    view::{JumpView, StatusLine},
};

use jumpkit_ratatui::{prompt::TerminalPrompt, screen::JumpScreen};

const WELCOME: &str = "\
Welcome to the jumpkit demo!

Press Ctrl-J to start a jump, then type the first letter of the word you want
to go to. Every word starting with that letter gets a label; type the label to
move the cursor there. If there are too many words to label at once, the
labels get reused, and picking one narrows things down to the words sharing it.

Press Escape or Ctrl-C to give up on a jump.

The arrow keys and Page Up/Page Down scroll, and q quits.

To jump around inside a file instead, pass its path as the first argument:

    cargo run --example jump -- README.md
";

enum Step {
    Jump,
    Scroll(isize),
    Quit,
}

struct Demo {
    screen: JumpScreen<CrosstermBackend<Stdout>>,
    jumper: JumpController,
    prompt: TerminalPrompt,
}

impl Demo {
    pub fn new(text: &str) -> Result<Self, std::io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        let mut stdout = stdout();

        execute!(stdout, EnterAlternateScreen)?;

        let config = JumpConfig::default();
        let prompt = TerminalPrompt::new(&config);
        let jumper = JumpController::new(config);
        let screen = JumpScreen::new(CrosstermBackend::new(stdout), text)?;

        Ok(Demo { screen, jumper, prompt })
    }

    pub fn run(&mut self) -> Result<(), std::io::Error> {
        loop {
            match self.step()? {
                Step::Jump => {
                    // Failures have already been reported on the status line.
                    let _ = self.jumper.run(&mut self.screen, &mut self.prompt);
                },
                Step::Scroll(n) => {
                    self.screen.blank_status();

                    let view = self.screen.view_mut();
                    let top = view.top_line().saturating_add_signed(n);
                    view.scroll_to(top);
                },
                Step::Quit => break,
            }
        }

        crossterm::terminal::disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;

        return Ok(());
    }

    fn step(&mut self) -> Result<Step, std::io::Error> {
        loop {
            self.screen.draw()?;

            if !poll(Duration::from_millis(500))? {
                continue;
            }

            match read()? {
                Event::Key(ke) if ke.kind == KeyEventKind::Release => {
                    continue;
                },
                Event::Key(ke) => {
                    let page = self.screen.height().max(1) as isize;

                    match (ke.code, ke.modifiers) {
                        (KeyCode::Char('j'), KeyModifiers::CONTROL) => return Ok(Step::Jump),
                        (KeyCode::Char('q'), _) => return Ok(Step::Quit),
                        (KeyCode::Up, _) => return Ok(Step::Scroll(-1)),
                        (KeyCode::Down, _) => return Ok(Step::Scroll(1)),
                        (KeyCode::PageUp, _) => return Ok(Step::Scroll(-page)),
                        (KeyCode::PageDown, _) => return Ok(Step::Scroll(page)),
                        _ => continue,
                    }
                },
                Event::Resize(_, _) => {
                    self.screen.resize()?;
                },
                _ => {
                    // Do nothing for now.
                },
            }
        }
    }
}

fn main() -> Result<(), std::io::Error> {
    let mut args = std::env::args();
    let _ = args.next();

    let text = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => WELCOME.to_string(),
    };

    let mut demo = Demo::new(&text)?;

    return demo.run();
}
