use {
  app::App,
  card::Card,
  card_view::CardView,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_response::CommentResponse,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  feed_view::FeedView,
  help_view::HelpView,
  mode::Mode,
  pending_fetch::PendingFetch,
  phase::Phase,
  quote::Quote,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  replies_modal::RepliesModal,
  reply_entry::ReplyEntry,
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, IsTerminal, Stdout},
    process,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{
    clean_lines, clean_text, format_replies, format_votes, truncate,
    wrap_text,
  },
};

mod app;
mod card;
mod card_view;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_response;
mod effect;
mod event;
mod feed_view;
mod help_view;
mod mode;
mod pending_fetch;
mod phase;
mod quote;
mod replies_modal;
mod reply_entry;
mod state;
mod transient_message;
mod utils;

const TITLE: &str = "daily picks";

const FEED_STATUS: &str = "↑/k up • ↓/j down • enter replies • n/space analysis • r refresh • v card view • o open • q quit • ? help";

const CARD_STATUS: &str = "←/h previous • →/l next • n/space analysis • r refresh • v feed view • o open • q quit • ? help";

const MODAL_STATUS: &str = "↑/k ↓/j scroll • pg↓/pg↑ page • esc/x close replies";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_TEXT: &str = "Loading picks...";
const EMPTY_TEXT: &str = "No picks posted yet. Press r to refresh.";
const ERROR_TEXT: &str = "Could not load picks. Press r to retry.";

const REFRESH_INTERVAL: Duration = Duration::from_secs(120);

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up (feed view)
  ↓ / j   move selection down (feed view)
  ← / h   previous pick (card view)
  → / l   next pick (card view)
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to the first pick
  end     jump to the last pick

Actions:
  enter   open replies for the selected pick (feed view)
  n / spc toggle the analysis panel
  r       refresh the feed now
  v / tab switch between feed and card view
  o       open the selected comment on Reddit
  q       quit picks
  esc     close an overlay, leave card view, or quit
  ?       toggle this help

The feed refreshes automatically every 2 minutes.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let client = Client::default();

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
