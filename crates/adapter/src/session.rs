//! Game session - the host-facing owner of a match.
//!
//! A session holds the level library, the selected level type and game
//! mode, and one [`MatchController`]. Host commands are applied with
//! [`GameSession::handle`]; everything the match reports is queued as
//! [`Outbound`] messages and collected with [`GameSession::take_outbound`].
//!
//! Changing the level type always reloads the level data. The level is only
//! (re)started when the mode is [`GameMode::Levels`]; endless mode has no
//! rules of its own, so selecting it leaves the current match untouched.

use std::sync::mpsc::Receiver;

use crate::config::SessionConfig;
use crate::core::{Dictionary, LevelConfig, MatchController, MatchEvent, MatchSnapshot, SubscriptionId};
use crate::error::Result;
use crate::input::HostCommand;
use crate::library::LevelLibrary;
use crate::protocol::Outbound;
use crate::types::{GameMode, LevelType};

/// Whether the host loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct GameSession {
    library: LevelLibrary,
    mode: GameMode,
    level_type: LevelType,
    /// Configuration of the selected level type, started or not.
    level: Option<LevelConfig>,
    aspect_ratio: f32,
    controller: MatchController,
    subscription: SubscriptionId,
    events: Receiver<MatchEvent>,
    outbox: Vec<Outbound>,
}

impl GameSession {
    /// Create a session and load the configured level.
    pub fn new(library: LevelLibrary, dictionary: Dictionary, config: &SessionConfig) -> Result<Self> {
        let mut controller = MatchController::new(dictionary);
        let (subscription, events) = controller.subscribe();
        let mut session = Self {
            library,
            mode: config.mode,
            level_type: config.level_type,
            level: None,
            aspect_ratio: config.aspect_ratio,
            controller,
            subscription,
            events,
            outbox: Vec::new(),
        };
        session.select_level(config.level_type)?;
        Ok(session)
    }

    /// Load the dictionary and level directory named by `config`.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let dictionary = Dictionary::load(&config.dictionary_path)?;
        let library = LevelLibrary::from_dir(&config.level_dir)?;
        Self::new(library, dictionary, config)
    }

    /// Apply one host command.
    ///
    /// Errors only come from loading level data; the session stays usable
    /// and keeps its previous level when one is returned.
    pub fn handle(&mut self, command: HostCommand) -> Result<Flow> {
        match command {
            HostCommand::DragStart(position) => {
                let result = self.controller.start_drag(position);
                tracing::trace!(%position, ?result, "drag start");
            }
            HostCommand::DragExtend(position) => {
                let result = self.controller.extend_drag(position);
                tracing::trace!(%position, ?result, "drag extend");
            }
            HostCommand::DragEnd => {
                if self.controller.end_drag().is_none() {
                    tracing::trace!("drag ended without a word");
                }
            }
            HostCommand::Tick(seconds) => self.controller.tick(seconds),
            HostCommand::SetLevelType(level_type) => self.select_level(level_type)?,
            HostCommand::SetMode(mode) => self.set_mode(mode),
            HostCommand::Restart => {
                if !self.controller.restart() {
                    self.outbox.push(Outbound::notice("no level to restart"));
                }
            }
            HostCommand::Report => {
                self.collect_events();
                self.outbox.push(Outbound::Snapshot {
                    snapshot: self.snapshot(),
                });
            }
            HostCommand::Quit => {
                self.collect_events();
                return Ok(Flow::Quit);
            }
        }
        self.collect_events();
        Ok(Flow::Continue)
    }

    /// Reload the data for `level_type` and start it if the mode allows.
    pub fn select_level(&mut self, level_type: LevelType) -> Result<()> {
        let config = self.library.load(level_type)?;
        tracing::info!(level_type = level_type.as_str(), "level data loaded");
        self.level_type = level_type;
        self.level = Some(config);
        self.start_game();
        self.collect_events();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.start_game();
        self.collect_events();
    }

    fn start_game(&mut self) {
        match self.mode {
            GameMode::Levels => match &self.level {
                Some(config) => self.controller.start_level(config.clone()),
                None => self.outbox.push(Outbound::notice("no level loaded")),
            },
            GameMode::Endless => {
                tracing::warn!("endless mode has no rules; current match left as is");
                self.outbox
                    .push(Outbound::notice("endless mode is not playable; current match kept"));
            }
        }
    }

    fn collect_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            let initialized = matches!(event, MatchEvent::LevelInitialized { .. });
            self.outbox.push(Outbound::Event { event });
            if initialized {
                if let Some(framing) = self.controller.board().framing(self.aspect_ratio) {
                    self.outbox.push(Outbound::Framing { framing });
                }
            }
        }
    }

    /// Drain every message queued since the last call.
    pub fn take_outbound(&mut self) -> Vec<Outbound> {
        self.collect_events();
        std::mem::take(&mut self.outbox)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The selected level type; may differ from the running match in endless mode.
    pub fn level_type(&self) -> LevelType {
        self.level_type
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.controller.snapshot()
    }

    /// Stop receiving match events and hand back the controller.
    pub fn into_controller(mut self) -> MatchController {
        self.controller.unsubscribe(self.subscription);
        self.controller
    }
}
