//! The client session: connects the game state to the remote authority.

use crate::game::Game;
use crate::pilot::Pilot;
use crate::protocol::{GameSummary, Message};
use crate::transport::Transport;

/// How to authenticate and which game to sit down at.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub name: String,
    pub password: String,
    /// Create the account before logging in.
    pub register: bool,
    /// Game to join; `None` creates a new one.
    pub game: Option<u32>,
}

/// Owns the [`Game`], a [`Transport`] to the authority and a [`Pilot`] that
/// supplies moves when it is the local seat's turn.
///
/// All inbound board mutations flow through here: the session validates the
/// message shape (the transport already rejected malformed frames) and then
/// applies it to the game without re-checking legality, since the authority
/// is trusted.
pub struct Session {
    game: Game,
    pilot: Box<dyn Pilot + Send>,
    transport: Box<dyn Transport>,
}

impl Session {
    pub fn new(pilot: Box<dyn Pilot + Send>, transport: Box<dyn Transport>) -> Self {
        Self {
            game: Game::new(),
            pilot,
            transport,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Log in, attach to a game, synchronize the board and then play until
    /// the authority declares the game over (a turn message without a
    /// current player).
    pub async fn run(&mut self, cfg: &SessionConfig) -> anyhow::Result<()> {
        self.authenticate(cfg).await?;
        let id = self.pick_game(cfg).await?;
        self.attach(id).await?;
        self.play().await
    }

    async fn authenticate(&mut self, cfg: &SessionConfig) -> anyhow::Result<()> {
        let credentials = if cfg.register {
            Message::Register {
                name: cfg.name.clone(),
                password: cfg.password.clone(),
            }
        } else {
            Message::Login {
                name: cfg.name.clone(),
                password: cfg.password.clone(),
            }
        };
        self.transport.send(credentials).await?;

        match self.transport.recv().await? {
            Message::LoginResult { ok: true, name } => {
                log::info!("logged in as {}", name);
                Ok(())
            }
            Message::LoginResult { ok: false, name } => {
                Err(anyhow::anyhow!("login rejected for {}", name))
            }
            other => Err(anyhow::anyhow!("expected login result, got {:?}", other)),
        }
    }

    /// Resolve which game to sit at: the configured id, or a freshly created
    /// game. Either way the authority answers with a single-entry game list.
    async fn pick_game(&mut self, cfg: &SessionConfig) -> anyhow::Result<u32> {
        let request = match cfg.game {
            Some(id) => Message::JoinGame { id },
            None => Message::NewGame,
        };
        self.transport.send(request).await?;

        match self.transport.recv().await? {
            Message::GameInfo { games } => match games.first() {
                Some(GameSummary { id, .. }) => Ok(*id),
                None => Err(anyhow::anyhow!("authority returned an empty game list")),
            },
            other => Err(anyhow::anyhow!("expected game info, got {:?}", other)),
        }
    }

    async fn attach(&mut self, id: u32) -> anyhow::Result<()> {
        self.transport.send(Message::ChangeGame { id }).await?;
        match self.transport.recv().await? {
            Message::GameChanged { game } => {
                self.game.set_me(game.player);
                self.game.set_turn(game.current);
                match game.player {
                    Some(color) => log::info!("attached to game {} as {}", game.id, color),
                    None => log::info!("attached to game {} as spectator", game.id),
                }
            }
            other => return Err(anyhow::anyhow!("expected game change, got {:?}", other)),
        }

        self.transport.send(Message::FieldInfoRequest).await?;
        match self.transport.recv().await? {
            Message::FieldInfo { fields } => {
                self.game
                    .apply_fields(&fields)
                    .map_err(|e| anyhow::anyhow!("field sync named a bad cell: {}", e))?;
                Ok(())
            }
            other => Err(anyhow::anyhow!("expected field sync, got {:?}", other)),
        }
    }

    async fn play(&mut self) -> anyhow::Result<()> {
        // set after sending a move request, cleared by the next turn message;
        // prevents re-sending while the authority is still answering
        let mut awaiting = false;

        loop {
            if self.game.my_turn() && !awaiting {
                if let Some((from, to)) = self.pilot.choose_move(&self.game) {
                    self.game
                        .validate_move(from, to)
                        .map_err(|e| anyhow::anyhow!("pilot chose an invalid move: {}", e))?;
                    self.transport.send(Message::Move { from, to }).await?;
                    awaiting = true;
                }
            }

            match self.transport.recv().await? {
                Message::FieldInfo { fields } => {
                    self.game
                        .apply_fields(&fields)
                        .map_err(|e| anyhow::anyhow!("field sync named a bad cell: {}", e))?;
                }
                Message::Move { from, to } => {
                    self.game
                        .apply_move(from, to)
                        .map_err(|e| anyhow::anyhow!("move named a bad cell: {}", e))?;
                }
                Message::TurnInfo { current } => {
                    awaiting = false;
                    self.game.set_turn(current);
                    match current {
                        Some(color) => log::debug!("turn: {}", color),
                        None => {
                            log::info!("game over");
                            return Ok(());
                        }
                    }
                }
                other => log::debug!("ignoring message: {:?}", other),
            }
        }
    }
}
