#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use sternhalma::{
    init_logging, legal_destinations, print_board, transport::in_memory::InMemoryTransport,
    transport::Transport, Board, CliPilot, Color, Grid, Message, Pilot, RandomPilot, Session,
    SessionConfig, TcpTransport,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum PilotKind {
    Human,
    Random,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Connect to a game server and play.
    Connect {
        #[arg(long, default_value = "127.0.0.1:8000")]
        connect: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, help = "Create the account before logging in")]
        register: bool,
        #[arg(long, help = "Game id to join; omitted creates a new game")]
        game: Option<u32>,
        #[arg(long, value_enum, default_value_t = PilotKind::Human)]
        pilot: PilotKind,
        #[arg(long, help = "Fix the random pilot's seed for reproducible play")]
        seed: Option<u64>,
    },
    /// Play two random clients against each other over an in-memory
    /// connection, with a minimal in-process referee relaying moves.
    Local {
        #[arg(long, help = "Fix RNG seeds for a reproducible game")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 40, help = "Half-moves before the game is stopped")]
        moves: u32,
    },
    /// Print the starting board and the reachable cells of one corner pin.
    Demo,
}

#[cfg(feature = "std")]
fn make_pilot(kind: PilotKind, seed: Option<u64>) -> Box<dyn Pilot + Send> {
    match kind {
        PilotKind::Human => Box::new(CliPilot::new()),
        PilotKind::Random => match seed {
            Some(s) => Box::new(RandomPilot::seeded(s)),
            None => Box::new(RandomPilot::new()),
        },
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(None);
    let cli = Cli::parse();

    match cli.command {
        Commands::Connect {
            connect,
            name,
            password,
            register,
            game,
            pilot,
            seed,
        } => {
            println!("Connecting to {}...", connect);
            let transport = Box::new(TcpTransport::connect(&connect).await?);
            let mut session = Session::new(make_pilot(pilot, seed), transport);
            let cfg = SessionConfig {
                name,
                password,
                register,
                game,
            };
            session.run(&cfg).await?;
            println!("Final board:");
            print_board(session.game().board(), &[]);
        }
        Commands::Local { seed, moves } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Local game, seed {} ({} half-moves max)", seed, moves);

            let (red_end, referee_red) = InMemoryTransport::pair();
            let (green_end, referee_green) = InMemoryTransport::pair();

            let red = async move {
                let pilot = Box::new(RandomPilot::seeded(seed));
                let mut session = Session::new(pilot, Box::new(red_end));
                let cfg = SessionConfig {
                    name: "red".into(),
                    password: String::new(),
                    register: true,
                    game: None,
                };
                session.run(&cfg).await
            };
            let green = async move {
                let pilot = Box::new(RandomPilot::seeded(seed.wrapping_add(1)));
                let mut session = Session::new(pilot, Box::new(green_end));
                let cfg = SessionConfig {
                    name: "green".into(),
                    password: String::new(),
                    register: true,
                    game: Some(0),
                };
                session.run(&cfg).await
            };

            let referee = referee(referee_red, referee_green, moves);
            let (_, _, (board, _endpoints)) = tokio::try_join!(red, green, referee)?;

            println!("Board after the game:");
            print_board(&board, &[]);
        }
        Commands::Demo => {
            let board = Board::generate();
            let origin = Grid::new(4, -4);
            let dests = legal_destinations(&board, origin);
            println!(
                "Starting board; {} cells reachable from {:?} shown as '*':",
                dests.len(),
                origin
            );
            print_board(&board, &dests);
        }
    }
    Ok(())
}

/// Minimal in-process game authority for `local` mode: seats two clients,
/// relays validated moves and rotates the turn. A harness, not a rules
/// server; it never detects a winner and simply stops after `moves`
/// half-moves.
///
/// Returns its endpoints along with the board so the channels stay open
/// while the clients process the final turn message; a client that saw the
/// turn pass to it may still send one last move request.
#[cfg(feature = "std")]
async fn referee(
    red: InMemoryTransport,
    green: InMemoryTransport,
    moves: u32,
) -> anyhow::Result<(Board, [InMemoryTransport; 2])> {
    let mut clients = [red, green];
    let colors = [Color::Red, Color::Green];
    let mut board = Board::generate();
    let mut current = 0usize;

    for (client, color) in clients.iter_mut().zip(colors) {
        seat_client(client, color, &board).await?;
    }

    for _ in 0..moves {
        let msg = clients[current].recv().await?;
        let Message::Move { from, to } = msg else {
            return Err(anyhow::anyhow!("expected a move, got {:?}", msg));
        };

        let legal = board.pin(from) == Some(colors[current])
            && board.pin(to).is_none()
            && legal_destinations(&board, from).contains(&to);
        if legal {
            board.apply_move(from, to)
                .map_err(|e| anyhow::anyhow!("relayed move failed: {}", e))?;
            let update = Message::FieldInfo {
                fields: vec![
                    sternhalma::FieldState { pos: from, pin: None },
                    sternhalma::FieldState {
                        pos: to,
                        pin: Some(colors[current]),
                    },
                ],
            };
            for client in clients.iter_mut() {
                client.send(update.clone()).await?;
            }
            current = (current + 1) % clients.len();
        } else {
            log::warn!("discarding illegal move {:?} -> {:?}", from, to);
        }

        let turn = Message::TurnInfo {
            current: Some(colors[current]),
        };
        for client in clients.iter_mut() {
            client.send(turn.clone()).await?;
        }
    }

    for client in clients.iter_mut() {
        client.send(Message::TurnInfo { current: None }).await?;
    }
    Ok((board, clients))
}

#[cfg(feature = "std")]
async fn seat_client(
    client: &mut InMemoryTransport,
    color: Color,
    board: &Board,
) -> anyhow::Result<()> {
    let name = match client.recv().await? {
        Message::Register { name, .. } | Message::Login { name, .. } => name,
        other => return Err(anyhow::anyhow!("expected credentials, got {:?}", other)),
    };
    client.send(Message::LoginResult { name, ok: true }).await?;

    match client.recv().await? {
        Message::NewGame | Message::JoinGame { .. } => {}
        other => return Err(anyhow::anyhow!("expected game choice, got {:?}", other)),
    }
    let summary = sternhalma::GameSummary {
        id: 0,
        player: Some(color),
        current: Some(Color::Red),
    };
    client
        .send(Message::GameInfo {
            games: vec![summary],
        })
        .await?;

    match client.recv().await? {
        Message::ChangeGame { .. } => {}
        other => return Err(anyhow::anyhow!("expected game change, got {:?}", other)),
    }
    client.send(Message::GameChanged { game: summary }).await?;

    match client.recv().await? {
        Message::FieldInfoRequest => {}
        other => return Err(anyhow::anyhow!("expected field request, got {:?}", other)),
    }
    let fields = board
        .cells()
        .map(|(pos, cell)| sternhalma::FieldState { pos, pin: cell.pin })
        .collect();
    client.send(Message::FieldInfo { fields }).await?;
    Ok(())
}
