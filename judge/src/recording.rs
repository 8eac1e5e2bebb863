use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uttt::{GameResult, MoveRecord, Player, Seats};

/// Writes one JSON file per game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: None,
        })
    }

    pub fn start_game(&mut self, players: &Seats<String>) {
        self.current = Some(GameRecording {
            players: players.clone(),
            events: Vec::new(),
            result: None,
        });
    }

    pub fn store_move(&mut self, record: &MoveRecord) {
        self.store_event(RecordedEvent::from_record(record, false));
    }

    pub fn store_undo(&mut self, record: &MoveRecord) {
        self.store_event(RecordedEvent::from_record(record, true));
    }

    fn store_event(&mut self, event: RecordedEvent) {
        if let Some(recording) = &mut self.current {
            recording.events.push(event);
        }
    }

    /// Writes the current game to `game_NNNNNN.json` and returns the path.
    ///
    /// `result` is `None` for a game that was abandoned before it ended.
    pub fn write_game_recording(
        &mut self,
        result: Option<GameResult>,
    ) -> anyhow::Result<Option<PathBuf>> {
        let Some(mut recording) = self.current.take() else {
            return Ok(None);
        };
        recording.result = result;
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(Some(filepath))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecording {
    pub players: Seats<String>,
    pub events: Vec<RecordedEvent>,
    pub result: Option<GameResult>,
}

/// A move or an undo, with 1-based numbers as the players typed them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordedEvent {
    Move {
        player: Player,
        sub_board: usize,
        cell: usize,
    },
    Undo {
        player: Player,
        sub_board: usize,
        cell: usize,
    },
}

impl RecordedEvent {
    fn from_record(record: &MoveRecord, undo: bool) -> Self {
        let (sub_board, cell) = record.position().numbers();
        let player = record.player;
        if undo {
            RecordedEvent::Undo {
                player,
                sub_board,
                cell,
            }
        } else {
            RecordedEvent::Move {
                player,
                sub_board,
                cell,
            }
        }
    }
}
