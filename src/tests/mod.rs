use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod summary;

pub const BOT_LOG_HEADER: &str = "nodes;depth;move;cache_hits;time;cache_size;move_number;round_number";
pub const ENGINE_LOG_HEADER: &str = "playerId;winnerId;wonMacroFieldsP1;wonMacroFieldsP2;macroBoard;mBoard";

/// A simulation output directory laid out on disk for the duration of a test.
pub struct SimulationTree {
    root: TempDir,
}

impl SimulationTree {
    pub fn new() -> Self {
        SimulationTree {
            root: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Writes `header` and `lines` to `<root>/<directory>/<file>`.
    pub fn add_file(&self, directory: &str, file: &str, header: &str, lines: &[&str]) -> PathBuf {
        let directory = self.root().join(directory);
        fs::create_dir_all(&directory).expect("failed to create log directory");

        let mut contents = String::from(header);
        contents.push('\n');
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }

        let path = directory.join(file);
        fs::write(&path, contents).expect("failed to write log file");
        path
    }

    pub fn add_bot_log(&self, directory: &str, file: &str, lines: &[&str]) -> PathBuf {
        self.add_file(directory, file, BOT_LOG_HEADER, lines)
    }

    pub fn add_engine_log(&self, directory: &str, file: &str, lines: &[&str]) -> PathBuf {
        self.add_file(directory, file, ENGINE_LOG_HEADER, lines)
    }
}

/// A bot log line with the given node count and round; the other columns are filler.
pub fn bot_line(nodes: u64, round: u32) -> String {
    format!("{nodes};4;3 5;12;8;64;{round};{round}")
}

/// An engine log line seen from player id 1.
pub fn engine_line(winner_id: u32) -> String {
    format!("1;{winner_id};3;2;1,2,0,0,0,0,0,0,0;0,0,1,2,0,0,0,0,0")
}
