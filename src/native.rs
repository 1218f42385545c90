use crate::engine::{Engine, EngineError};
use libloading::{Library, Symbol};
use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::{Path, PathBuf};
use tracing::debug;

// C-ABI surface of the tictactoe library. Init reports failure through a
// nonzero status, perft through a negative count; the C side has no other
// way to signal an error across the boundary.
type InitFn = unsafe extern "C" fn() -> i32;
type PerftFn = unsafe extern "C" fn(u32) -> i64;

const INIT_SYMBOL: &[u8] = b"ttt_init";
const PERFT_SYMBOL: &[u8] = b"ttt_perft";

pub const LIBRARY_BASE_NAME: &str = "tictactoe";

pub fn library_file_name() -> String {
    format!("{DLL_PREFIX}{LIBRARY_BASE_NAME}{DLL_SUFFIX}")
}

// Directories checked before falling back to the system loader's own search.
// The executable's directory comes first so a library dropped next to the
// binary always wins.
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(dir);
    }
    if let Ok(dir) = std::env::current_dir() {
        dirs.push(dir);
    }
    dirs
}

pub struct NativeEngine {
    library: Library,
    path: PathBuf,
}

impl NativeEngine {
    pub fn load() -> Result<Self, EngineError> {
        let file_name = library_file_name();

        for dir in search_dirs() {
            let candidate = dir.join(&file_name);
            if candidate.exists() {
                debug!(path = %candidate.display(), "loading engine library");
                return Self::load_from(&candidate);
            }
            debug!(path = %candidate.display(), "no engine library here");
        }

        match unsafe { Library::new(&file_name) } {
            Ok(library) => Self::from_library(library, PathBuf::from(&file_name)),
            Err(error) => {
                debug!(%error, "system loader could not provide the engine library");
                Err(EngineError::NotFound(file_name))
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, EngineError> {
        let library = unsafe { Library::new(path) }?;
        Self::from_library(library, path.to_path_buf())
    }

    fn from_library(library: Library, path: PathBuf) -> Result<Self, EngineError> {
        // Check both symbols up front so a broken library fails during
        // setup, never inside the measured call.
        unsafe {
            library.get::<InitFn>(INIT_SYMBOL)?;
            library.get::<PerftFn>(PERFT_SYMBOL)?;
        }

        Ok(NativeEngine { library, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Engine for NativeEngine {
    fn init(&mut self) -> Result<(), EngineError> {
        let init: Symbol<'_, InitFn> = unsafe { self.library.get(INIT_SYMBOL) }?;
        let status = unsafe { init() };
        if status != 0 {
            return Err(EngineError::Init(status));
        }
        Ok(())
    }

    fn perft(&mut self, depth: u32) -> Result<u64, EngineError> {
        let perft: Symbol<'_, PerftFn> = unsafe { self.library.get(PERFT_SYMBOL) }?;
        let count = unsafe { perft(depth) };
        if count < 0 {
            return Err(EngineError::Perft(count));
        }
        Ok(count as u64)
    }
}
