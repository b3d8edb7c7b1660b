//! # File I/O Module
//!
//! Project file operations with safety features:
//! - **Atomic saves**: write to `.tmp`, fsync, rename; a crash mid-save
//!   never corrupts an existing file
//! - **File locking**: a `.cubi.lock` sidecar plus an OS-level lock keeps
//!   two users on a shared drive from clobbering each other
//! - **Version validation**: incompatible schema versions are rejected on
//!   load instead of producing half-parsed projects
//!
//! ## File Format
//!
//! Projects are saved as `.cubi` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cubi_core::file_io::{guardar_proyecto, cargar_proyecto, FileLock};
//! use cubi_core::proyecto::Proyecto;
//! use std::path::Path;
//!
//! let proyecto = Proyecto::new("Casa Lampa", "Juana Pérez", "Constructora Sur");
//! let path = Path::new("lampa.cubi");
//!
//! let lock = FileLock::acquire(path, "jperez")?;
//! guardar_proyecto(&proyecto, path)?;
//! drop(lock);
//! # Ok::<(), cubi_core::errors::CubiError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CubiError, CubiResult};
use crate::proyecto::{Proyecto, SCHEMA_VERSION};

/// Locks older than this are considered abandoned
const LOCK_MAX_AGE_HOURS: i64 = 24;

/// Lock metadata stored in `.cubi.lock` sidecar files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (username or email)
    pub usuario: String,
    /// Machine name where the lock was acquired
    pub equipo: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create lock info for the current process
    pub fn new(usuario: impl Into<String>) -> Self {
        LockInfo {
            usuario: usuario.into(),
            equipo: hostname().unwrap_or_else(|| "desconocido".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// Lock guard released on drop.
///
/// Combines an OS-level exclusive lock (via fs2) for process safety with
/// a JSON sidecar file so other users can see who holds the lock.
pub struct FileLock {
    /// Path to the project file this lock protects
    proyecto_path: PathBuf,
    /// Path to the sidecar lock file
    lock_path: PathBuf,
    /// Open handle that keeps the OS lock alive
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// Returns [`CubiError::FileLocked`] when another live process holds
    /// the lock. A stale lock (dead pid on this machine, or older than
    /// 24 hours) is taken over silently.
    pub fn acquire(path: &Path, usuario: impl Into<String>) -> CubiResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(usuario);

        if let Some(existente) = leer_lock(&lock_path) {
            if !lock_obsoleto(&existente) {
                return Err(CubiError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", existente.usuario, existente.equipo),
                    existente.locked_at.to_rfc3339(),
                ));
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CubiError::file_error("crear lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CubiError::file_locked(
                path.display().to_string(),
                "otro proceso".to_string(),
                "desconocido".to_string(),
            )
        })?;

        let json = serde_json::to_string_pretty(&info)
            .map_err(|e| CubiError::SerializationError { reason: e.to_string() })?;
        lock_file
            .write_all(json.as_bytes())
            .and_then(|_| lock_file.sync_all())
            .map_err(|e| {
                CubiError::file_error(
                    "escribir lock",
                    lock_path.display().to_string(),
                    e.to_string(),
                )
            })?;

        Ok(FileLock {
            proyecto_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check whether a file is locked, without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if a live lock exists, `None` otherwise.
    pub fn check(path: &Path) -> Option<LockInfo> {
        leer_lock(&lock_path_for(path)).filter(|info| !lock_obsoleto(info))
    }

    /// Path of the project file this lock protects
    pub fn proyecto_path(&self) -> &Path {
        &self.proyecto_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // the OS lock goes away with the handle; remove the sidecar too
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// Sidecar lock path for a project file (`obra.cubi` -> `obra.cubi.lock`)
fn lock_path_for(path: &Path) -> PathBuf {
    let mut lock_path = path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

/// Read and parse a sidecar lock file, if it exists and is valid
fn leer_lock(lock_path: &Path) -> Option<LockInfo> {
    let contenido = fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(&contenido).ok()
}

/// A lock is stale when its process is dead (same machine) or it is
/// older than [`LOCK_MAX_AGE_HOURS`].
fn lock_obsoleto(info: &LockInfo) -> bool {
    #[cfg(unix)]
    {
        let misma_maquina = hostname().is_some_and(|equipo| equipo == info.equipo);
        if misma_maquina && fs::metadata(format!("/proc/{}", info.pid)).is_err() {
            return true;
        }
    }

    (Utc::now() - info.locked_at).num_hours() > LOCK_MAX_AGE_HOURS
}

/// Save a project with atomic write semantics.
///
/// Serialize → write `.cubi.tmp` → fsync → rename. An interrupted save
/// leaves the previous file intact.
pub fn guardar_proyecto(proyecto: &Proyecto, path: &Path) -> CubiResult<()> {
    let json = serde_json::to_string_pretty(proyecto)
        .map_err(|e| CubiError::SerializationError { reason: e.to_string() })?;

    let tmp_path = path.with_extension("cubi.tmp");

    let resultado = File::create(&tmp_path)
        .and_then(|mut f| {
            f.write_all(json.as_bytes())?;
            f.sync_all()
        })
        .map_err(|e| {
            CubiError::file_error(
                "escribir temporal",
                tmp_path.display().to_string(),
                e.to_string(),
            )
        });

    if let Err(e) = resultado {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CubiError::file_error("renombrar", path.display().to_string(), e.to_string())
    })
}

/// Load a project from a `.cubi` file.
///
/// Fails with [`CubiError::VersionMismatch`] when the file was written by
/// an incompatible schema version.
pub fn cargar_proyecto(path: &Path) -> CubiResult<Proyecto> {
    let mut contenido = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contenido))
        .map_err(|e| CubiError::file_error("leer", path.display().to_string(), e.to_string()))?;

    let proyecto: Proyecto = serde_json::from_str(&contenido).map_err(|e| {
        CubiError::SerializationError {
            reason: format!("JSON inválido en {}: {}", path.display(), e),
        }
    })?;

    validar_version(&proyecto.meta.version)?;

    Ok(proyecto)
}

/// Load a project and report a foreign lock, if any.
///
/// A UI uses the lock info to open the project read-only with a banner
/// naming the current holder.
pub fn cargar_proyecto_con_lock(path: &Path) -> CubiResult<(Proyecto, Option<LockInfo>)> {
    let proyecto = cargar_proyecto(path)?;
    Ok((proyecto, FileLock::check(path)))
}

/// Validate that a file schema version is compatible with ours.
///
/// Major versions must match; while we are 0.x, a file with a newer minor
/// version is rejected too (breaking changes are allowed between minors).
fn validar_version(file_version: &str) -> CubiResult<()> {
    let mismatch = || CubiError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Vec<u32> {
        v.split('.').filter_map(|p| p.parse().ok()).collect()
    };
    let archivo = parse(file_version);
    let actual = parse(SCHEMA_VERSION);

    if archivo.is_empty() || actual.is_empty() || archivo[0] != actual[0] {
        return Err(mismatch());
    }

    if actual[0] == 0 && archivo.len() > 1 && actual.len() > 1 && archivo[1] > actual[1] {
        return Err(mismatch());
    }

    Ok(())
}
