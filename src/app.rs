//! Process lifecycle: the store handle is opened once and handed to every
//! command through [`AppContext`].

use crate::config::Config;
use crate::core::resolver::IdentityResolver;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicBool, Ordering};

static STARTED: AtomicBool = AtomicBool::new(false);

pub struct AppContext {
    pub cfg: Config,
    pub pool: DbPool,
}

impl AppContext {
    /// Open the configured database and bring its schema up to date, without
    /// touching the process-wide lifecycle flag.
    pub fn open(cfg: Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        Ok(Self { cfg, pool })
    }

    pub fn resolver(&self) -> IdentityResolver {
        IdentityResolver::new(self.cfg.lookup)
    }
}

/// Build the application context. Only the first call in a process
/// succeeds; later calls fail with [`AppError::AlreadyInitialized`].
pub fn startup(cfg: Config) -> AppResult<AppContext> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Err(AppError::AlreadyInitialized);
    }

    AppContext::open(cfg)
}
