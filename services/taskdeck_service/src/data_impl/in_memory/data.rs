use derive_new::new;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};

use crate::data::{
    members::Member, projects::Project, tasks::Task, users::User,
    workspaces::Workspace,
};

#[derive(
    Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, new,
)]
pub struct Tables {
    pub users: Vec<User>,
    pub workspaces: Vec<Workspace>,
    pub members: Vec<Member>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

/// Process-local document store. Locks are held for a single repository
/// call and never across an await point.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }

    pub fn snapshot(&self) -> Tables {
        self.tables.read().clone()
    }
}
