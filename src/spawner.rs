//! Task Spawner
//!
//! Runs the panel's remote calls on Leptos' local executor.

use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};

#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosSpawner;

impl LocalSpawn for LeptosSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        leptos::task::spawn_local(future);
        Ok(())
    }
}
