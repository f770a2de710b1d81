use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalogue::Catalogue;
use crate::session::{Session, SessionState};
use crate::store::UserStore;

/// Runs a whole session against `path` with scripted input.
pub(crate) async fn run_session(path: &Path, input: &str) -> (SessionState, UserStore, String) {
    let mut output = Vec::new();
    let mut session = Session::open(path, Catalogue::builtin(), input.as_bytes(), &mut output)
        .await
        .unwrap()
        .with_rng(StdRng::seed_from_u64(11));
    session.run().await.unwrap();
    let state = session.state();
    let store = session.store().clone();
    drop(session);
    (state, store, String::from_utf8(output).unwrap())
}
