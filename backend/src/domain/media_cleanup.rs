//! Best-effort removal of stored media after its rows are gone.

use tracing::warn;

use crate::domain::ports::ObjectStorage;

/// Delete each stored object, logging failures instead of returning them.
///
/// Rows are removed before files, so a failure here leaves an orphaned
/// object rather than a row pointing at nothing.
pub(crate) async fn discard_stored_objects<S, I>(storage: &S, external_ids: I)
where
    S: ObjectStorage + ?Sized,
    I: IntoIterator<Item = String>,
{
    for external_id in external_ids {
        if let Err(error) = storage.delete(&external_id).await {
            warn!(%external_id, %error, "failed to delete stored object");
        }
    }
}
