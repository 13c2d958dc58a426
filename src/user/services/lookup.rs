//! Batch resolution of user identifiers.

use std::collections::{HashMap, HashSet};

use crate::user::{
    domain::{UserId, UserProfile},
    ports::{UserDirectory, UserDirectoryResult},
};

/// Looks up each distinct identifier in `ids` once.
///
/// Identifiers the directory does not know are absent from the result.
pub(crate) async fn resolve_profiles<'a, U>(
    directory: &U,
    ids: impl IntoIterator<Item = &'a UserId>,
) -> UserDirectoryResult<HashMap<UserId, UserProfile>>
where
    U: UserDirectory + ?Sized,
{
    let mut seen = HashSet::new();
    let mut profiles = HashMap::new();
    for id in ids {
        if !seen.insert(id) {
            continue;
        }
        if let Some(profile) = directory.find_by_id(id).await? {
            profiles.insert(id.clone(), profile);
        }
    }
    Ok(profiles)
}
