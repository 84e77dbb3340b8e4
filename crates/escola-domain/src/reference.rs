#![allow(async_fn_in_trait)]

use crate::kind::RegistryKind;

/// Why a registry lookup produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("registry request timed out")]
    Timeout,
    #[error("registry unreachable: {0}")]
    Transport(String),
    #[error("registry answered with status {0}")]
    UnexpectedStatus(u16),
}

/// Port for checking that a registry entity exists.
///
/// `Ok(false)` is a definitive "no such entity"; `Err` means the registry could
/// not be asked and the answer is unknown.
pub trait ReferenceValidator: Send + Sync {
    async fn exists(&self, kind: RegistryKind, id: i32) -> Result<bool, LookupError>;
}

/// Failure of a reference check, attributed to the first reference that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("{kind} {id} not found")]
    NotFound { kind: RegistryKind, id: i32 },
    #[error("registry unavailable while checking {kind} {id}")]
    Unavailable {
        kind: RegistryKind,
        id: i32,
        #[source]
        source: LookupError,
    },
}

/// Check `refs` in order, stopping at the first one that does not resolve.
pub async fn check_references<V: ReferenceValidator>(
    validator: &V,
    refs: &[(RegistryKind, i32)],
) -> Result<(), ReferenceError> {
    for &(kind, id) in refs {
        match validator.exists(kind, id).await {
            Ok(true) => {}
            Ok(false) => return Err(ReferenceError::NotFound { kind, id }),
            Err(source) => return Err(ReferenceError::Unavailable { kind, id, source }),
        }
    }
    Ok(())
}
