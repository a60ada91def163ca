//! System identification metadata.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identification and provenance for one generated system.
///
/// The UUID is derived deterministically from the accretion seed, so a
/// system can be re-generated from its metadata alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    /// Unique identifier, deterministic per seed
    pub id: Uuid,

    /// Short catalog designation (e.g. "QT-3918"), derived from the UUID
    pub catalog_name: String,

    /// The accretion seed this system reproduces from
    pub seed: u64,
}

impl SystemMetadata {
    /// Derive metadata from an accretion seed.
    ///
    /// # Example
    /// ```
    /// use system_generator::SystemMetadata;
    ///
    /// let a = SystemMetadata::from_seed(42);
    /// let b = SystemMetadata::from_seed(42);
    /// assert_eq!(a, b);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, &seed.to_be_bytes());
        Self {
            catalog_name: designation_from_id(&id),
            id,
            seed,
        }
    }
}

/// Derive a short catalog designation, two letters and four digits, from
/// the high half of the UUID. Deterministic per id.
fn designation_from_id(id: &Uuid) -> String {
    let (word, _) = id.as_u64_pair();
    let letters: String = (0..2)
        .map(|shift| char::from(b'A' + ((word >> (8 * shift)) % 26) as u8))
        .collect();
    format!("{}-{:04}", letters, (word >> 32) % 10_000)
}
