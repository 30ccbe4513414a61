//! REST resource description shared by the API and the storefront client.

use core::fmt::{Debug, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// An entity served as a CRUD collection under `/api/{PATH}`.
///
/// The API mounts its routes from [`Resource::PATH`] and the storefront
/// builds its request URLs from the same constant, so both sides agree on
/// where a resource lives.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Typed identifier of the entity.
    type Id: Copy + Eq + Debug + Display + Send + Sync + 'static;

    /// Body sent on create (`POST`) and update (`PUT`).
    type Payload: Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Collection path segment, e.g. `products`.
    const PATH: &'static str;

    /// Singular name used in log fields and error messages.
    const NAME: &'static str;

    /// The server-assigned identifier.
    fn id(&self) -> Self::Id;
}
