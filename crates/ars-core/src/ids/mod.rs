//! ID type wrappers for type safety.

mod id_macro;

use uuid::Uuid;

use id_macro::string_id;

string_id! {
    /// Identifier of one try-on result.
    ///
    /// Gallery items reuse the id of the result they were saved from.
    pub struct TryOnId;
}

string_id! {
    /// Owner of a try-on result.
    pub struct UserId;
}

impl TryOnId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl UserId {
    /// Placeholder user every session runs as.
    pub const PLACEHOLDER: &'static str = "user-1";

    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }
}
