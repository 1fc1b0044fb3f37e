use crate::FieldResult;

/// A column adapter over one of the codecs.
///
/// Absent values are `None` on both sides. Fields whose column cannot tell an
/// empty value from an absent one map empty input to `None` when writing.
pub trait Field {
    /// The caller-supplied input.
    type Input;

    /// The canonical value returned to callers.
    type Value;

    /// The value held by the column.
    type Column;

    /// Prepare a value for writing to the column.
    fn to_db(&self, value: Option<Self::Input>) -> FieldResult<Option<Self::Column>>;

    /// Rebuild the canonical value from the column.
    fn from_db(&self, raw: Option<Self::Column>) -> FieldResult<Option<Self::Value>>;

    /// Normalize and validate caller input without touching the column.
    fn clean(&self, value: Option<Self::Input>) -> FieldResult<Option<Self::Value>>;
}

/// Whether an input carries no bytes or no text.
pub(crate) fn is_empty(input: &eth_codecs::BytesLike) -> bool {
    match input {
        eth_codecs::BytesLike::Raw(bytes) => bytes.is_empty(),
        eth_codecs::BytesLike::HexText(text) => text.is_empty(),
    }
}
