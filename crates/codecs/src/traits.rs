use crate::CodecResult;

/// Conversion contract between a primitive's external form and its canonical
/// storage form.
///
/// Implementors are stateless. [`StorageCodec::to_storage`] validates eagerly
/// and never corrects its input: a value that is not already acceptable is
/// rejected, not truncated or padded. [`StorageCodec::from_storage`] rebuilds
/// the canonical external value from what the store holds.
///
/// Absent values are modelled as `None` and pass through the `maybe_*`
/// helpers untouched.
pub trait StorageCodec {
    /// The caller-supplied input accepted before writing.
    type Input;

    /// The canonical external value returned after reading.
    type Value;

    /// The canonical storage representation.
    type Stored;

    /// Convert an input to its canonical storage form.
    fn to_storage(&self, input: Self::Input) -> CodecResult<Self::Stored>;

    /// Reconstruct the canonical external value from its storage form.
    fn from_storage(&self, raw: Self::Stored) -> CodecResult<Self::Value>;

    /// Check whether `external` is an acceptable external representation.
    fn validate(&self, external: &str) -> bool;

    /// Convert an optional input, mapping `None` to `None`.
    fn maybe_to_storage(&self, input: Option<Self::Input>) -> CodecResult<Option<Self::Stored>> {
        input.map(|input| self.to_storage(input)).transpose()
    }

    /// Reconstruct an optional value, mapping `None` to `None`.
    ///
    /// Useful in DB decoding, where the absence of a value is represented by
    /// `None`.
    fn maybe_from_storage(&self, raw: Option<Self::Stored>) -> CodecResult<Option<Self::Value>> {
        raw.map(|raw| self.from_storage(raw)).transpose()
    }
}
